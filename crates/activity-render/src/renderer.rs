//! Activity rendering.
//!
//! Bounds a list of events to the most recent entries and produces the
//! lines shown to the user: a header followed by one bullet per event, or
//! a single empty-state line.

use activity_events::ActivityEvent;

use crate::config::RenderConfig;
use crate::formatter::format_event;

/// Header line for a non-empty activity list.
pub fn header_line(username: &str) -> String {
    format!("Recent Activity for {}:", username)
}

/// Line shown when a user has no activity.
pub fn empty_line(username: &str) -> String {
    format!("No recent activity found for {}.", username)
}

/// Renders activity lists using a [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ActivityRenderer {
    config: RenderConfig,
}

impl ActivityRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Number of events that will be shown out of `total`.
    pub fn shown_count(&self, total: usize) -> usize {
        total.min(self.config.effective_max_events())
    }

    /// Formats the leading events, in input order, each with the bullet prefix.
    pub fn body_lines(&self, events: &[ActivityEvent]) -> Vec<String> {
        events
            .iter()
            .take(self.config.effective_max_events())
            .map(|event| format!("{}{}", self.config.bullet, format_event(event)))
            .collect()
    }

    /// Renders the full output for `username`.
    pub fn render(&self, events: &[ActivityEvent], username: &str) -> Vec<String> {
        if events.is_empty() {
            return vec![empty_line(username)];
        }

        let mut lines = Vec::with_capacity(self.shown_count(events.len()) + 1);
        lines.push(header_line(username));
        lines.extend(self.body_lines(events));
        lines
    }
}

/// Renders with the default configuration (first 10 events, `"- "` bullets).
pub fn render(events: &[ActivityEvent], username: &str) -> Vec<String> {
    ActivityRenderer::default().render(events, username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_events::fixtures::numbered_watch_events;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            render(&[], "alice"),
            vec!["No recent activity found for alice.".to_string()]
        );
    }

    #[test]
    fn test_single_event() {
        let events = vec![ActivityEvent::new("WatchEvent").with_repo("x/y")];

        assert_eq!(
            render(&events, "bob"),
            vec!["Recent Activity for bob:".to_string(), "- Starred x/y".to_string()]
        );
    }

    #[test]
    fn test_truncates_to_ten() {
        let events = numbered_watch_events(15);
        let lines = render(&events, "carol");

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Recent Activity for carol:");
        assert_eq!(lines[1], "- Starred owner/repo-0");
        assert_eq!(lines[10], "- Starred owner/repo-9");
        assert!(!lines.iter().any(|l| l.contains("repo-10")));
    }

    #[test]
    fn test_exactly_ten_events() {
        let events = numbered_watch_events(10);
        assert_eq!(render(&events, "dave").len(), 11);
    }

    #[test]
    fn test_custom_limit_and_bullet() {
        let config = RenderConfig {
            max_events: 2,
            bullet: "* ".to_string(),
        };
        let renderer = ActivityRenderer::new(config);
        let lines = renderer.render(&numbered_watch_events(5), "erin");

        assert_eq!(
            lines,
            vec![
                "Recent Activity for erin:".to_string(),
                "* Starred owner/repo-0".to_string(),
                "* Starred owner/repo-1".to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_limit_still_shows_one_event() {
        let renderer = ActivityRenderer::new(RenderConfig::default().with_max_events(0));
        let lines = renderer.render(&numbered_watch_events(3), "frank");

        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_shown_count() {
        let renderer = ActivityRenderer::default();
        assert_eq!(renderer.shown_count(0), 0);
        assert_eq!(renderer.shown_count(4), 4);
        assert_eq!(renderer.shown_count(40), 10);
    }

    #[test]
    fn test_body_lines_have_no_header() {
        let renderer = ActivityRenderer::default();
        let lines = renderer.body_lines(&numbered_watch_events(2));

        assert_eq!(lines, vec!["- Starred owner/repo-0", "- Starred owner/repo-1"]);
    }
}
