//! Canned events for tests in this workspace.
//!
//! Compiled only for this crate's tests or with the `test-fixtures` feature,
//! which downstream crates turn on from their `[dev-dependencies]`.

use serde_json::json;

use crate::ActivityEvent;

/// Raw JSON body of the sample events response.
pub const SAMPLE_EVENTS_JSON: &str = include_str!("../tests/fixtures/sample_events.json");

/// Returns sample events from the fixtures file.
///
/// Contains 12 events, newest first:
/// - one of each specially formatted kind with a complete payload
/// - a pull request and an issue comment (default formatting)
/// - a push without `commits`, a create without `ref_type`
/// - a fork with no `repo`, a member event without `member`
pub fn sample_events() -> Vec<ActivityEvent> {
    ActivityEvent::list_from_json(SAMPLE_EVENTS_JSON)
        .unwrap_or_else(|e| panic!("Failed to parse sample_events.json: {}", e))
}

/// Returns `count` watch events on repositories named `owner/repo-{i}`.
pub fn numbered_watch_events(count: usize) -> Vec<ActivityEvent> {
    (0..count)
        .map(|i| ActivityEvent::new("WatchEvent").with_repo(format!("owner/repo-{}", i)))
        .collect()
}

/// Returns a push event with `commits` entries.
pub fn push_event(repo: &str, commits: usize) -> ActivityEvent {
    let commits: Vec<_> = (0..commits).map(|i| json!({ "sha": format!("{:07x}", i) })).collect();
    ActivityEvent::new("PushEvent")
        .with_repo(repo)
        .with_payload(json!({ "commits": commits }))
}
