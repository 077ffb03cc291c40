//! Event formatting.
//!
//! Turns one activity event into one display line. Formatting is total:
//! missing or malformed fields fall back to fixed literals instead of
//! failing.

use activity_events::{ActivityEvent, EventKind};

/// Shown when an event has no usable repository name.
pub const UNKNOWN_REPOSITORY: &str = "unknown repository";

/// Shown for create events without a `ref_type`.
pub const DEFAULT_REF_TYPE: &str = "resource";

/// Shown for member events without `member.login`.
pub const UNKNOWN_MEMBER: &str = "unknown user";

/// Used for issue events without an `action`.
pub const DEFAULT_ISSUE_ACTION: &str = "updated";

/// Returns the repository name, or [`UNKNOWN_REPOSITORY`].
pub fn repo_display_name(event: &ActivityEvent) -> &str {
    event.repo_name().unwrap_or(UNKNOWN_REPOSITORY)
}

/// Formats a single event as a human-readable line.
pub fn format_event(event: &ActivityEvent) -> String {
    let repo = repo_display_name(event);
    let payload = &event.payload;

    match event.kind() {
        EventKind::Push => {
            format!("Pushed {} commit(s) to {}", payload.commit_count(), repo)
        }
        EventKind::Issues => {
            let action = non_empty(payload.action()).unwrap_or(DEFAULT_ISSUE_ACTION);
            format!("{} an issue in {}", capitalize_first(action), repo)
        }
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Create => {
            let ref_type = non_empty(payload.ref_type()).unwrap_or(DEFAULT_REF_TYPE);
            format!("Created {} in {}", ref_type, repo)
        }
        EventKind::Member => {
            let login = non_empty(payload.member_login()).unwrap_or(UNKNOWN_MEMBER);
            format!("Added {} as a collaborator to {}", login, repo)
        }
        EventKind::Public => format!("Made {} public", repo),
        other => format!("{} in {}", other.label(), repo),
    }
}

/// Upper-cases the first character and leaves the rest unchanged.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
