//! Event Kinds
//!
//! The closed set of kinds that get special formatting, plus an open
//! `Other` variant for everything the events API may add later.

use std::fmt;

/// Suffix carried by every GitHub event type name.
pub const EVENT_SUFFIX: &str = "Event";

/// Category of an activity event.
///
/// Every `type` string maps to exactly one kind. Unrecognized names land in
/// [`EventKind::Other`] and keep their original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    Issues,
    Watch,
    Create,
    Member,
    Public,
    Other(String),
}

impl EventKind {
    /// Maps a wire type name to its kind. Matching is case-sensitive.
    pub fn parse(name: &str) -> Self {
        match name {
            "PushEvent" => EventKind::Push,
            "IssuesEvent" => EventKind::Issues,
            "WatchEvent" => EventKind::Watch,
            "CreateEvent" => EventKind::Create,
            "MemberEvent" => EventKind::Member,
            "PublicEvent" => EventKind::Public,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// Returns the wire type name for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Push => "PushEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Member => "MemberEvent",
            EventKind::Public => "PublicEvent",
            EventKind::Other(name) => name,
        }
    }

    /// Returns the type name with one trailing `"Event"` removed.
    ///
    /// Names without the suffix are returned verbatim.
    pub fn label(&self) -> &str {
        let name = self.as_str();
        name.strip_suffix(EVENT_SUFFIX).unwrap_or(name)
    }

    /// Returns all kinds with a dedicated formatting rule.
    pub fn known() -> &'static [EventKind] {
        &[
            EventKind::Push,
            EventKind::Issues,
            EventKind::Watch,
            EventKind::Create,
            EventKind::Member,
            EventKind::Public,
        ]
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
