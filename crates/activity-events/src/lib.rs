//! Shared event types and decoding for GitHub user activity.
//!
//! This crate contains pure data structures with no formatting or network
//! logic. It is a dependency for all other crates in the workspace.

pub mod event;
pub mod kind;
pub mod payload;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export event types
pub use event::{ActivityEvent, Repo};

// Re-export kind types
pub use kind::{EventKind, EVENT_SUFFIX};

// Re-export payload types
pub use payload::Payload;
