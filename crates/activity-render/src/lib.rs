//! Activity rendering: event formatting and list rendering.
//!
//! This crate turns decoded activity events into the lines printed by the
//! command-line tool. It performs no network or console I/O; callers hand
//! it a slice of events and write out the returned lines.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Vec<ActivityEvent>   ┌─────────────────┐   Vec<String>
//! │ fetch client │ ─────────────────────▶ │ activity-render │ ─────────────▶ stdout
//! └──────────────┘                        └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`formatter`]: One event to one line, with fallbacks for missing fields
//! - [`renderer`]: Header, truncation, and bullet lines
//! - [`config`]: TOML-loadable renderer settings

pub mod config;
pub mod formatter;
pub mod renderer;

// Re-export config types
pub use config::{ConfigError, RenderConfig, TomlSerializeError, DEFAULT_BULLET, DEFAULT_MAX_EVENTS};

// Re-export formatter types
pub use formatter::{
    capitalize_first, format_event, repo_display_name, DEFAULT_ISSUE_ACTION, DEFAULT_REF_TYPE,
    UNKNOWN_MEMBER, UNKNOWN_REPOSITORY,
};

// Re-export renderer types
pub use renderer::{empty_line, header_line, render, ActivityRenderer};
