//! Command-line front end for GitHub user activity.
//!
//! Everything around the renderer lives here: argument parsing,
//! configuration, the events API client, and error reporting.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;

pub use cli::Args;
pub use client::{decode_response, GitHubClient};
pub use config::{ApiConfig, AppConfig};
pub use error::{AppError, FetchError, Result};
