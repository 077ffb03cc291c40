use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "github-activity")]
#[command(about = "Show a GitHub user's recent public activity")]
#[command(version)]
pub struct Args {
    /// GitHub username to look up
    #[arg(value_parser = parse_username)]
    pub username: String,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of events to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Applies command-line overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(limit) = self.limit {
            config.render.max_events = limit;
        }
        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.api.timeout_secs = timeout_secs;
        }
    }
}

fn parse_username(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("username must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_username_only() {
        let args = Args::try_parse_from(["github-activity", "octocat"]).unwrap();

        assert_eq!(args.username, "octocat");
        assert!(args.config.is_none());
        assert!(args.limit.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_missing_username_is_usage_error() {
        let err = Args::try_parse_from(["github-activity"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let err = Args::try_parse_from(["github-activity", "  "]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = Args::try_parse_from([
            "github-activity",
            "octocat",
            "--limit",
            "3",
            "--api-url",
            "http://localhost:9000",
            "--timeout-secs",
            "2",
            "-v",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        args.apply_to(&mut config);

        assert!(args.verbose);
        assert_eq!(config.render.max_events, 3);
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 2);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let args = Args::try_parse_from(["github-activity", "octocat"]).unwrap();
        let mut config = AppConfig::from_str("[render]\nmax_events = 7").unwrap();
        args.apply_to(&mut config);

        assert_eq!(config.render.max_events, 7);
    }
}
