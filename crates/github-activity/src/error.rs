use thiserror::Error;

use activity_render::ConfigError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures while fetching and decoding the events response.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("User \"{username}\" not found.")]
    NotFound { username: String },

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Failed to fetch data (Status Code: {status})")]
    UnexpectedStatus { status: u16 },

    #[error("Received unexpected data format from GitHub: {0}")]
    Format(String),

    #[error("Network error: {}", transport_detail(.0))]
    Transport(#[source] reqwest::Error),

    #[error("Invalid API URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

/// Joins the error with each distinct cause in its source chain.
fn transport_detail(err: &reqwest::Error) -> String {
    let mut parts = Vec::new();
    if err.is_timeout() {
        parts.push("request timed out".to_string());
    }
    parts.push(err.to_string());

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|part| part.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Format(err.to_string())
    }
}

/// Top-level error for one invocation of the tool.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let not_found = FetchError::NotFound {
            username: "ghost".to_string(),
        };
        assert_eq!(not_found.to_string(), "User \"ghost\" not found.");
        assert_eq!(
            FetchError::RateLimited.to_string(),
            "API rate limit exceeded. Please try again later."
        );
        assert_eq!(
            FetchError::UnexpectedStatus { status: 502 }.to_string(),
            "Failed to fetch data (Status Code: 502)"
        );
    }

    #[test]
    fn test_app_error_is_transparent_for_fetch() {
        let err = AppError::from(FetchError::RateLimited);
        assert_eq!(err.to_string(), FetchError::RateLimited.to_string());
    }

    #[test]
    fn test_json_error_maps_to_format() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(json_err), FetchError::Format(_)));
    }
}
