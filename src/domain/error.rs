use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarNameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Service(#[from] ServiceFailure),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Why the chat-completion call did not produce a usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    #[error("Invalid API key, please check your configuration")]
    Unauthorized,

    #[error("API rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Request timed out after {0} seconds, please check your network connection")]
    Timeout(u64),

    #[error("API call failed: {0}")]
    Upstream(String),
}

/// `err` followed by each of its sources, joined with ": ".
///
/// Top-level transport errors often only say which request failed; the cause
/// (refused connection, DNS lookup) sits further down the chain.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

/// Message text for a surfaced error, never empty.
pub fn describe(err: &dyn std::fmt::Display) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        "unknown error".to_string()
    } else {
        text
    }
}
