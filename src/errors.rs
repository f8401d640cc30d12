use thiserror::Error;

/// Failures of a single polling iteration. The loop logs them and moves on.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("review service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("unexpected type for {what}: expected {expected}")]
    UnexpectedType {
        what: &'static str,
        expected: &'static str,
    },

    #[error("missing key `{0}` in API response")]
    MissingKey(&'static str),

    #[error("missing field `{0}` in homework record")]
    MissingField(&'static str),

    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("failed to parse API response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Startup failures. Any of these stops the process before polling begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("built-in status `{0}` cannot be overridden")]
    ReservedVerdict(String),
}
