use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::errors::ConfigError;
use crate::models::VerdictTable;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The three secrets the bot needs. Empty values count as absent.
#[derive(Clone, Default)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

// Tokens must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &self.practicum_token.as_ref().map(|_| "***"))
            .field("telegram_token", &self.telegram_token.as_ref().map(|_| "***"))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Credentials {
    pub fn check_tokens(&self) -> bool {
        self.missing().is_empty()
    }

    /// Names of the environment variables that are absent or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn practicum_token(&self) -> &str {
        self.practicum_token.as_deref().unwrap_or_default()
    }

    pub fn telegram_token(&self) -> &str {
        self.telegram_token.as_deref().unwrap_or_default()
    }

    pub fn telegram_chat_id(&self) -> &str {
        self.telegram_chat_id.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoint: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
    pub verdicts: VerdictTable,
    /// Bot API server override, `None` for the public Telegram endpoint.
    pub telegram_api_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Credentials are
    /// read as-is; call `Credentials::check_tokens` before using them.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials {
            practicum_token: lookup("PRACTICUM_TOKEN"),
            telegram_token: lookup("TELEGRAM_TOKEN"),
            telegram_chat_id: lookup("TELEGRAM_CHAT_ID"),
        };

        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let retry_period = match lookup("RETRY_PERIOD") {
            Some(value) => parse_seconds("RETRY_PERIOD", &value)?,
            None => Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT") {
            Some(value) => parse_seconds("REQUEST_TIMEOUT", &value)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let verdicts = match lookup("EXTRA_VERDICTS") {
            Some(raw) if !raw.trim().is_empty() => {
                let extra: BTreeMap<String, String> =
                    serde_json::from_str(&raw).map_err(|e| ConfigError::InvalidSetting {
                        name: "EXTRA_VERDICTS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                VerdictTable::with_extra(extra)?
            }
            _ => VerdictTable::default(),
        };

        let telegram_api_url = match lookup("TELEGRAM_API_URL") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidSetting {
                    name: "TELEGRAM_API_URL",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?)
            }
            _ => None,
        };

        Ok(Config {
            credentials,
            endpoint,
            retry_period,
            request_timeout,
            verdicts,
            telegram_api_url,
        })
    }
}

fn parse_seconds(name: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidSetting {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(invalid("expected a whole number of seconds")),
    }
}
