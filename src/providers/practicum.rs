use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::BotError;
use crate::providers::ReviewApi;

#[derive(Debug, Serialize)]
struct StatusQuery {
    from_date: i64,
}

/// Client for the homework review-status endpoint.
pub struct Practicum {
    endpoint: String,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl Practicum {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("OAuth {}", token))
                .context("review token is not a valid header value")?,
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("cannot build HTTP client for the review API")?;

        Ok(Practicum {
            endpoint: endpoint.to_string(),
            headers,
            client,
        })
    }
}

#[async_trait]
impl ReviewApi for Practicum {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError> {
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .headers(self.headers.clone())
            .query(&StatusQuery { from_date })
            .send()
            .await
            .map_err(|e| {
                BotError::ServiceUnavailable(format!(
                    "request to {} failed: {}",
                    self.endpoint, e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::ServiceUnavailable(format!(
                "endpoint {} returned status {}",
                self.endpoint,
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| {
            BotError::ServiceUnavailable(format!(
                "failed to read response from {}: {}",
                self.endpoint, e
            ))
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}
