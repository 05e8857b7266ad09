//! Rollup Server Client
//!
//! Blocking HTTP implementation of [`Rollup`].

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use super::Rollup;
use crate::config::Config;
use crate::error::{DappError, Result};
use crate::protocol::{codec, FinishRequest, Outcome, PayloadRequest, RequestEnvelope};

/// HTTP client for the rollup server
pub struct RollupClient {
    /// Underlying HTTP client (connection pool)
    client: Client,

    /// Base URL, without trailing slash
    base_url: String,
}

impl RollupClient {
    /// Create a client for the server named in `config`
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.rollup_server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// POST a hex-encoded payload to `/notice` or `/report`
    fn post_payload(&self, endpoint: &'static str, text: &str) -> Result<()> {
        let body = PayloadRequest {
            payload: codec::encode(text),
        };

        let response = self.client.post(self.url(endpoint)).json(&body).send()?;
        check_success(endpoint, &response)?;

        tracing::trace!("/{} answered {}", endpoint, response.status());
        Ok(())
    }
}

impl Rollup for RollupClient {
    fn finish(&mut self, status: Outcome) -> Result<Option<RequestEnvelope>> {
        let body = FinishRequest { status };
        let response = self.client.post(self.url("finish")).json(&body).send()?;

        tracing::debug!("Received finish status {}", response.status());

        if response.status() == StatusCode::ACCEPTED {
            return Ok(None);
        }
        check_success("finish", &response)?;

        let bytes = response.bytes()?;
        RequestEnvelope::from_json(&bytes).map(Some)
    }

    fn notice(&mut self, text: &str) -> Result<()> {
        self.post_payload("notice", text)
    }

    fn report(&mut self, text: &str) -> Result<()> {
        self.post_payload("report", text)
    }
}

fn check_success(endpoint: &'static str, response: &Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(DappError::HttpStatus {
            endpoint,
            status: status.as_u16(),
        })
    }
}
