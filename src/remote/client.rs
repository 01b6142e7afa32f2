//! Async HTTP client for the remote match simulation service
//!
//! One call per invocation: a form-encoded POST to `{base_url}/vs4`, bounded
//! by the configured timeout. No retries; the caller decides what a failure
//! looks like to the user.

use crate::core::config::ServiceConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::MatchRequest;
use crate::report::SummonerSheet;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Client for the simulation service
///
/// Cheap to clone; the underlying connection handle is shared.
#[derive(Clone)]
pub struct SimulationClient {
    client: Client,
    endpoint: String,
}

impl SimulationClient {
    /// Create a client from explicit configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SimError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.simulation_url(),
        })
    }

    /// Create a client from environment variables
    ///
    /// Optional: LOL_API_URL (defaults to https://1tier.xyz)
    pub fn from_env() -> Result<Self> {
        Self::new(&ServiceConfig::from_env())
    }

    /// Full URL the client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the service to simulate `request`
    ///
    /// # Returns
    /// The `summoners` sheet on status 200. Any other status is
    /// [`SimError::Http`]; network failures, timeouts, and unparseable bodies
    /// are [`SimError::Transport`].
    pub async fn invoke(&self, request: &MatchRequest) -> Result<SummonerSheet> {
        tracing::debug!(
            endpoint = %self.endpoint,
            summoner_a = %request.riot_id_a(),
            summoner_b = %request.riot_id_b(),
            lang = %request.language,
            "Requesting match simulation"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .form(&request.form_fields())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SimError::Http {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        SummonerSheet::from_body(body)
    }
}
