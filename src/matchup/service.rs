//! The canonical match operation: client call, then render
//!
//! This is the only place that turns a failure into user-facing text. Every
//! path returns a string; nothing propagates past `run`.

use crate::core::error::{Result, SimError};
use crate::core::types::MatchRequest;
use crate::remote::SimulationClient;
use crate::report::render;
use std::future::Future;

/// Orchestrates one simulation request end to end
#[derive(Clone)]
pub struct MatchService {
    client: SimulationClient,
}

impl MatchService {
    pub fn new(client: SimulationClient) -> Self {
        Self { client }
    }

    /// Simulate a match and return the report, or a one-line error message
    pub async fn run(&self, request: &MatchRequest) -> String {
        let client = self.client.clone();
        let req = request.clone();
        let outcome = isolated(async move {
            let sheet = client.invoke(&req).await?;
            tracing::debug!(
                summoner_a = %req.riot_id_a(),
                summoner_b = %req.riot_id_b(),
                filled = sheet.filled_count(),
                "Rendering match report"
            );
            Ok::<_, SimError>(render(&req, &sheet))
        })
        .await;

        match outcome {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(
                    summoner_a = %request.riot_id_a(),
                    summoner_b = %request.riot_id_b(),
                    error = %err,
                    "Match simulation failed"
                );
                describe_failure(&err)
            }
        }
    }
}

/// Run `work` on its own task; a panic there becomes an unexpected fault
async fn isolated<F>(work: F) -> Result<String>
where
    F: Future<Output = Result<String>> + Send + 'static,
{
    tokio::spawn(work)
        .await
        .unwrap_or_else(|join_err| Err(SimError::Unexpected(join_err.to_string())))
}

/// User-facing text for a failed simulation
pub fn describe_failure(err: &SimError) -> String {
    match err {
        SimError::Http { status } => format!(
            "Error: Failed to fetch match simulation (Status: {})",
            status
        ),
        SimError::Transport(details) => format!(
            "Error: Failed to connect to League of Legends API - {}",
            details
        ),
        other => format!("Error: {}", other),
    }
}
