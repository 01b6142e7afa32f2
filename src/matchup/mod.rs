//! Match simulation pipeline
//!
//! MatchRequest -> SimulationClient -> SummonerSheet -> render -> String

pub mod service;

pub use service::{describe_failure, MatchService};
