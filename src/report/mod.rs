//! Response rendering
//!
//! Turns the service's `summoners` object into the fixed text report:
//! SummonerSheet -> render -> String

pub mod payload;
pub mod render;

pub use payload::{FieldValue, Phase, Side, StatField, SummonerSheet, PHASES};
pub use render::{render, PHASE_PLACEHOLDER, STAT_PLACEHOLDER};
