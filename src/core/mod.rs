pub mod config;
pub mod error;
pub mod types;

pub use config::ServiceConfig;
pub use error::{Result, SimError};
pub use types::MatchRequest;
