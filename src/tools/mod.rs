//! Externally named tools
//!
//! Several names, one operation: each alias renames its arguments into a
//! MatchRequest and hands it to MatchService::run.

pub mod aliases;
pub mod registry;

pub use aliases::{find_alias, ToolAlias, ToolDefinition, CANONICAL_TOOL, TOOL_ALIASES};
pub use registry::ToolRegistry;

use thiserror::Error;

/// Problems at the tool boundary, before the match service is reached
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
