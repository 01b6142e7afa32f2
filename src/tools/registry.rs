//! Dispatch from external tool names to the match service

use crate::matchup::MatchService;
use crate::tools::aliases::{find_alias, ToolDefinition, TOOL_ALIASES};
use crate::tools::ToolError;
use serde_json::Value;

/// Every registered tool, backed by one shared service
#[derive(Clone)]
pub struct ToolRegistry {
    service: MatchService,
}

impl ToolRegistry {
    pub fn new(service: MatchService) -> Self {
        Self { service }
    }

    /// Definitions for every tool, in registration order
    pub fn list(&self) -> Vec<ToolDefinition> {
        TOOL_ALIASES.iter().map(|a| a.definition()).collect()
    }

    /// Call a tool by name
    ///
    /// # Errors
    /// Only for host-side problems: an unknown name or arguments that do not
    /// fit the tool's parameters. Simulation failures come back as `Ok` text.
    pub async fn call(&self, name: &str, args: &Value) -> Result<String, ToolError> {
        let alias = find_alias(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let request = alias.bind(args)?;
        tracing::debug!(tool = name, "Dispatching tool call");
        Ok(self.service.run(&request).await)
    }
}
