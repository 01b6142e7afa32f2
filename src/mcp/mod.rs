//! Tool host: JSON-RPC 2.0 over stdio
//!
//! Process wiring only. Lists the tool table and forwards `tools/call` to the
//! ToolRegistry.

pub mod protocol;
pub mod server;

pub use server::McpServer;
