//! lolgpt - League of Legends mock match simulation tools

pub mod core;
pub mod matchup;
pub mod mcp;
pub mod remote;
pub mod report;
pub mod tools;
