//! Remote simulation service access

pub mod client;

pub use client::SimulationClient;
