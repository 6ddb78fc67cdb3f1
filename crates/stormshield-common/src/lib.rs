//! Shared types for the StormShield demo.
//!
//! This crate contains:
//! - **Data models** — weather report and quick-forecast payloads polled
//!   by the dashboard
//! - **QoS policy tables** — severity-band bandwidth caps and app lists

pub mod models;
pub mod policy;
