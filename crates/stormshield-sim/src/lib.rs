//! Mock weather and network-resilience scenario generation for the
//! StormShield demo.
//!
//! Everything here is a stand-in data generator: no sensors, no
//! persistence, no transport. Each call reads the fixed village scenario
//! table, draws from a random source, and returns a fresh report. Calls
//! are independent and safe to make from any thread.
//!
//! Randomness and the wall clock are the only impurities; both sit
//! behind seams ([`clock::Clock`] and `&mut impl Rng`) so tests can pin
//! them.

pub mod clock;
pub mod forecast;
pub mod generator;
pub mod scenario;

pub use forecast::{quick_forecast, quick_forecast_with};
pub use generator::{check_resilience, check_resilience_with};
