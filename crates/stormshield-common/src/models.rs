//! Data models for the StormShield demo.
//!
//! These types are the JSON payloads the dashboard polls: a full weather
//! report with a nested QoS policy, and the lighter quick-forecast shape
//! used by the storm-shield panel. All values are mock data generated
//! fresh per call; nothing here persists.

use serde::{Deserialize, Serialize};

// ── QoS tier ────────────────────────────────────────────────────────

/// Bandwidth and application-access tier, derived purely from severity.
///
/// Serialized as the literal status strings the dashboard matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QosTier {
    #[serde(rename = "OPTIMAL")]
    Optimal,
    #[serde(rename = "THROTTLED")]
    Throttled,
    #[serde(rename = "CRITICAL / SOS")]
    Critical,
}

impl std::fmt::Display for QosTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QosTier::Optimal => write!(f, "OPTIMAL"),
            QosTier::Throttled => write!(f, "THROTTLED"),
            QosTier::Critical => write!(f, "CRITICAL / SOS"),
        }
    }
}

/// Error returned when parsing an unknown tier string.
#[derive(Debug, thiserror::Error)]
#[error("unknown QoS tier: {0}")]
pub struct ParseTierError(String);

impl std::str::FromStr for QosTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPTIMAL" => Ok(QosTier::Optimal),
            "THROTTLED" => Ok(QosTier::Throttled),
            "CRITICAL / SOS" => Ok(QosTier::Critical),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

// ── Network policy ──────────────────────────────────────────────────

/// Bandwidth cap and app-access lists for one QoS tier.
///
/// App lists are ordered; the dashboard renders them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPolicy {
    pub status: QosTier,
    pub bandwidth_cap: u8,
    pub allowed_apps: Vec<String>,
    pub blocked_apps: Vec<String>,
    pub priority_msg: String,
}

// ── Report shapes ───────────────────────────────────────────────────

/// Full weather/resilience report for one village.
///
/// Severity and resilience are percentages in 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub village_id: String,
    pub condition: String,
    pub temp: String,
    pub severity_score: u8,
    pub is_sos_triggered: bool,
    pub resilience_score: u8,
    pub alert_message: String,
    pub network_policy: NetworkPolicy,
    pub timestamp: String,
}

/// Lightweight forecast shape for the quick-poll panel.
///
/// Unlike [`WeatherReport`] this carries a `connectivity_score` and no
/// village or temperature fields; the two shapes are deliberately kept
/// separate rather than merged into one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickForecast {
    pub condition: String,
    pub severity_score: u8,
    pub connectivity_score: u8,
    pub is_sos_triggered: bool,
    pub alert_message: String,
    pub network_policy: NetworkPolicy,
    pub timestamp: String,
}
