//! QoS policy tables — maps severity to a bandwidth/app-access tier.
//!
//! Two tables live here: the three-band policy used by the full weather
//! report, and the two-tier quick policy used by the quick-poll panel.
//! Both are fixed lookups; tier selection is a pure function of severity
//! (or of the SOS flag for the quick tier).

use crate::models::{NetworkPolicy, QosTier};

const OPTIMAL_APPS: &[&str] = &[
    "Voice",
    "4K Video",
    "Social Media",
    "Gaming",
    "YouTube",
    "Netflix",
    "Streaming",
];

const THROTTLED_APPS: &[&str] = &["Voice", "WhatsApp", "Email", "Web Browsing", "Maps"];
const THROTTLED_BLOCKED: &[&str] = &[
    "Netflix",
    "Gaming",
    "YouTube",
    "Video Streaming",
    "Downloads",
];

const CRITICAL_APPS: &[&str] = &[
    "Emergency Calls",
    "SOS Calls",
    "Medical Data",
    "Hospital Updates",
    "Govt Alerts",
    "Ambulance GPS",
];
const CRITICAL_BLOCKED: &[&str] = &[
    "ALL ENTERTAINMENT",
    "Netflix",
    "YouTube",
    "Gaming",
    "Social Media",
    "Video Streaming",
    "Music Streaming",
];

const SOS_QUICK_APPS: &[&str] = &[
    "WhatsApp (Text)",
    "UPI Payments",
    "Emergency Calls",
    "Govt Alert Radio",
];
const SOS_QUICK_BLOCKED: &[&str] = &[
    "Netflix (4K)",
    "Instagram Reels",
    "YouTube",
    "Cloud Gaming",
];

/// Select the QoS policy for a severity score (0-100).
///
/// Bands: `<40` optimal, `[40,70)` throttled, `>=70` critical/SOS.
pub fn qos_policy(severity: u8) -> NetworkPolicy {
    match severity {
        0..=39 => NetworkPolicy {
            status: QosTier::Optimal,
            bandwidth_cap: 100,
            allowed_apps: owned(OPTIMAL_APPS),
            blocked_apps: vec![],
            priority_msg: "✅ Standard Routing Active. All services available.".into(),
        },
        40..=69 => NetworkPolicy {
            status: QosTier::Throttled,
            bandwidth_cap: 50,
            allowed_apps: owned(THROTTLED_APPS),
            blocked_apps: owned(THROTTLED_BLOCKED),
            priority_msg: "⚠️ High Latency detected. Entertainment services throttled. \
                           Essential services prioritized."
                .into(),
        },
        _ => NetworkPolicy {
            status: QosTier::Critical,
            bandwidth_cap: 10,
            allowed_apps: owned(CRITICAL_APPS),
            blocked_apps: owned(CRITICAL_BLOCKED),
            priority_msg: "🚨 LIFE-LINE PROTOCOL ACTIVE. Bandwidth locked for emergencies \
                           only. Entertainment services BLOCKED."
                .into(),
        },
    }
}

/// Two-tier policy for the quick forecast: standard access, or
/// SOS-throttled lifeline access when the SOS protocol is engaged.
pub fn quick_policy(sos: bool) -> NetworkPolicy {
    if sos {
        NetworkPolicy {
            status: QosTier::Critical,
            bandwidth_cap: 25,
            allowed_apps: owned(SOS_QUICK_APPS),
            blocked_apps: owned(SOS_QUICK_BLOCKED),
            priority_msg: "🚨 SOS protocol engaged. Bandwidth reserved for lifeline traffic."
                .into(),
        }
    } else {
        NetworkPolicy {
            status: QosTier::Optimal,
            bandwidth_cap: 100,
            allowed_apps: owned(OPTIMAL_APPS),
            blocked_apps: vec![],
            priority_msg: "✅ Standard Routing Active. All services available.".into(),
        }
    }
}

fn owned(apps: &[&str]) -> Vec<String> {
    apps.iter().map(|s| s.to_string()).collect()
}
