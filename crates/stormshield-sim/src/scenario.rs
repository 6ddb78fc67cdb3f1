//! Village scenario table — fixed base weather readings per village.
//!
//! Each village carries a nominal (`real`) and a disaster (`sim`) base
//! reading. Lookup never fails: unknown village ids fall back to the
//! default entry.

/// A base weather reading: condition label plus severity (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseReading {
    pub condition: &'static str,
    pub severity: u8,
}

/// Nominal and disaster base readings for one village.
#[derive(Debug, Clone, Copy)]
pub struct VillageScenario {
    pub village_id: &'static str,
    pub real: BaseReading,
    pub sim: BaseReading,
}

/// Fallback village for unknown ids.
pub const DEFAULT_VILLAGE: &str = "chitkul";

/// The fixed scenario table. The first entry is the fallback.
pub const SCENARIOS: &[VillageScenario] = &[
    VillageScenario {
        village_id: "chitkul",
        real: BaseReading {
            condition: "Clear",
            severity: 10,
        },
        sim: BaseReading {
            condition: "Blizzard",
            severity: 90,
        },
    },
    VillageScenario {
        village_id: "kalpa",
        real: BaseReading {
            condition: "Cloudy",
            severity: 30,
        },
        sim: BaseReading {
            condition: "High Winds",
            severity: 75,
        },
    },
    VillageScenario {
        village_id: "langza",
        real: BaseReading {
            condition: "Sunny",
            severity: 0,
        },
        sim: BaseReading {
            condition: "Storm",
            severity: 60,
        },
    },
];

/// Look up a village's scenario entry, falling back to the default
/// entry for unknown ids. Never fails.
pub fn lookup(village_id: &str) -> &'static VillageScenario {
    SCENARIOS
        .iter()
        .find(|s| s.village_id == village_id)
        .unwrap_or_else(|| {
            tracing::debug!(village = %village_id, "unknown village, using default scenario");
            &SCENARIOS[0]
        })
}

/// Dramatized condition pool for a base condition, used in simulate
/// mode. Three categories: blizzard-like, wind-like, and storm-like
/// (the catch-all).
pub fn dramatized_pool(base_condition: &str) -> &'static [&'static str] {
    match base_condition {
        "Blizzard" => &[
            "Heavy Snow",
            "Whiteout",
            "Blizzard",
            "Gale Winds",
            "Avalanche Alert",
        ],
        "High Winds" => &[
            "Severe Gales",
            "Storm Surge",
            "Tornado Warning",
            "High Winds",
        ],
        _ => &["Storm", "Severe Storm", "Lightning Storm", "Hailstorm"],
    }
}
