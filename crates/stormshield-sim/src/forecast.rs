//! Quick forecast generation — the lightweight poll shape.
//!
//! Unlike [`crate::generator`], this path ignores village and technology
//! inputs entirely: condition, severity, and connectivity are drawn from
//! two disjoint pools keyed only on the simulate flag, and the policy is
//! two-tier (standard vs SOS-throttled). In simulate mode the alert
//! embeds a projected impact time one to three hours out.

use chrono::Duration;
use rand::Rng;

use stormshield_common::models::QuickForecast;
use stormshield_common::policy;

use crate::clock::{Clock, SystemClock};

const CALM_CONDITIONS: &[&str] = &["Clear Skies", "Sunny", "Partly Cloudy", "Light Breeze"];
const DISASTER_CONDITIONS: &[&str] = &["Blizzard", "Cloudburst", "Flash Flood", "Whiteout"];

/// Generate a quick forecast using the system clock and the thread-local
/// random source.
pub fn quick_forecast(simulate: bool) -> QuickForecast {
    quick_forecast_with(simulate, &mut rand::rng(), &SystemClock)
}

/// Generate a quick forecast with an explicit random source and clock.
///
/// Simulate mode always engages the SOS protocol; nominal mode never
/// does.
pub fn quick_forecast_with(
    simulate: bool,
    rng: &mut impl Rng,
    clock: &impl Clock,
) -> QuickForecast {
    let now = clock.now();

    if simulate {
        let condition = DISASTER_CONDITIONS[rng.random_range(0..DISASTER_CONDITIONS.len())];
        let severity: u8 = rng.random_range(75..=98);
        let connectivity: u8 = rng.random_range(10..=45);
        let impact = now
            + Duration::hours(rng.random_range(1..=3))
            + Duration::minutes(rng.random_range(0..=59));

        QuickForecast {
            condition: condition.to_string(),
            severity_score: severity,
            connectivity_score: connectivity,
            is_sos_triggered: true,
            alert_message: format!(
                "🚨 {condition} expected to hit by {}. SOS protocol engaged.",
                impact.format("%H:%M")
            ),
            network_policy: policy::quick_policy(true),
            timestamp: now.format("%H:%M:%S").to_string(),
        }
    } else {
        let condition = CALM_CONDITIONS[rng.random_range(0..CALM_CONDITIONS.len())];
        let severity: u8 = rng.random_range(5..=30);
        let connectivity: u8 = rng.random_range(85..=100);

        QuickForecast {
            condition: condition.to_string(),
            severity_score: severity,
            connectivity_score: connectivity,
            is_sos_triggered: false,
            alert_message: "All Systems Nominal".to_string(),
            network_policy: policy::quick_policy(false),
            timestamp: now.format("%H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stormshield_common::models::QosTier;

    fn fixed_clock() -> FixedClock {
        FixedClock(
            chrono::Local
                .with_ymd_and_hms(2025, 1, 15, 10, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn simulate_always_triggers_sos() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let fc = quick_forecast_with(true, &mut rng, &fixed_clock());
            assert!(fc.is_sos_triggered, "seed {seed}");
            assert_eq!(fc.network_policy.status, QosTier::Critical);
            assert_eq!(fc.network_policy.bandwidth_cap, 25);
        }
    }

    #[test]
    fn nominal_never_triggers_sos() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let fc = quick_forecast_with(false, &mut rng, &fixed_clock());
            assert!(!fc.is_sos_triggered, "seed {seed}");
            assert_eq!(fc.network_policy.status, QosTier::Optimal);
            assert_eq!(fc.network_policy.bandwidth_cap, 100);
            assert_eq!(fc.alert_message, "All Systems Nominal");
        }
    }

    #[test]
    fn pools_are_disjoint_by_mode() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sim = quick_forecast_with(true, &mut rng, &fixed_clock());
            assert!(DISASTER_CONDITIONS.contains(&sim.condition.as_str()));
            assert!(!CALM_CONDITIONS.contains(&sim.condition.as_str()));

            let mut rng = StdRng::seed_from_u64(seed);
            let calm = quick_forecast_with(false, &mut rng, &fixed_clock());
            assert!(CALM_CONDITIONS.contains(&calm.condition.as_str()));
            assert!(!DISASTER_CONDITIONS.contains(&calm.condition.as_str()));
        }
    }

    #[test]
    fn scores_stay_within_pools() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sim = quick_forecast_with(true, &mut rng, &fixed_clock());
            assert!((75..=98).contains(&sim.severity_score));
            assert!((10..=45).contains(&sim.connectivity_score));

            let mut rng = StdRng::seed_from_u64(seed);
            let calm = quick_forecast_with(false, &mut rng, &fixed_clock());
            assert!((5..=30).contains(&calm.severity_score));
            assert!((85..=100).contains(&calm.connectivity_score));
        }
    }

    #[test]
    fn simulate_alert_embeds_impact_time() {
        // Impact is 1-3h plus 0-59min after a 10:30 fixed clock, so the
        // embedded HH:MM always falls in 11:30..=13:29.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let fc = quick_forecast_with(true, &mut rng, &fixed_clock());
            assert!(fc.alert_message.contains("expected to hit by"), "seed {seed}");

            let time_part = fc
                .alert_message
                .split("expected to hit by ")
                .nth(1)
                .and_then(|rest| rest.split('.').next())
                .unwrap();
            let (hh, mm) = time_part.split_once(':').unwrap();
            let minutes: i32 = hh.parse::<i32>().unwrap() * 60 + mm.parse::<i32>().unwrap();
            assert!(
                (11 * 60 + 30..=13 * 60 + 29).contains(&minutes),
                "seed {seed}: impact {time_part}"
            );
        }
    }

    #[test]
    fn timestamp_is_wall_clock() {
        let mut rng = StdRng::seed_from_u64(1);
        let fc = quick_forecast_with(false, &mut rng, &fixed_clock());
        assert_eq!(fc.timestamp, "10:30:00");
    }
}
