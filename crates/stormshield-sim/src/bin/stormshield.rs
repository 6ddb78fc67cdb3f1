//! StormShield demo driver.
//!
//! Emits mock weather/resilience readings as JSON lines, one per
//! reading. Pass `--seed` for reproducible output, `--quick` for the
//! lightweight forecast shape.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use stormshield_sim::clock::SystemClock;
use stormshield_sim::{check_resilience_with, quick_forecast_with};

/// StormShield mock reading generator.
#[derive(Parser, Debug)]
#[command(name = "stormshield", about = "StormShield mock reading generator")]
struct Cli {
    /// Village to report on (unknown ids fall back to chitkul).
    #[arg(long, default_value = "chitkul")]
    village: String,

    /// Technology type, matched by substring: Satellite, Microwave,
    /// Fiber, Macro/Small.
    #[arg(long, default_value = "Fiber Optic")]
    tech: String,

    /// Generate disaster-scenario readings instead of nominal ones.
    #[arg(long, default_value_t = false)]
    simulate: bool,

    /// Emit the lightweight quick-forecast shape instead of the full
    /// report.
    #[arg(long, default_value_t = false)]
    quick: bool,

    /// Number of readings to emit.
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Seed for the random source (reproducible output).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(
        village = %cli.village,
        tech = %cli.tech,
        simulate = cli.simulate,
        quick = cli.quick,
        "stormshield generator starting"
    );

    let clock = SystemClock;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for _ in 0..cli.count {
        let line = if cli.quick {
            serde_json::to_string(&quick_forecast_with(cli.simulate, &mut rng, &clock))?
        } else {
            serde_json::to_string(&check_resilience_with(
                &cli.village,
                &cli.tech,
                cli.simulate,
                &mut rng,
                &clock,
            ))?
        };
        println!("{line}");
    }

    Ok(())
}
