//! Runway CLI
//!
//! Loads an exported account snapshot and prints a runway forecast, with
//! optional what-if analysis of uncommitted spends.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use runway::forecast::{ForecastConfig, ForecastEngine, SIMULATION_TRIALS};
use runway::ledger::load_snapshot;
use runway::scenario::{HypotheticalSpend, ScenarioComparator};

/// Forecast how many days a cash balance will survive
#[derive(Debug, Parser)]
#[command(name = "runway", version)]
struct Args {
    /// Path to an exported account snapshot (JSON)
    snapshot: PathBuf,

    /// Override the safety buffer from the snapshot
    #[arg(long)]
    buffer: Option<f64>,

    /// Hypothetical spend amount to test (repeatable)
    #[arg(long = "what-if", value_name = "AMOUNT")]
    what_if: Vec<f64>,

    /// Number of simulation trials
    #[arg(long, default_value_t = SIMULATION_TRIALS)]
    trials: usize,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut snapshot = load_snapshot(&args.snapshot)?;
    if let Some(buffer) = args.buffer {
        snapshot.buffer = buffer;
    }

    let now = Utc::now();
    let engine = ForecastEngine::new(ForecastConfig {
        trials: args.trials,
        seed: args.seed,
    });

    let result = engine.forecast(
        snapshot.balance,
        &snapshot.transactions,
        snapshot.buffer,
        now,
        &snapshot.obligations,
    );

    println!("Runway Forecast");
    println!("===============\n");
    println!("Balance:    {:.2} (buffer {:.2})", snapshot.balance, snapshot.buffer);
    println!("Burn rate:  {:.2}/day", result.burn_rate);
    if result.runway.is_unbounded() {
        println!("Runway:     {}+ days (sustainable horizon)", result.runway.days());
    } else {
        println!(
            "Runway:     {} days (10th-90th: {}-{})",
            result.runway.days(),
            result.runway_range.min,
            result.runway_range.max
        );
    }
    println!("Status:     {:?}", result.status);
    println!("Risk score: {}/100", result.risk_score);
    match result.zero_date {
        Some(date) => println!("Zero date:  {}", date.date_naive()),
        None => println!("Zero date:  beyond horizon"),
    }

    if !args.what_if.is_empty() {
        let spends: Vec<HypotheticalSpend> =
            args.what_if.iter().copied().map(HypotheticalSpend::new).collect();
        let comparator = ScenarioComparator::new(engine);
        let scenario = comparator.simulate(&snapshot, &spends, now);

        // Round to cents for display
        let cost = (scenario.delta.cost * 100.0).round() / 100.0;

        println!("\nWhat-if ({} spend{}, total {:.2})", spends.len(),
            if spends.len() == 1 { "" } else { "s" }, cost);
        println!("{}", "-".repeat(40));
        println!(
            "Runway:     {} -> {} days ({} lost)",
            scenario.baseline.runway.days(),
            scenario.simulated.runway.days(),
            scenario.delta.days_lost
        );
        println!("Status:     {:?} -> {:?}", scenario.baseline.status, scenario.simulated.status);
        println!("Verdict:    [{:?}] {}", scenario.analysis.risk_level, scenario.analysis.advice);
    }

    Ok(())
}
