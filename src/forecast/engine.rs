//! Bootstrap Monte Carlo forecast engine
//!
//! Repeatedly replays plausible futures by resampling the historical daily
//! spend vector with replacement, jittering each draw, and walking the
//! balance down day by day until it depletes or the horizon cap is reached.
//! The survival-day distribution is then reduced to a median runway, a
//! 10th/90th percentile band, a categorical status, and a risk score.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::ledger::{Obligation, Transaction};

use super::extract::{daily_spend_vector, mean, sampling_vector};
use super::result::{ForecastResult, RiskStatus, Runway, RunwayRange, HORIZON_DAYS};

/// Number of independent simulation trials per forecast
pub const SIMULATION_TRIALS: usize = 2000;

/// Configuration for a forecast run
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Number of simulation trials
    pub trials: usize,

    /// Base seed for the per-trial random streams. `None` seeds from OS
    /// entropy; a fixed value makes the whole forecast reproducible
    /// regardless of how trials are scheduled across threads.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            trials: SIMULATION_TRIALS,
            seed: None,
        }
    }
}

/// A future obligation resolved to the instant it hits the balance
#[derive(Debug, Clone, Copy)]
struct DuePayment {
    due: DateTime<Utc>,
    amount: f64,
}

/// Main forecast engine
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    /// Create an engine with the given config
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Run a full forecast.
    ///
    /// Pure in its inputs: nothing is mutated, and out-of-range numeric
    /// inputs are clamped to 0 rather than rejected. Trials run in parallel;
    /// each trial owns an independent random stream derived from the base
    /// seed, so scheduling order never changes the outcome.
    pub fn forecast(
        &self,
        current_balance: f64,
        transactions: &[Transaction],
        buffer_amount: f64,
        now: DateTime<Utc>,
        obligations: &[Obligation],
    ) -> ForecastResult {
        let balance = safe_num(current_balance);
        let buffer = safe_num(buffer_amount);

        let daily = daily_spend_vector(transactions, now);
        let burn_rate = mean(&daily);
        let sampling = sampling_vector(&daily);

        // Only strictly-future obligations participate, ascending by due date
        let mut due: Vec<DuePayment> = obligations
            .iter()
            .map(|o| DuePayment {
                due: o.due_instant(),
                amount: o.amount,
            })
            .filter(|p| p.due > now)
            .collect();
        due.sort_by_key(|p| p.due);

        // Buffer is subtracted once up front as a safety margin, not
        // enforced as a floor during the walk
        let start_balance = balance - buffer;

        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        log::debug!(
            "forecast: {} trials, {} sampling days, {} obligations, burn {:.2}/day",
            self.config.trials,
            sampling.len(),
            due.len(),
            burn_rate
        );

        let mut survivals: Vec<u32> = (0..self.config.trials as u64)
            .into_par_iter()
            .map(|trial| {
                let mut rng = ChaCha8Rng::seed_from_u64(trial_seed(base_seed, trial));
                run_trial(start_balance, &sampling, now, &due, &mut rng)
            })
            .collect();
        survivals.sort_unstable();

        let median = percentile(&survivals, 0.50);
        let runway = Runway::from_survival(median);
        let runway_range = RunwayRange {
            min: percentile(&survivals, 0.10),
            max: percentile(&survivals, 0.90),
        };

        let zero_date = if runway.is_unbounded() {
            None
        } else {
            Some(now + Duration::days(runway.days() as i64))
        };

        ForecastResult {
            burn_rate,
            runway,
            runway_range,
            status: classify(balance, buffer, runway),
            risk_score: risk_score(runway.days()),
            zero_date,
        }
    }
}

/// One depletion walk; returns the number of days survived, capped at the
/// horizon
fn run_trial<R: Rng + ?Sized>(
    start_balance: f64,
    sampling: &[f64],
    now: DateTime<Utc>,
    due: &[DuePayment],
    rng: &mut R,
) -> u32 {
    let mut balance = start_balance;
    let mut position = now;
    let mut days = 0u32;
    let mut next_due = 0usize;

    while balance > 0.0 && days < HORIZON_DAYS {
        // Bootstrap draw with multiplicative jitter so exact historical
        // values do not repeat
        let draw = if sampling.is_empty() {
            0.0
        } else {
            sampling[rng.gen_range(0..sampling.len())]
        };
        balance -= draw * rng.gen_range(0.9..1.1);

        position += Duration::days(1);
        days += 1;

        // Each obligation applies at most once per trial
        while next_due < due.len() && due[next_due].due <= position {
            balance -= due[next_due].amount;
            next_due += 1;
        }
    }

    days
}

/// Value at sorted index `floor(n * p)`; 0 for an empty sequence
fn percentile(sorted: &[u32], p: f64) -> u32 {
    if sorted.is_empty() {
        return 0;
    }
    let index = (sorted.len() as f64 * p) as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Piecewise-linear risk score: 100 below 30 days, 0 above 90 days
fn risk_score(runway_days: u32) -> u8 {
    if runway_days < 30 {
        100
    } else if runway_days > 90 {
        0
    } else {
        (((90 - runway_days) as f64 / 60.0) * 100.0).round() as u8
    }
}

/// Status classification, first match wins
fn classify(balance: f64, buffer: f64, runway: Runway) -> RiskStatus {
    if balance < buffer {
        RiskStatus::CriticalBelowBuffer
    } else if runway.days() < 30 {
        RiskStatus::Danger
    } else if runway.days() < 90 {
        RiskStatus::Warning
    } else if runway.is_unbounded() {
        RiskStatus::Sustainable
    } else {
        RiskStatus::Healthy
    }
}

/// Non-finite numeric inputs are treated as 0, never rejected
fn safe_num(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Private random stream for one trial (splitmix-style seed mixing)
fn trial_seed(base_seed: u64, trial: u64) -> u64 {
    let mut z = base_seed.wrapping_add(trial.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
