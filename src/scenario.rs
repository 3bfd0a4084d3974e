//! What-if scenario comparison
//!
//! Runs the forecast engine twice, once on the account as it stands and once
//! with a hypothetical spend already taken out of the balance, and reports
//! the runway days lost plus a qualitative verdict. The transaction history
//! and obligations are left untouched; only the starting balance moves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forecast::{ForecastEngine, ForecastResult, RiskStatus};
use crate::ledger::AccountSnapshot;

/// A spend the user is considering but has not committed to the ledger
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HypotheticalSpend {
    pub amount: f64,
}

impl HypotheticalSpend {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

/// Difference between baseline and simulated forecasts
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDelta {
    /// Total hypothetical spend
    pub cost: f64,
    /// Runway days lost, never negative
    pub days_lost: u32,
}

/// Qualitative severity of the hypothetical spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactLevel {
    /// Display color for the verdict
    pub fn color(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "#32D74B",
            ImpactLevel::Medium => "#FF9F0A",
            ImpactLevel::High | ImpactLevel::Critical => "#FF453A",
        }
    }
}

/// Human-readable verdict on the hypothetical spend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnalysis {
    pub advice: String,
    pub risk_level: ImpactLevel,
    pub risk_color: &'static str,
}

/// Complete what-if output, produced and consumed within one interaction
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub baseline: ForecastResult,
    pub simulated: ForecastResult,
    pub delta: ScenarioDelta,
    pub analysis: ScenarioAnalysis,
}

/// Runs baseline-vs-simulated forecast pairs over a snapshot
#[derive(Debug, Clone, Default)]
pub struct ScenarioComparator {
    engine: ForecastEngine,
}

impl ScenarioComparator {
    /// Create a comparator around an existing engine
    pub fn new(engine: ForecastEngine) -> Self {
        Self { engine }
    }

    /// Compare the account as it stands against the account after the
    /// hypothetical spends are taken out of the balance
    pub fn simulate(
        &self,
        state: &AccountSnapshot,
        spends: &[HypotheticalSpend],
        now: DateTime<Utc>,
    ) -> ScenarioResult {
        // Detached value copy; the caller's snapshot is never touched
        let state = state.clone();

        let baseline = self.engine.forecast(
            state.balance,
            &state.transactions,
            state.buffer,
            now,
            &state.obligations,
        );

        let cost: f64 = spends.iter().map(|s| s.amount).sum();
        let simulated = self.engine.forecast(
            state.balance - cost,
            &state.transactions,
            state.buffer,
            now,
            &state.obligations,
        );

        // Horizon-clamped day counts; a runway increase reads as zero loss
        let days_lost = baseline.runway.days().saturating_sub(simulated.runway.days());

        let analysis = analyze(&baseline, &simulated, days_lost);

        ScenarioResult {
            baseline,
            simulated,
            delta: ScenarioDelta { cost, days_lost },
            analysis,
        }
    }
}

/// Verdict tiers, highest severity first
fn analyze(baseline: &ForecastResult, simulated: &ForecastResult, days_lost: u32) -> ScenarioAnalysis {
    let (advice, risk_level) = if simulated.status == RiskStatus::CriticalBelowBuffer {
        (
            "Transaction not viable. Buffer breached.".to_string(),
            ImpactLevel::Critical,
        )
    } else if simulated.runway.days() < 30 && baseline.runway.days() >= 30 {
        (
            "Pushing into danger zone (<30 days).".to_string(),
            ImpactLevel::High,
        )
    } else if days_lost > 30 {
        (
            format!("Large impact: -{days_lost} days runway."),
            ImpactLevel::Medium,
        )
    } else if days_lost > 0 {
        (
            format!("Minor impact: -{days_lost} days runway."),
            ImpactLevel::Low,
        )
    } else {
        ("No significant impact.".to_string(), ImpactLevel::Low)
    };

    ScenarioAnalysis {
        advice,
        risk_level,
        risk_color: risk_level.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::ForecastConfig;
    use crate::ledger::Transaction;
    use chrono::{Duration, TimeZone};

    fn eval_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    fn comparator() -> ScenarioComparator {
        ScenarioComparator::new(ForecastEngine::new(ForecastConfig {
            seed: Some(42),
            ..Default::default()
        }))
    }

    fn steady_snapshot() -> AccountSnapshot {
        let transactions = (0..10)
            .map(|k| {
                Transaction::expense(
                    format!("e{k}"),
                    1000.0,
                    "",
                    eval_instant() - Duration::days(k),
                )
            })
            .collect();

        AccountSnapshot {
            balance: 100_000.0,
            buffer: 10_000.0,
            transactions,
            obligations: Vec::new(),
        }
    }

    #[test]
    fn test_buffer_breach_is_not_viable() {
        let result = comparator().simulate(
            &steady_snapshot(),
            &[HypotheticalSpend::new(95_000.0)],
            eval_instant(),
        );

        // 5k left against a 10k buffer
        assert_eq!(result.simulated.status, RiskStatus::CriticalBelowBuffer);
        assert_eq!(result.analysis.risk_level, ImpactLevel::Critical);
        assert!(result.analysis.advice.contains("not viable"));
        assert_eq!(result.delta.cost, 95_000.0);
    }

    #[test]
    fn test_days_lost_never_negative() {
        // A refund-like negative spend increases the balance; the delta can
        // only ever report zero loss, not a gain
        let result = comparator().simulate(
            &steady_snapshot(),
            &[HypotheticalSpend::new(-20_000.0)],
            eval_instant(),
        );

        assert_eq!(result.delta.cost, -20_000.0);
        assert!(result.simulated.runway.days() + result.delta.days_lost >= result.baseline.runway.days());
    }

    #[test]
    fn test_zero_spend_has_no_material_impact() {
        let result = comparator().simulate(&steady_snapshot(), &[], eval_instant());

        assert_eq!(result.delta.cost, 0.0);
        // Same seed and same inputs on both runs, so the delta is exactly 0
        assert_eq!(result.delta.days_lost, 0);
        assert_eq!(result.analysis.risk_level, ImpactLevel::Low);
        assert_eq!(result.analysis.advice, "No significant impact.");
    }

    #[test]
    fn test_large_spend_reports_impact() {
        let result = comparator().simulate(
            &steady_snapshot(),
            &[HypotheticalSpend::new(25_000.0), HypotheticalSpend::new(20_000.0)],
            eval_instant(),
        );

        assert_eq!(result.delta.cost, 45_000.0);
        assert!(result.delta.days_lost > 30);
        assert_eq!(result.analysis.risk_level, ImpactLevel::Medium);
    }

    #[test]
    fn test_snapshot_left_untouched() {
        let snapshot = steady_snapshot();
        let before = snapshot.balance;

        let _ = comparator().simulate(
            &snapshot,
            &[HypotheticalSpend::new(50_000.0)],
            eval_instant(),
        );

        assert_eq!(snapshot.balance, before);
        assert_eq!(snapshot.transactions.len(), 10);
    }

    #[test]
    fn test_impact_colors() {
        assert_eq!(ImpactLevel::Low.color(), "#32D74B");
        assert_eq!(ImpactLevel::Medium.color(), "#FF9F0A");
        assert_eq!(ImpactLevel::High.color(), ImpactLevel::Critical.color());
    }
}
