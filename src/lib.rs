//! Runway - bootstrap Monte Carlo cash runway forecasting
//!
//! This library provides:
//! - Daily spend extraction from an irregular transaction ledger
//! - Bootstrap Monte Carlo runway forecasts with risk classification
//! - What-if scenario comparison for uncommitted spends

pub mod ledger;
pub mod forecast;
pub mod scenario;

// Re-export commonly used types
pub use ledger::{AccountSnapshot, Obligation, Transaction, TxKind};
pub use forecast::{
    ForecastConfig, ForecastEngine, ForecastResult, RiskStatus, Runway, RunwayRange,
    HORIZON_DAYS, SIMULATION_TRIALS,
};
pub use scenario::{HypotheticalSpend, ScenarioComparator, ScenarioResult};
