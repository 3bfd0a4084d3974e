//! Bootstrap Monte Carlo runway forecasting

mod extract;
mod engine;
mod result;

pub use extract::{daily_spend_vector, mean, sampling_vector, MIN_SAMPLING_DAYS};
pub use engine::{ForecastConfig, ForecastEngine, SIMULATION_TRIALS};
pub use result::{ForecastResult, RiskStatus, Runway, RunwayRange, HORIZON_DAYS};
