//! Forecast output value types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Maximum simulated day count; a trial that reaches it is treated as
/// surviving indefinitely
pub const HORIZON_DAYS: u32 = 730;

/// Median survival outcome of a forecast run
///
/// The horizon clamp to 730 happens only at the presentation boundary
/// (`days()` and serialization); internally "ran past the horizon" stays
/// tagged as `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runway {
    /// Balance depleted after this many simulated days
    Days(u32),
    /// At least half the trials survived the full horizon
    Unbounded,
}

impl Runway {
    /// Classify a median survival count against the horizon cap
    pub fn from_survival(days: u32) -> Self {
        if days >= HORIZON_DAYS {
            Runway::Unbounded
        } else {
            Runway::Days(days)
        }
    }

    /// Day count clamped to the horizon cap
    pub fn days(&self) -> u32 {
        match self {
            Runway::Days(d) => *d,
            Runway::Unbounded => HORIZON_DAYS,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Runway::Unbounded)
    }
}

impl Serialize for Runway {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.days())
    }
}

/// 10th/90th percentile band of survival days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayRange {
    pub min: u32,
    pub max: u32,
}

/// Categorical forecast status, from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskStatus {
    /// Balance is already below the safety buffer; overrides everything else
    CriticalBelowBuffer,
    /// Median runway under 30 days
    Danger,
    /// Median runway under 90 days
    Warning,
    /// Did not run out within the two-year horizon
    Sustainable,
    /// Bounded but comfortable runway
    Healthy,
}

/// Complete forecast output: a pure value recomputed on demand
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Mean daily spend over the unpadded history vector
    pub burn_rate: f64,

    /// Median survival days across trials
    #[serde(rename = "runwayDays")]
    pub runway: Runway,

    /// 10th to 90th percentile survival band
    pub runway_range: RunwayRange,

    /// Categorical status
    pub status: RiskStatus,

    /// 0 (no risk) to 100 (maximum risk)
    pub risk_score: u8,

    /// Projected depletion instant; absent when the runway is unbounded
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub zero_date: Option<DateTime<Utc>>,
}
