//! Daily spend extraction from an irregular transaction history
//!
//! Turns an unordered set of dated expense entries into a dense, zero-filled
//! per-day totals vector covering the observed history window. Days with no
//! expense contribute exactly 0, so the bootstrap resampler sees quiet days
//! at their true frequency.

use crate::ledger::Transaction;
use chrono::{DateTime, Utc};

/// Histories shorter than this get padded before resampling
pub const MIN_SAMPLING_DAYS: usize = 5;

/// Build the dense daily expense vector for all expenses recorded at or
/// before `now`. One entry per calendar day from the earliest qualifying
/// expense's day through `now`'s day inclusive. Returns an empty vector when
/// no qualifying expense exists.
pub fn daily_spend_vector(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<f64> {
    let mut expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind.is_expense() && t.timestamp <= now)
        .collect();

    if expenses.is_empty() {
        return Vec::new();
    }

    expenses.sort_by_key(|t| t.timestamp);

    // Whole-day index space: both endpoints normalized to midnight
    let first_day = expenses[0].timestamp.date_naive();
    let last_day = now.date_naive();
    let total_days = (last_day - first_day).num_days().max(1) as usize + 1;

    let mut vector = vec![0.0; total_days];

    for t in &expenses {
        let offset = (t.timestamp.date_naive() - first_day).num_days();
        // Offsets outside the window cannot occur given how the window was
        // derived; drop them silently rather than panic
        if offset >= 0 && (offset as usize) < total_days {
            vector[offset as usize] += t.amount;
        }
    }

    vector
}

/// Arithmetic mean, defined as 0 for an empty sequence
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Vector actually used for bootstrap draws. Sparse histories (< 5 days) are
/// augmented with their own mean plus three zero entries so single-value
/// resampling cannot degenerate. Reported burn rate always uses the unpadded
/// vector.
pub fn sampling_vector(daily: &[f64]) -> Vec<f64> {
    if daily.len() >= MIN_SAMPLING_DAYS {
        return daily.to_vec();
    }

    let mut padded = daily.to_vec();
    padded.push(mean(daily));
    padded.extend_from_slice(&[0.0, 0.0, 0.0]);
    padded
}
