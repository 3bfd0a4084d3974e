//! Ledger data structures matching the exported account snapshot format

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a historical ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Money leaving the account; feeds the spend history
    Expense,
    /// Money entering the account; only moves the balance upstream
    Income,
}

impl TxKind {
    pub fn is_expense(&self) -> bool {
        matches!(self, TxKind::Expense)
    }
}

/// A single immutable ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier
    pub id: String,

    /// Entry kind (expense entries drive the forecast)
    #[serde(rename = "type")]
    pub kind: TxKind,

    /// Non-negative monetary amount
    pub amount: f64,

    /// Free-text note
    #[serde(default)]
    pub note: String,

    /// Instant the entry was recorded (epoch milliseconds on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create an expense entry
    pub fn expense(id: impl Into<String>, amount: f64, note: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            kind: TxKind::Expense,
            amount,
            note: note.into(),
            timestamp,
        }
    }

    /// Create an income entry
    pub fn income(id: impl Into<String>, amount: f64, note: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            kind: TxKind::Income,
            amount,
            note: note.into(),
            timestamp,
        }
    }
}

/// A scheduled future payment not yet reflected in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    /// Opaque unique identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Positive payment amount
    pub amount: f64,

    /// Calendar due date, no time-of-day (ISO `YYYY-MM-DD` on the wire)
    #[serde(rename = "date")]
    pub due_date: NaiveDate,
}

impl Obligation {
    /// The instant the obligation falls due: midnight UTC on the due date
    pub fn due_instant(&self) -> DateTime<Utc> {
        self.due_date.and_time(NaiveTime::MIN).and_utc()
    }
}

/// Read-only snapshot of account state as the host application exports it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Current account balance
    #[serde(default)]
    pub balance: f64,

    /// Safety buffer the user wants left untouched
    #[serde(default)]
    pub buffer: f64,

    /// Historical ledger entries
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Scheduled future payments
    #[serde(default, rename = "planned")]
    pub obligations: Vec<Obligation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_deserializes_export_format() {
        let json = r#"{
            "balance": 4200.5,
            "buffer": 500,
            "transactions": [
                {"id": "t1", "type": "expense", "amount": 12.5, "note": "coffee", "timestamp": 1756123200000},
                {"id": "t2", "type": "income", "amount": 2000.0, "timestamp": 1756209600000}
            ],
            "planned": [
                {"id": "p1", "title": "Rent", "amount": 900.0, "date": "2026-09-01"}
            ]
        }"#;

        let snapshot: AccountSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.transactions[0].kind, TxKind::Expense);
        assert_eq!(snapshot.transactions[1].kind, TxKind::Income);
        assert_eq!(snapshot.transactions[1].note, "");
        assert_eq!(snapshot.obligations.len(), 1);
        assert_eq!(
            snapshot.obligations[0].due_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_due_instant_is_midnight_utc() {
        let obligation = Obligation {
            id: "p1".to_string(),
            title: "Rent".to_string(),
            amount: 900.0,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        };

        let expected = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(obligation.due_instant(), expected);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let snapshot: AccountSnapshot = serde_json::from_str(r#"{"balance": 10.0}"#).unwrap();
        assert_eq!(snapshot.buffer, 0.0);
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.obligations.is_empty());
    }
}
