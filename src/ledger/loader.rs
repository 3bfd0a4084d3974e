//! Load account snapshots from the exported JSON state

use super::AccountSnapshot;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a snapshot from a JSON export file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<AccountSnapshot> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening snapshot {}", path.display()))?;
    let snapshot = load_snapshot_from_reader(BufReader::new(file))
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    Ok(snapshot)
}

/// Load a snapshot from any reader (e.g., string buffer, network stream)
pub fn load_snapshot_from_reader<R: std::io::Read>(reader: R) -> Result<AccountSnapshot> {
    let snapshot: AccountSnapshot = serde_json::from_reader(reader)?;
    log::info!(
        "loaded snapshot: balance {:.2}, {} transactions, {} obligations",
        snapshot.balance,
        snapshot.transactions.len(),
        snapshot.obligations.len()
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let json = r#"{"balance": 1500.0, "buffer": 200.0, "transactions": [], "planned": []}"#;
        let snapshot = load_snapshot_from_reader(json.as_bytes()).unwrap();
        assert_eq!(snapshot.balance, 1500.0);
        assert_eq!(snapshot.buffer, 200.0);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let result = load_snapshot_from_reader("not json".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_snapshot("/nonexistent/snapshot.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/snapshot.json"));
    }
}
