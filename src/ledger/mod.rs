//! Ledger data model and snapshot loading

mod data;
mod loader;

pub use data::{AccountSnapshot, Obligation, Transaction, TxKind};
pub use loader::{load_snapshot, load_snapshot_from_reader};
