/*!
History storage for per-run ASN observations.

Two backends implement the same [HistoryStore] contract: a SQLite table
([sqlite::SqliteStore]) and an append-only CSV file ([csv::CsvStore]). The
backend is chosen once per run. Records are append-only and never rewritten;
the previous count for an ASN is always its latest-timestamp prior record.
*/
pub mod csv;
pub mod sqlite;

use crate::error::TrackerError;
use chrono::Local;

/// One (timestamp, ASN) measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Run wall-clock time at minute precision (`YYYY-MM-DD-HH:MM`).
    pub timestamp: String,
    pub asn: u32,
    /// Matching route lines found in the snapshot.
    pub count: u64,
    /// Relative change against the previous count; sentinel `1` for a first
    /// observation, `0` when the previous count was zero.
    pub change: f64,
}

impl Observation {
    /// The change value as persisted: minimal decimal form (`1`, `0.67`,
    /// `-0.5`).
    pub fn change_repr(&self) -> String {
        format!("{}", self.change)
    }
}

/// Wall-clock run timestamp. Zero-padded fields make lexicographic order
/// equal chronological order, which the CSV backend relies on.
pub fn run_timestamp() -> String {
    Local::now().format("%Y-%m-%d-%H:%M").to_string()
}

/// Previous-count lookup and record append over one storage backend.
pub trait HistoryStore {
    /// The count of the most recent prior observation for `asn`, if any.
    fn latest(&self, asn: u32) -> Result<Option<u64>, TrackerError>;

    /// Durably write one new observation.
    fn append(&mut self, obs: &Observation) -> Result<(), TrackerError>;
}
