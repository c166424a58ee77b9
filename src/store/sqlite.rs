use super::{HistoryStore, Observation};
use crate::error::TrackerError;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite-backed history store, one `BGP_DATA` row per observation.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the table exists.
    pub fn open(path: &Path) -> Result<Self, TrackerError> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS BGP_DATA (DATE TEXT, ASN INT, COUNT INT, CHANGE TEXT)",
            [],
        )?;
        Ok(SqliteStore { conn })
    }
}

impl HistoryStore for SqliteStore {
    fn latest(&self, asn: u32) -> Result<Option<u64>, TrackerError> {
        let count = self
            .conn
            .query_row(
                "SELECT COUNT FROM BGP_DATA WHERE ASN = ?1 ORDER BY DATE DESC LIMIT 1",
                params![asn],
                |row| row.get::<_, u64>(0),
            )
            .optional()?;
        Ok(count)
    }

    fn append(&mut self, obs: &Observation) -> Result<(), TrackerError> {
        debug!("inserting BGP_DATA row for AS{}", obs.asn);
        self.conn.execute(
            "INSERT INTO BGP_DATA (DATE, ASN, COUNT, CHANGE) VALUES (?1, ?2, ?3, ?4)",
            params![obs.timestamp, obs.asn, obs.count, obs.change_repr()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn obs(timestamp: &str, asn: u32, count: u64, change: f64) -> Observation {
        Observation {
            timestamp: timestamp.to_string(),
            asn,
            count,
            change,
        }
    }

    #[test]
    fn test_append_then_latest_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = SqliteStore::open(&dir.path().join("bgp.db")).unwrap();

        assert_eq!(store.latest(100).unwrap(), None);
        store.append(&obs("2026-08-29-12:00", 100, 3, 1.0)).unwrap();
        assert_eq!(store.latest(100).unwrap(), Some(3));
    }

    #[test]
    fn test_latest_prefers_most_recent_date() {
        let dir = TempDir::new().unwrap();
        let mut store = SqliteStore::open(&dir.path().join("bgp.db")).unwrap();

        store.append(&obs("2026-08-28-12:00", 100, 3, 1.0)).unwrap();
        store.append(&obs("2026-08-29-12:00", 100, 5, 0.67)).unwrap();
        assert_eq!(store.latest(100).unwrap(), Some(5));
    }

    #[test]
    fn test_latest_filters_by_asn() {
        let dir = TempDir::new().unwrap();
        let mut store = SqliteStore::open(&dir.path().join("bgp.db")).unwrap();

        store.append(&obs("2026-08-29-12:00", 100, 3, 1.0)).unwrap();
        store.append(&obs("2026-08-29-12:00", 200, 7, 1.0)).unwrap();
        assert_eq!(store.latest(100).unwrap(), Some(3));
        assert_eq!(store.latest(200).unwrap(), Some(7));
        assert_eq!(store.latest(300).unwrap(), None);
    }

    #[test]
    fn test_reopen_preserves_records() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("bgp.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.append(&obs("2026-08-29-12:00", 100, 3, 1.0)).unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.latest(100).unwrap(), Some(3));
    }
}
