use super::{HistoryStore, Observation};
use crate::error::TrackerError;
use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Header row written once when the file is first created.
const HEADER: [&str; 4] = ["timestamp", "asn", "count", "change"];

/// CSV-backed history store, one row appended per observation.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open the store at `path`, creating the file with a header row if it
    /// does not exist yet.
    pub fn open(path: &Path) -> Result<Self, TrackerError> {
        if !path.exists() {
            info!("{} not found, creating it", path.display());
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut writer = WriterBuilder::new().from_writer(file);
            writer.write_record(HEADER)?;
            writer.flush()?;
        }
        Ok(CsvStore {
            path: path.to_path_buf(),
        })
    }
}

impl HistoryStore for CsvStore {
    fn latest(&self, asn: u32) -> Result<Option<u64>, TrackerError> {
        let mut reader = ReaderBuilder::new().from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?);
        }
        // Zero-padded timestamps sort chronologically as plain strings.
        rows.sort_by(|a, b| b[0].cmp(&a[0]));

        let asn_repr = asn.to_string();
        for row in &rows {
            if row.get(1) == Some(asn_repr.as_str()) {
                let field = row.get(2).unwrap_or_default();
                let count = field.parse::<u64>().map_err(|_| {
                    TrackerError::BadRecord(format!(
                        "count field {:?} in {}",
                        field,
                        self.path.display()
                    ))
                })?;
                return Ok(Some(count));
            }
        }

        Ok(None)
    }

    fn append(&mut self, obs: &Observation) -> Result<(), TrackerError> {
        debug!("appending row for AS{} to {}", obs.asn, self.path.display());
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().from_writer(file);
        let asn = obs.asn.to_string();
        let count = obs.count.to_string();
        let change = obs.change_repr();
        writer.write_record([
            obs.timestamp.as_str(),
            asn.as_str(),
            count.as_str(),
            change.as_str(),
        ])?;
        writer.flush()?;
        Ok(())
    }
}
