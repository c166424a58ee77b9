/*!
error module defines the error types used in routeviews-tracker.
*/
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// HTTP transfer failure while downloading the snapshot archive.
    ///
    /// ## Occurs during:
    ///  - Snapshot download (request, status check, body read)
    #[error("snapshot download failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Bzip2 stream failure while extracting the snapshot archive. Kept
    /// separate from [TrackerError::Io] so a corrupt archive is
    /// distinguishable from a plain filesystem error.
    #[error("snapshot extraction failed: {0}")]
    Decompress(io::Error),

    /// General IO failure.
    ///
    /// ## Occurs during:
    ///  - Writing the downloaded archive
    ///  - Reading the extracted snapshot
    ///  - Removing the snapshot temp files
    #[error(transparent)]
    Io(#[from] io::Error),

    /// SQLite backend failure.
    #[error("sqlite store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// CSV backend failure.
    #[error("csv store error: {0}")]
    Csv(#[from] csv::Error),

    /// A row in an existing store file does not have the expected shape.
    #[error("malformed store record: {0}")]
    BadRecord(String),

    /// The route-match pattern could not be built.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}
