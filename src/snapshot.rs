/*!
Snapshot fetching: download the compressed Route Views full-snapshot dump,
extract it to plain text, and remove both temp files once a run completes.
*/
use crate::error::TrackerError;
use bzip2::read::BzDecoder;
use log::{debug, info};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Latest full-snapshot table dump published by the Route Views archive.
pub const SNAPSHOT_URL: &str =
    "http://archive.routeviews.org/oix-route-views/oix-full-snapshot-latest.dat.bz2";

/// Local name of the downloaded archive.
pub const ARCHIVE_FILE: &str = "oix-full-snapshot-latest.dat.bz2";

/// Local name of the extracted plain-text snapshot.
pub const SNAPSHOT_FILE: &str = "oix-full-snapshot-latest.dat";

/// Download the snapshot archive at `url` to `archive_path`. A non-success
/// HTTP status is an error.
pub fn fetch(url: &str, archive_path: &Path) -> Result<(), TrackerError> {
    info!("downloading {}", url);
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    fs::write(archive_path, &bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), archive_path.display());
    Ok(())
}

/// Extract the bzip2 archive at `archive_path` into `plain_path`.
pub fn extract(archive_path: &Path, plain_path: &Path) -> Result<(), TrackerError> {
    info!("extracting {}", archive_path.display());
    let archive = File::open(archive_path)?;
    let mut decoder = BzDecoder::new(archive);
    let mut plain = File::create(plain_path)?;
    io::copy(&mut decoder, &mut plain).map_err(TrackerError::Decompress)?;
    Ok(())
}

/// Remove both snapshot temp files.
pub fn cleanup(archive_path: &Path, plain_path: &Path) -> Result<(), TrackerError> {
    info!("removing snapshot temp files");
    fs::remove_file(plain_path)?;
    fs::remove_file(archive_path)?;
    Ok(())
}
