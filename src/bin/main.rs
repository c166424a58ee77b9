use std::fs;
use std::path::Path;

use clap::{Parser, ValueEnum};
use log::info;
use routeviews_tracker::snapshot::{self, ARCHIVE_FILE, SNAPSHOT_FILE, SNAPSHOT_URL};
use routeviews_tracker::store::csv::CsvStore;
use routeviews_tracker::store::sqlite::SqliteStore;
use routeviews_tracker::store::run_timestamp;
use routeviews_tracker::{
    count_announcements, relative_change, HistoryStore, Observation, TrackerError,
};

const SQLITE_FILE: &str = "bgp.db";
const CSV_FILE: &str = "bgp.csv";

/// Record changes in per-ASN BGP announcement counts from the latest
/// Route Views full-snapshot table dump.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// ASNs to record, comma-separated. Ex: -a 100,200,300
    #[clap(short, long, value_delimiter = ',', required = true)]
    asns: Vec<u32>,

    /// Output format
    #[clap(short, long, value_enum, default_value = "sqlite")]
    output: OutputFormat,

    /// Run with debug level logging
    #[clap(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Sqlite,
    Csv,
}

fn main() {
    let opts: Opts = Opts::parse();

    let default_level = if opts.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(&opts) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), TrackerError> {
    let archive_path = Path::new(ARCHIVE_FILE);
    let plain_path = Path::new(SNAPSHOT_FILE);

    snapshot::fetch(SNAPSHOT_URL, archive_path)?;
    snapshot::extract(archive_path, plain_path)?;
    let text = fs::read_to_string(plain_path)?;

    let mut store: Box<dyn HistoryStore> = match opts.output {
        OutputFormat::Sqlite => {
            info!("recording results to {}", SQLITE_FILE);
            Box::new(SqliteStore::open(Path::new(SQLITE_FILE))?)
        }
        OutputFormat::Csv => {
            info!("recording results to {}", CSV_FILE);
            Box::new(CsvStore::open(Path::new(CSV_FILE))?)
        }
    };

    // One timestamp per run, shared by every ASN's record.
    let timestamp = run_timestamp();

    for &asn in &opts.asns {
        info!("searching for AS{}", asn);
        let count = count_announcements(&text, &asn.to_string())?;
        let previous = store.latest(asn)?;
        match previous {
            Some(prev) => info!("AS{}: previous count {}, current count {}", asn, prev, count),
            None => info!("AS{} not yet recorded, adding with a change value of 1", asn),
        }

        let obs = Observation {
            timestamp: timestamp.clone(),
            asn,
            count,
            change: relative_change(count, previous),
        };
        info!(
            "inserting {} {} {} {}",
            obs.timestamp,
            obs.asn,
            obs.count,
            obs.change_repr()
        );
        store.append(&obs)?;
    }

    snapshot::cleanup(archive_path, plain_path)?;
    info!("all done");
    Ok(())
}
