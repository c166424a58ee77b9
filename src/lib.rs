/*!
routeviews-tracker records how many routes each tracked ASN announces in the
latest Route Views full-snapshot table dump, together with the relative change
since the previous run.

Each run downloads and extracts one snapshot, scans it once per ASN, and
appends one [Observation] per ASN to the chosen history store (SQLite table or
CSV file). Records are append-only; the change value compares the current
count against the most recent prior record for the same ASN.
*/

pub mod change;
pub mod error;
pub mod matcher;
pub mod snapshot;
pub mod store;

pub use change::relative_change;
pub use error::TrackerError;
pub use matcher::count_announcements;
pub use store::{HistoryStore, Observation};
