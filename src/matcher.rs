use crate::error::TrackerError;
use log::debug;
use regex::Regex;

/// Count snapshot lines announced by `asn`.
///
/// A line counts when the ASN appears as a whitespace-delimited token in the
/// path column, followed by a BGP origin marker (`i`, `e`, or `?`). Requiring
/// the leading boundary and the origin marker keeps substring hits inside
/// longer ASNs (e.g. `450` inside `64500`) out of the count. The ASN string
/// is escaped, so it always matches literally.
pub fn count_announcements(snapshot: &str, asn: &str) -> Result<u64, TrackerError> {
    let pattern = format!(r"(?:^|\s){}\s+[ie?]", regex::escape(asn));
    let re = Regex::new(&pattern)?;
    let count = snapshot.lines().filter(|line| re.is_match(line)).count() as u64;
    debug!("AS{}: {} matching lines", asn, count);
    Ok(count)
}
