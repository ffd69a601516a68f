//! CSV parsing for the downloaded dataset.

use crate::{Credential, Result};
use tracing::warn;

/// Cell count of a valid dataset row: vendor, username, password.
const EXPECTED_CELLS: usize = 3;

/// Parse a downloaded CSV body into credential records.
///
/// Row 0 is always treated as the column-title header and skipped. Every
/// remaining row must have exactly three cells (vendor, username,
/// password, in that order); rows with any other cell count are logged
/// and dropped without aborting the parse. A malformed CSV stream (bad
/// quoting state, invalid UTF-8) is an error.
pub fn parse_dataset(body: &[u8]) -> Result<Vec<Credential>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.len() != EXPECTED_CELLS {
            warn!(row = %row.iter().collect::<Vec<_>>().join(","), "invalid entry");
            continue;
        }
        records.push(Credential::new(&row[0], &row[1], &row[2]));
    }

    Ok(records)
}
