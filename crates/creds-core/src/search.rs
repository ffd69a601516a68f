//! Keyword filtering over the in-memory dataset.

use crate::Credential;

/// Filter records whose vendor field contains `keyword`, case-insensitively.
///
/// Both sides are folded with a plain lowercase transform and matched by
/// substring containment. The result preserves dataset order and has no
/// size limit; every search is a full linear scan.
#[must_use]
pub fn filter_by_vendor<'a>(records: &'a [Credential], keyword: &str) -> Vec<&'a Credential> {
    let needle = keyword.to_lowercase();
    records
        .iter()
        .filter(|record| record.product_vendor.to_lowercase().contains(&needle))
        .collect()
}
