//! Identifier allocation.
//!
//! Ids are decimal-encoded integers rendered as strings. A new id is one
//! more than the highest numeric id in view, where "in view" covers both the
//! ids currently present and a floor the caller remembers from earlier
//! allocations. Ids that are not plain decimal integers are ignored.

/// The id handed out by a collection that has never held a numeric id.
pub const SEED_ID: &str = "1";

/// Parse a plain decimal id. Signs, whitespace, and empty strings are rejected.
pub fn numeric_id(id: &str) -> Option<u64> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// The successor of the highest numeric id among `ids` and `floor`.
///
/// Returns `None` only when that maximum is `u64::MAX`.
pub fn next_id<'a, I>(ids: I, floor: u64) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let max = ids
        .into_iter()
        .filter_map(numeric_id)
        .fold(floor, u64::max);
    max.checked_add(1).map(|next| next.to_string())
}
