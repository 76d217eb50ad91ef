use crate::calc::Division;
use crate::store::StudentRecord;

/// Filtered read-only view of the record list: case-insensitive substring
/// match on name ANDed with an exact division match. An empty name query or
/// `None` division leaves that constraint off. Original order is preserved.
pub fn filter<'a>(
    records: &'a [StudentRecord],
    name_query: &str,
    division: Option<Division>,
) -> Vec<&'a StudentRecord> {
    let needle = name_query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            let name_ok = needle.is_empty() || r.name.to_lowercase().contains(&needle);
            let division_ok = division.map(|d| r.division == d).unwrap_or(true);
            name_ok && division_ok
        })
        .collect()
}
