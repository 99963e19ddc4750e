//! Search stage
//!
//! Keeps the records whose value in at least one searchable column contains
//! the search term, ignoring case.

use crate::column::ColumnDescriptor;
use crate::record::Record;

/// Returns true when any searchable column of `record` contains `needle`
///
/// `needle` must already be lowercased. Missing values never match.
pub fn record_matches<R: Record + ?Sized>(
	record: &R,
	needle: &str,
	columns: &[ColumnDescriptor],
) -> bool {
	columns
		.iter()
		.filter(|column| column.is_searchable())
		.filter_map(|column| column.value_of(record))
		.any(|value| value.to_display_string().to_lowercase().contains(needle))
}

/// Filters `records` by a case-insensitive substring search
///
/// An empty term keeps every record. The relative order of the surviving
/// records is preserved and the input is never modified.
///
/// # Example
///
/// ```rust
/// use estate_tables::column::ColumnDescriptor;
/// use estate_tables::filter::filter_records;
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"id": 1, "name": "Alpha"}),
///     json!({"id": 2, "name": "beta"}),
/// ];
/// let columns = vec![ColumnDescriptor::new("name", "Name")];
///
/// let hits = filter_records(&rows, "ETA", &columns);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0]["id"], 2);
/// ```
pub fn filter_records<'a, R: Record>(
	records: &'a [R],
	term: &str,
	columns: &[ColumnDescriptor],
) -> Vec<&'a R> {
	if term.is_empty() {
		return records.iter().collect();
	}

	let needle = term.to_lowercase();
	records
		.iter()
		.filter(|record| record_matches(*record, &needle, columns))
		.collect()
}
