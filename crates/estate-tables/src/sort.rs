//! Sort stage and sort state

use crate::record::Record;
use crate::value::{CellValue, compare_optional};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn reversed(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

/// Active sort column and direction
///
/// With no key, rows keep their incoming order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
	pub key: Option<String>,
	pub direction: SortDirection,
}

impl SortState {
	/// No ordering applied
	pub fn unsorted() -> Self {
		Self::default()
	}

	/// Sort by `key` in `direction`
	pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			key: Some(key.into()),
			direction,
		}
	}

	/// Header click on `key`
	///
	/// Clicking the active column flips its direction; clicking any other
	/// column sorts by it ascending.
	pub fn toggle(&mut self, key: &str) {
		if self.key.as_deref() == Some(key) {
			self.direction = self.direction.reversed();
		} else {
			self.key = Some(key.to_string());
			self.direction = SortDirection::Ascending;
		}
	}

	/// Indicator for a column header: the direction when `key` is active
	pub fn indicator(&self, key: &str) -> Option<SortDirection> {
		(self.key.as_deref() == Some(key)).then_some(self.direction)
	}
}

/// Orders `records` by the state's key
///
/// The sort is stable: records with equal keys keep their incoming relative
/// order in both directions. Missing values sort before any value when
/// ascending and after every value when descending.
///
/// # Example
///
/// ```rust
/// use estate_tables::sort::{SortDirection, SortState, sort_records};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"id": 1, "price": 100}),
///     json!({"id": 2, "price": 50}),
///     json!({"id": 3, "price": 50}),
/// ];
/// let sorted = sort_records(rows.iter().collect(), &SortState::by("price", SortDirection::Ascending));
/// let ids: Vec<_> = sorted.iter().map(|row| row["id"].as_i64().unwrap()).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// ```
pub fn sort_records<'a, R: Record>(records: Vec<&'a R>, state: &SortState) -> Vec<&'a R> {
	let Some(key) = state.key.as_deref() else {
		return records;
	};

	// Extract every key once; comparisons then never touch the records.
	let mut keyed: Vec<(Option<CellValue>, &'a R)> = records
		.into_iter()
		.map(|record| (record.field(key), record))
		.collect();

	keyed.sort_by(|(a, _), (b, _)| state.direction.apply(compare_optional(a.as_ref(), b.as_ref())));

	keyed.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{Value, json};

	fn rows() -> Vec<Value> {
		vec![
			json!({"id": 1, "name": "Alpha", "price": 100}),
			json!({"id": 2, "name": "beta", "price": 50}),
			json!({"id": 3, "name": "Gamma", "price": 50}),
			json!({"id": 4, "name": "delta"}),
		]
	}

	fn ids(rows: &[&Value]) -> Vec<i64> {
		rows.iter().map(|row| row["id"].as_i64().unwrap()).collect()
	}

	#[test]
	fn test_toggle_same_key_flips_direction() {
		let mut state = SortState::unsorted();
		state.toggle("price");
		assert_eq!(state, SortState::by("price", SortDirection::Ascending));
		state.toggle("price");
		assert_eq!(state, SortState::by("price", SortDirection::Descending));
		state.toggle("price");
		assert_eq!(state.direction, SortDirection::Ascending);
	}

	#[test]
	fn test_toggle_new_key_resets_ascending() {
		let mut state = SortState::by("price", SortDirection::Descending);
		state.toggle("name");
		assert_eq!(state, SortState::by("name", SortDirection::Ascending));
	}

	#[test]
	fn test_indicator() {
		let state = SortState::by("price", SortDirection::Descending);
		assert_eq!(state.indicator("price"), Some(SortDirection::Descending));
		assert_eq!(state.indicator("name"), None);
		assert_eq!(SortState::unsorted().indicator("price"), None);
	}

	#[test]
	fn test_no_key_keeps_order() {
		let rows = rows();
		let sorted = sort_records(rows.iter().collect(), &SortState::unsorted());
		assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
	}

	#[test]
	fn test_ascending_is_stable_with_missing_first() {
		let rows = rows();
		let sorted = sort_records(
			rows.iter().collect(),
			&SortState::by("price", SortDirection::Ascending),
		);
		assert_eq!(ids(&sorted), vec![4, 2, 3, 1]);
	}

	#[test]
	fn test_descending_keeps_ties_in_input_order() {
		let rows = rows();
		let sorted = sort_records(
			rows.iter().collect(),
			&SortState::by("price", SortDirection::Descending),
		);
		assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
	}

	#[test]
	fn test_strings_sort_lexicographically() {
		let rows = rows();
		let sorted = sort_records(
			rows.iter().collect(),
			&SortState::by("name", SortDirection::Ascending),
		);
		// uppercase code points precede lowercase ones
		assert_eq!(ids(&sorted), vec![1, 3, 2, 4]);
	}

	#[test]
	fn test_unknown_key_keeps_order() {
		let rows = rows();
		let sorted = sort_records(
			rows.iter().collect(),
			&SortState::by("nope", SortDirection::Descending),
		);
		assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
	}
}
