//! Filter bar state
//!
//! A [`FilterSet`] holds what the user picked in a list page's filter bar:
//! the search box plus any number of keyed filters (date range, price range,
//! status, type, location or page-specific extras). Values are kept as the
//! strings the list endpoints take as query parameters; an empty value means
//! the filter is off.

use crate::date_range::DateRange;
use crate::price_range::PriceRange;
use chrono::NaiveDate;
use estate_tables::Record;
use std::collections::BTreeMap;

pub const SEARCH: &str = "search";
pub const DATE_RANGE: &str = "date_range";
pub const PRICE_RANGE: &str = "price_range";
pub const STATUS: &str = "status";
pub const TYPE: &str = "type";
pub const LOCATION: &str = "location";

/// Record fields the typed filters are evaluated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFields {
	pub date: String,
	pub price: String,
	pub status: String,
	pub kind: String,
	pub location: String,
}

impl Default for FilterFields {
	fn default() -> Self {
		Self {
			date: "created_at".to_string(),
			price: "price".to_string(),
			status: "status".to_string(),
			kind: "type".to_string(),
			location: "location".to_string(),
		}
	}
}

impl FilterFields {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_date(mut self, key: impl Into<String>) -> Self {
		self.date = key.into();
		self
	}

	pub fn with_price(mut self, key: impl Into<String>) -> Self {
		self.price = key.into();
		self
	}

	pub fn with_status(mut self, key: impl Into<String>) -> Self {
		self.status = key.into();
		self
	}

	pub fn with_kind(mut self, key: impl Into<String>) -> Self {
		self.kind = key.into();
		self
	}

	pub fn with_location(mut self, key: impl Into<String>) -> Self {
		self.location = key.into();
		self
	}
}

/// Keyed filter values, ordered by key
///
/// # Examples
///
/// ```rust
/// use estate_filters::FilterSet;
///
/// let mut filters = FilterSet::new();
/// filters.set_search("villa");
/// filters.toggle_quick("date_range", "today");
/// assert_eq!(filters.active_count(), 2);
///
/// // Pressing the same quick button again switches it off
/// filters.toggle_quick("date_range", "today");
/// assert_eq!(filters.active_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
	values: BTreeMap<String, String>,
}

impl FilterSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key` to `value`; an empty value switches the filter off
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		tracing::debug!(key = %key, value = %value, "filter changed");
		self.values.insert(key, value);
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.values
			.get(key)
			.map(String::as_str)
			.filter(|value| !value.is_empty())
	}

	pub fn set_search(&mut self, term: impl Into<String>) {
		self.set(SEARCH, term);
	}

	pub fn search(&self) -> &str {
		self.get(SEARCH).unwrap_or_default()
	}

	/// Quick-filter button: selects `value`, or switches the filter off when
	/// `value` is already selected
	pub fn toggle_quick(&mut self, key: &str, value: &str) {
		if self.get(key) == Some(value) {
			self.set(key, "");
		} else {
			self.set(key, value);
		}
	}

	pub fn is_quick_active(&self, key: &str, value: &str) -> bool {
		self.get(key) == Some(value)
	}

	/// Drops every filter, search included
	pub fn clear(&mut self) {
		self.values.clear();
		tracing::debug!("filters cleared");
	}

	/// Number of filters with a non-empty value
	pub fn active_count(&self) -> usize {
		self.values.values().filter(|value| !value.is_empty()).count()
	}

	pub fn has_active(&self) -> bool {
		self.active_count() > 0
	}

	/// Non-empty filters as query parameters, in key order
	pub fn query_params(&self) -> Vec<(String, String)> {
		self.values
			.iter()
			.filter(|(_, value)| !value.is_empty())
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect()
	}

	/// Selected date range; an unknown token counts as no filter
	pub fn date_range(&self) -> Option<DateRange> {
		let raw = self.get(DATE_RANGE)?;
		raw.parse()
			.inspect_err(|err| tracing::warn!(%err, "ignoring date range filter"))
			.ok()
	}

	/// Selected price bracket; a malformed value counts as no filter
	pub fn price_range(&self) -> Option<PriceRange> {
		let raw = self.get(PRICE_RANGE)?;
		raw.parse()
			.inspect_err(|err| tracing::warn!(%err, "ignoring price range filter"))
			.ok()
	}

	/// Evaluates the typed filters against `record`
	///
	/// Date range and price bracket are range checks, status and type compare
	/// case-insensitively, location is a case-insensitive substring match.
	/// Filters that are off always match; a record missing the field a
	/// filter looks at does not. The search term is not consulted here; the
	/// table's own search handles it.
	pub fn matches<R: Record + ?Sized>(
		&self,
		record: &R,
		fields: &FilterFields,
		today: NaiveDate,
	) -> bool {
		if let Some(range) = self.date_range() {
			let date = record
				.field(&fields.date)
				.and_then(|value| value.as_datetime())
				.map(|date| date.date_naive());
			if !date.is_some_and(|date| range.contains(date, today)) {
				return false;
			}
		}

		if let Some(range) = self.price_range() {
			let price = record.field(&fields.price).and_then(|value| value.as_number());
			if !price.is_some_and(|price| range.contains(price)) {
				return false;
			}
		}

		let equals = |filter: &str, field: &str| match self.get(filter) {
			None => true,
			Some(wanted) => record
				.field(field)
				.is_some_and(|value| value.to_display_string().eq_ignore_ascii_case(wanted)),
		};
		if !equals(STATUS, &fields.status) || !equals(TYPE, &fields.kind) {
			return false;
		}

		match self.get(LOCATION) {
			None => true,
			Some(wanted) => {
				let needle = wanted.trim().to_lowercase();
				record.field(&fields.location).is_some_and(|value| {
					value.to_display_string().to_lowercase().contains(&needle)
				})
			}
		}
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}
