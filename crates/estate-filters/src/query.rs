//! Server-side list queries and the list response envelope

use crate::error::{FilterError, Result};
use crate::filter_set::FilterSet;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

const DEFAULT_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
	Some(n) => n,
	None => unreachable!(),
};

/// Page request plus filters for a list endpoint
///
/// Changing any filter sends the user back to page 1, so a narrowed result
/// set is never viewed from a page that no longer exists.
///
/// # Examples
///
/// ```rust
/// use estate_filters::ListQuery;
///
/// let mut query = ListQuery::new();
/// query.set_page(3).unwrap();
/// query.set_filter("status", "sold");
/// assert_eq!(query.page(), 1);
/// assert_eq!(
///     query.query_params(),
///     vec![
///         ("page".to_string(), "1".to_string()),
///         ("per_page".to_string(), "10".to_string()),
///         ("status".to_string(), "sold".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
	page: usize,
	per_page: NonZeroUsize,
	filters: FilterSet,
}

impl Default for ListQuery {
	fn default() -> Self {
		Self {
			page: 1,
			per_page: DEFAULT_PER_PAGE,
			filters: FilterSet::new(),
		}
	}
}

impl ListQuery {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_per_page(mut self, per_page: NonZeroUsize) -> Self {
		self.per_page = per_page;
		self
	}

	pub fn with_filters(mut self, filters: FilterSet) -> Self {
		self.filters = filters;
		self
	}

	pub fn page(&self) -> usize {
		self.page
	}

	pub fn per_page(&self) -> NonZeroUsize {
		self.per_page
	}

	pub fn filters(&self) -> &FilterSet {
		&self.filters
	}

	pub fn set_page(&mut self, page: usize) -> Result<()> {
		if page == 0 {
			return Err(FilterError::InvalidPage(page));
		}
		self.page = page;
		Ok(())
	}

	pub fn previous_page(&mut self) {
		self.page = self.page.saturating_sub(1).max(1);
	}

	/// Moves forward, stopping at `pages`
	pub fn next_page(&mut self, pages: usize) {
		self.page = (self.page + 1).min(pages.max(1));
	}

	fn reset_page(&mut self) {
		if self.page != 1 {
			tracing::debug!(from = self.page, "filters changed, back to page 1");
		}
		self.page = 1;
	}

	pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.filters.set(key, value);
		self.reset_page();
	}

	pub fn set_search(&mut self, term: impl Into<String>) {
		self.filters.set_search(term);
		self.reset_page();
	}

	pub fn toggle_quick(&mut self, key: &str, value: &str) {
		self.filters.toggle_quick(key, value);
		self.reset_page();
	}

	/// Replaces the whole filter set at once
	pub fn replace_filters(&mut self, filters: FilterSet) {
		self.filters = filters;
		self.reset_page();
	}

	pub fn clear_filters(&mut self) {
		self.filters.clear();
		self.reset_page();
	}

	/// `page` and `per_page` followed by the active filters
	pub fn query_params(&self) -> Vec<(String, String)> {
		let mut params = vec![
			("page".to_string(), self.page.to_string()),
			("per_page".to_string(), self.per_page.to_string()),
		];
		params.extend(self.filters.query_params());
		params
	}
}

/// One page of a list endpoint's response
///
/// The item array arrives under `items` or under the entity name
/// (`properties`, `leads`, `employees`); missing counters default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
	#[serde(
		default = "Vec::new",
		alias = "properties",
		alias = "leads",
		alias = "employees"
	)]
	pub items: Vec<T>,
	#[serde(default)]
	pub total: usize,
	#[serde(default = "first_page")]
	pub page: usize,
	#[serde(default)]
	pub pages: usize,
}

fn first_page() -> usize {
	1
}

impl<T> ListPage<T> {
	/// Whether the pager below the list is shown
	pub fn has_pager(&self) -> bool {
		self.pages > 1
	}

	pub fn has_previous(&self) -> bool {
		self.page > 1
	}

	pub fn has_next(&self) -> bool {
		self.page < self.pages
	}

	/// Every page number, for the numbered pager buttons
	pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
		1..=self.pages
	}
}
