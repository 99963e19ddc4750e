//! Per-table configuration flags

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
	Some(size) => size,
	None => unreachable!(),
};

/// Switches for each pipeline stage and UI affordance
///
/// A disabled stage collapses to identity: no search narrows the rows, no
/// sort reorders them, no pagination windows them, no selection is tracked.
///
/// # Example
///
/// ```rust
/// use estate_tables::TableConfig;
///
/// let config = TableConfig::from_toml(
///     r#"
///     selectable = true
///     page_size = 25
///     "#,
/// )
/// .unwrap();
///
/// assert!(config.selectable);
/// assert!(config.pagination);
/// assert_eq!(config.page_size.get(), 25);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
	/// Show row checkboxes and track selection
	pub selectable: bool,

	/// Window rows into pages
	pub pagination: bool,

	/// Rows per page
	pub page_size: NonZeroUsize,

	/// Apply the search term
	pub searchable: bool,

	/// Allow header clicks to sort
	pub sortable: bool,

	/// Show the per-row action buttons
	pub actions: bool,
}

impl Default for TableConfig {
	fn default() -> Self {
		Self {
			selectable: false,
			pagination: true,
			page_size: DEFAULT_PAGE_SIZE,
			searchable: false,
			sortable: true,
			actions: true,
		}
	}
}

impl TableConfig {
	/// Create a configuration with the default flags
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a configuration from TOML; absent keys keep their defaults
	pub fn from_toml(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	pub fn with_pagination(mut self, pagination: bool) -> Self {
		self.pagination = pagination;
		self
	}

	pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
		self.page_size = page_size;
		self
	}

	pub fn with_searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	pub fn with_sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	pub fn with_actions(mut self, actions: bool) -> Self {
		self.actions = actions;
		self
	}
}
