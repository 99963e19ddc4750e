//! Column descriptors

use crate::record::Record;
use crate::value::CellValue;
use serde::{Deserialize, Serialize};

/// Rendering hint for a column
///
/// Only affects formatting; sorting and searching always work on the raw
/// field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
	#[default]
	Text,
	Currency,
	Date,
	Status,
	Badge,
	/// Any rendering hint this engine does not know, displayed as text
	#[serde(other)]
	Other,
}

/// Static description of one table column
///
/// Columns are configured once per table and never mutated by the engine.
///
/// # Example
///
/// ```rust
/// use estate_tables::column::{ColumnDescriptor, ColumnType};
///
/// let price = ColumnDescriptor::new("price", "Price")
///     .column_type(ColumnType::Currency)
///     .searchable(false);
///
/// assert_eq!(price.key(), "price");
/// assert!(price.is_sortable());
/// assert!(!price.is_searchable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
	/// Field name on the record; an empty key renders blank
	#[serde(default)]
	key: String,
	#[serde(default)]
	label: String,
	#[serde(default, rename = "type")]
	column_type: ColumnType,
	#[serde(default = "default_true")]
	sortable: bool,
	#[serde(default = "default_true")]
	searchable: bool,
}

fn default_true() -> bool {
	true
}

impl ColumnDescriptor {
	/// Creates a plain-text column
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			column_type: ColumnType::Text,
			sortable: true,
			searchable: true,
		}
	}

	/// Sets the rendering hint
	pub fn column_type(mut self, column_type: ColumnType) -> Self {
		self.column_type = column_type;
		self
	}

	/// Sets whether clicking the header sorts by this column
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether the search box looks at this column
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn kind(&self) -> ColumnType {
		self.column_type
	}

	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	pub fn is_searchable(&self) -> bool {
		self.searchable
	}

	/// Reads this column's value from a record
	///
	/// A column without a key never yields a value.
	pub fn value_of<R: Record + ?Sized>(&self, record: &R) -> Option<CellValue> {
		if self.key.is_empty() {
			return None;
		}
		record.field(&self.key)
	}
}
