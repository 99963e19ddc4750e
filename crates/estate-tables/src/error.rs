//! Error types for the table engine

use thiserror::Error;

/// Errors raised by explicit misuse of the table API
///
/// Rendering, searching and sorting never fail; only requests that name
/// something the table cannot honor end up here.
#[derive(Debug, Error)]
pub enum TableError {
	/// Page numbers are 1-based
	#[error("Invalid page number: {0} (pages start at 1)")]
	InvalidPage(usize),

	/// The column is not configured on this table
	#[error("Column not found: {0}")]
	ColumnNotFound(String),

	/// The column exists but opted out of sorting
	#[error("Column is not sortable: {0}")]
	ColumnNotSortable(String),

	/// Table configuration could not be parsed
	#[error("Configuration error: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
