//! Filter error types

use thiserror::Error;

/// Errors raised while reading filter values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
	/// Date range token not among the known ranges
	#[error("Unknown date range: {0}")]
	UnknownDateRange(String),

	/// Price range not of the form `min-max` or `min+`
	#[error("Invalid price range: {0}")]
	InvalidPriceRange(String),

	/// Page numbers start at 1
	#[error("Invalid page number: {0}")]
	InvalidPage(usize),
}

pub type Result<T> = std::result::Result<T, FilterError>;
