//! Cell formatting
//!
//! Turns a raw field value into what a cell displays, according to the
//! column's rendering hint. Formatting never fails: input that does not fit
//! the hint is shown unformatted, and a missing value renders empty.

use crate::column::ColumnType;
use crate::value::CellValue;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Rupee sign prefixed to currency cells
pub const CURRENCY_SYMBOL: &str = "₹";

/// Base classes of a pill-shaped cell
pub const PILL_CLASS: &str = "inline-flex px-2 py-1 text-xs font-medium rounded-full";

/// Color of a `badge` cell
pub const BADGE_COLOR: &str = "bg-blue-100 text-blue-800";

/// Color of a `status` cell whose value is not in the known vocabulary
pub const DEFAULT_STATUS_COLOR: &str = "bg-gray-100 text-gray-800";

/// A formatted cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
	/// Plain text
	Text(String),
	/// Text inside a rounded pill with the given color classes
	Pill { text: String, color: &'static str },
}

impl Cell {
	pub fn text(&self) -> &str {
		match self {
			Self::Text(text) | Self::Pill { text, .. } => text,
		}
	}

	fn empty() -> Self {
		Self::Text(String::new())
	}
}

/// Color classes for a status value
pub fn status_color(status: &str) -> &'static str {
	match status {
		"active" => "bg-green-100 text-green-800",
		"inactive" => "bg-red-100 text-red-800",
		"pending" => "bg-yellow-100 text-yellow-800",
		"completed" => "bg-blue-100 text-blue-800",
		_ => DEFAULT_STATUS_COLOR,
	}
}

/// Formats `value` for a column of type `column_type`
///
/// # Example
///
/// ```rust
/// use estate_tables::column::ColumnType;
/// use estate_tables::format::{Cell, format_cell};
/// use estate_tables::CellValue;
///
/// let price = CellValue::Number(4_500_000.0);
/// assert_eq!(format_cell(Some(&price), ColumnType::Currency).text(), "₹45,00,000");
/// assert_eq!(format_cell(None, ColumnType::Currency), Cell::Text(String::new()));
/// ```
pub fn format_cell(value: Option<&CellValue>, column_type: ColumnType) -> Cell {
	let Some(value) = value else {
		return Cell::empty();
	};

	match column_type {
		ColumnType::Currency => Cell::Text(
			value.as_number()
				.map(format_currency)
				.unwrap_or_else(|| value.to_display_string()),
		),
		ColumnType::Date => Cell::Text(
			value.as_datetime()
				.map(format_short_date)
				.unwrap_or_else(|| value.to_display_string()),
		),
		ColumnType::Status => {
			let text = value.to_display_string();
			let color = status_color(&text);
			Cell::Pill { text, color }
		}
		ColumnType::Badge => Cell::Pill {
			text: value.to_display_string(),
			color: BADGE_COLOR,
		},
		ColumnType::Text | ColumnType::Other => Cell::Text(value.to_display_string()),
	}
}

/// Formats a rupee amount with Indian digit grouping and no decimals
///
/// Rounds half away from zero: `1234.5` becomes `₹1,235`. Negative amounts
/// keep their sign even when they round to zero (`-0.4` becomes `-₹0`).
pub fn format_currency(amount: f64) -> String {
	let rounded = amount.round();
	let negative = rounded.is_sign_negative();
	// `{:.0}` keeps large magnitudes exact without going through an integer type
	let digits = format!("{:.0}", rounded.abs());
	let grouped = group_indian(&digits);
	if negative {
		format!("-{CURRENCY_SYMBOL}{grouped}")
	} else {
		format!("{CURRENCY_SYMBOL}{grouped}")
	}
}

/// Inserts separators as `12,34,56,789`: the last three digits, then pairs
fn group_indian(digits: &str) -> String {
	if digits.len() <= 3 {
		return digits.to_string();
	}
	let (head, tail) = digits.split_at(digits.len() - 3);
	let mut groups: Vec<&str> = Vec::new();
	let mut end = head.len();
	while end > 0 {
		let start = end.saturating_sub(2);
		groups.push(&head[start..end]);
		end = start;
	}
	groups.reverse();
	format!("{},{}", groups.join(","), tail)
}

/// Short date as `day/month/year` without zero padding, e.g. `15/1/2024`
pub fn format_short_date(date: DateTime<Utc>) -> String {
	format!("{}/{}/{}", date.day(), date.month(), date.year())
}
