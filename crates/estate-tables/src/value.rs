//! Cell values extracted from records

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A single field value as seen by the table engine
///
/// Records expose their fields through [`Record::field`](crate::Record::field);
/// a missing or null field is represented by `None` at the call site, never
/// by a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
	Bool(bool),
	Number(f64),
	Date(DateTime<Utc>),
	Text(String),
	/// Nested object or array, kept verbatim
	Json(serde_json::Value),
}

impl CellValue {
	/// String used for search matching
	///
	/// Numbers use their shortest representation (`100`, `1.5`), dates are
	/// RFC 3339 and nested values are compact JSON.
	pub fn to_display_string(&self) -> String {
		match self {
			Self::Bool(b) => b.to_string(),
			Self::Number(n) => unsigned_zero(*n).to_string(),
			Self::Date(d) => d.to_rfc3339(),
			Self::Text(s) => s.clone(),
			Self::Json(v) => v.to_string(),
		}
	}

	/// Numeric reading of the value; numeric text is parsed
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(n) if n.is_finite() => Some(*n),
			Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
			_ => None,
		}
	}

	/// Timestamp reading of the value
	///
	/// Accepts dates, epoch milliseconds and text in RFC 3339,
	/// `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD` form (the last two taken as UTC).
	pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
		match self {
			Self::Date(date) => Some(*date),
			Self::Number(millis) if millis.is_finite() => {
				DateTime::from_timestamp_millis(*millis as i64)
			}
			Self::Text(s) => parse_datetime(s.trim()),
			_ => None,
		}
	}

	fn kind_rank(&self) -> u8 {
		match self {
			Self::Bool(_) => 0,
			Self::Number(_) => 1,
			Self::Date(_) => 2,
			Self::Text(_) => 3,
			Self::Json(_) => 4,
		}
	}

	/// Total order over cell values
	///
	/// Values of the same kind compare natively. Values of different kinds are
	/// never coerced into each other: they order by kind
	/// (`Bool < Number < Date < Text < Json`).
	pub fn compare(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Number(a), Self::Number(b)) => unsigned_zero(*a).total_cmp(&unsigned_zero(*b)),
			(Self::Date(a), Self::Date(b)) => a.cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			(Self::Json(a), Self::Json(b)) => a.to_string().cmp(&b.to_string()),
			_ => self.kind_rank().cmp(&other.kind_rank()),
		}
	}
}

/// `-0.0` reads and orders as `0.0`
fn unsigned_zero(n: f64) -> f64 {
	if n == 0.0 { 0.0 } else { n }
}

fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
	if let Ok(date) = DateTime::parse_from_rfc3339(input) {
		return Some(date.with_timezone(&Utc));
	}
	if let Ok(date) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
		return Some(date.and_utc());
	}
	NaiveDate::parse_from_str(input, "%Y-%m-%d")
		.ok()
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.map(|date| date.and_utc())
}

/// Compares two possibly-missing values; missing sorts before any value
pub fn compare_optional(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => a.compare(b),
	}
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_display_string())
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<DateTime<Utc>> for CellValue {
	fn from(value: DateTime<Utc>) -> Self {
		Self::Date(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_display_string_numbers() {
		assert_eq!(CellValue::Number(100.0).to_display_string(), "100");
		assert_eq!(CellValue::Number(1.5).to_display_string(), "1.5");
		assert_eq!(CellValue::Number(-3.0).to_display_string(), "-3");
	}

	#[test]
	fn test_display_string_other_kinds() {
		assert_eq!(CellValue::Bool(false).to_display_string(), "false");
		assert_eq!(CellValue::from("Villa").to_display_string(), "Villa");
		assert_eq!(
			CellValue::Json(serde_json::json!({"city": "Pune"})).to_display_string(),
			r#"{"city":"Pune"}"#
		);
		let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
		assert_eq!(
			CellValue::Date(date).to_display_string(),
			"2024-01-15T00:00:00+00:00"
		);
	}

	#[test]
	fn test_coercions() {
		assert_eq!(CellValue::from(" 4500000 ").as_number(), Some(4_500_000.0));
		assert_eq!(CellValue::from("n/a").as_number(), None);
		assert_eq!(CellValue::Number(f64::NAN).as_number(), None);

		let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
		assert_eq!(CellValue::from("2024-01-15").as_datetime(), Some(expected));
		assert_eq!(
			CellValue::from("2024-01-15T00:00:00Z").as_datetime(),
			Some(expected)
		);
		assert_eq!(
			CellValue::Number(expected.timestamp_millis() as f64).as_datetime(),
			Some(expected)
		);
		assert_eq!(CellValue::Bool(true).as_datetime(), None);
	}

	#[test]
	fn test_negative_zero_ties_with_zero() {
		let negative = CellValue::Number(-0.0);
		assert_eq!(negative.compare(&CellValue::Number(0.0)), Ordering::Equal);
		assert_eq!(negative.to_display_string(), "0");
		assert_eq!(
			negative.compare(&CellValue::Number(-1.0)),
			Ordering::Greater
		);
	}

	#[test]
	fn test_compare_same_kind() {
		assert_eq!(
			CellValue::Number(50.0).compare(&CellValue::Number(100.0)),
			Ordering::Less
		);
		assert_eq!(
			CellValue::from("beta").compare(&CellValue::from("Alpha")),
			Ordering::Greater
		);
	}

	#[test]
	fn test_compare_mixed_kinds_is_not_coerced() {
		// "100" is text, 5 is a number: numbers rank before text regardless of value
		assert_eq!(
			CellValue::from("100").compare(&CellValue::Number(5.0)),
			Ordering::Greater
		);
		assert_eq!(
			CellValue::Bool(true).compare(&CellValue::Number(-1.0)),
			Ordering::Less
		);
	}

	#[test]
	fn test_missing_sorts_first() {
		let value = CellValue::Number(0.0);
		assert_eq!(compare_optional(None, Some(&value)), Ordering::Less);
		assert_eq!(compare_optional(Some(&value), None), Ordering::Greater);
		assert_eq!(compare_optional(None, None), Ordering::Equal);
	}
}
