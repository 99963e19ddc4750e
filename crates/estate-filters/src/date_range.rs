//! Relative date ranges offered by the filter bar

use crate::error::FilterError;
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A date range relative to "today"
///
/// Weeks start on Monday. The wire form is the snake_case token the list
/// endpoints accept (`this_week`, `last_month`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
	Today,
	Yesterday,
	ThisWeek,
	LastWeek,
	ThisMonth,
	LastMonth,
	ThisYear,
}

impl DateRange {
	pub const ALL: [DateRange; 7] = [
		DateRange::Today,
		DateRange::Yesterday,
		DateRange::ThisWeek,
		DateRange::LastWeek,
		DateRange::ThisMonth,
		DateRange::LastMonth,
		DateRange::ThisYear,
	];

	/// Ranges with a one-click button next to the search box
	pub const QUICK: [DateRange; 4] = [
		DateRange::Today,
		DateRange::ThisWeek,
		DateRange::ThisMonth,
		DateRange::ThisYear,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Today => "today",
			Self::Yesterday => "yesterday",
			Self::ThisWeek => "this_week",
			Self::LastWeek => "last_week",
			Self::ThisMonth => "this_month",
			Self::LastMonth => "last_month",
			Self::ThisYear => "this_year",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Today => "Today",
			Self::Yesterday => "Yesterday",
			Self::ThisWeek => "This Week",
			Self::LastWeek => "Last Week",
			Self::ThisMonth => "This Month",
			Self::LastMonth => "Last Month",
			Self::ThisYear => "This Year",
		}
	}

	/// First and last day of the range, both inclusive
	///
	/// # Examples
	///
	/// ```rust
	/// use chrono::NaiveDate;
	/// use estate_filters::DateRange;
	///
	/// // 2024-03-14 is a Thursday
	/// let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
	/// let (start, end) = DateRange::ThisWeek.bounds(today);
	/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
	/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
	/// ```
	pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
		match self {
			Self::Today => (today, today),
			Self::Yesterday => {
				let day = today - TimeDelta::days(1);
				(day, day)
			}
			Self::ThisWeek => week_of(today),
			Self::LastWeek => week_of(today - TimeDelta::days(7)),
			Self::ThisMonth => month_of(today),
			Self::LastMonth => month_of(first_of_month(today) - TimeDelta::days(1)),
			Self::ThisYear => {
				let start = today - TimeDelta::days(i64::from(today.ordinal0()));
				let next = start + TimeDelta::days(366);
				let end = next - TimeDelta::days(i64::from(next.ordinal0())) - TimeDelta::days(1);
				(start, end)
			}
		}
	}

	pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
		let (start, end) = self.bounds(today);
		start <= date && date <= end
	}
}

fn week_of(day: NaiveDate) -> (NaiveDate, NaiveDate) {
	let monday = day - TimeDelta::days(i64::from(day.weekday().num_days_from_monday()));
	(monday, monday + TimeDelta::days(6))
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
	day - TimeDelta::days(i64::from(day.day0()))
}

fn month_of(day: NaiveDate) -> (NaiveDate, NaiveDate) {
	let first = first_of_month(day);
	let next = first_of_month(first + TimeDelta::days(32));
	(first, next - TimeDelta::days(1))
}

impl fmt::Display for DateRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DateRange {
	type Err = FilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|range| range.as_str() == s)
			.ok_or_else(|| FilterError::UnknownDateRange(s.to_string()))
	}
}
