//! Price brackets offered by the filter bar

use crate::error::FilterError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Inclusive price bracket, written `min-max` or `min+` (no upper bound)
///
/// # Examples
///
/// ```rust
/// use estate_filters::PriceRange;
///
/// let range: PriceRange = "500000-1000000".parse().unwrap();
/// assert!(range.contains(500_000.0));
/// assert!(range.contains(1_000_000.0));
/// assert!(!range.contains(1_000_001.0));
///
/// let open: PriceRange = "5000000+".parse().unwrap();
/// assert!(open.contains(90_000_000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
	min: f64,
	max: Option<f64>,
}

impl PriceRange {
	pub fn new(min: f64, max: Option<f64>) -> Self {
		Self { min, max }
	}

	pub fn min(&self) -> f64 {
		self.min
	}

	pub fn max(&self) -> Option<f64> {
		self.max
	}

	pub fn contains(&self, price: f64) -> bool {
		price >= self.min && self.max.is_none_or(|max| price <= max)
	}
}

fn parse_bound(raw: &str, input: &str) -> Result<f64, FilterError> {
	raw.trim()
		.parse::<f64>()
		.ok()
		.filter(|n| n.is_finite() && *n >= 0.0)
		.ok_or_else(|| FilterError::InvalidPriceRange(input.to_string()))
}

impl FromStr for PriceRange {
	type Err = FilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if let Some(min) = trimmed.strip_suffix('+') {
			return Ok(Self::new(parse_bound(min, s)?, None));
		}
		let (min, max) = trimmed
			.split_once('-')
			.ok_or_else(|| FilterError::InvalidPriceRange(s.to_string()))?;
		let (min, max) = (parse_bound(min, s)?, parse_bound(max, s)?);
		if min > max {
			return Err(FilterError::InvalidPriceRange(s.to_string()));
		}
		Ok(Self::new(min, Some(max)))
	}
}

impl fmt::Display for PriceRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.max {
			Some(max) => write!(f, "{}-{}", self.min, max),
			None => write!(f, "{}+", self.min),
		}
	}
}

impl Serialize for PriceRange {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for PriceRange {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}
