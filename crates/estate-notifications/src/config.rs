//! Notification client configuration

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Shortest poll period the poller will run with
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Where and how often to fetch notifications
///
/// # Example
///
/// ```rust
/// use estate_notifications::NotificationConfig;
/// use std::time::Duration;
///
/// let config = NotificationConfig::from_toml(r#"
///     api_base_url = "https://crm.example.com/api"
///     poll_interval = 30
/// "#).unwrap();
/// assert_eq!(config.poll_interval, Duration::from_secs(30));
/// assert!(config.auth_token.is_none());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
	/// Base URL of the REST API, without a trailing slash
	pub api_base_url: String,
	/// Poll period, in whole seconds on the wire
	#[serde(serialize_with = "serialize_secs", deserialize_with = "deserialize_secs")]
	pub poll_interval: Duration,
	/// Bearer token sent with every request
	pub auth_token: Option<String>,
}

impl Default for NotificationConfig {
	fn default() -> Self {
		Self {
			api_base_url: "http://localhost:5000/api".to_string(),
			poll_interval: Duration::from_secs(10),
			auth_token: None,
		}
	}
}

fn serialize_secs<S: Serializer>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.serialize_u64(value.as_secs())
}

fn deserialize_secs<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
	let secs = u64::deserialize(deserializer)?;
	if secs == 0 {
		return Err(serde::de::Error::custom("poll_interval must be at least 1 second"));
	}
	Ok(Duration::from_secs(secs))
}

impl NotificationConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_toml(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
		self.api_base_url = url.into();
		self
	}

	pub fn with_poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = interval;
		self
	}

	pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
		self.auth_token = Some(token.into());
		self
	}

	/// Poll period actually used, never below [`MIN_POLL_INTERVAL`]
	pub fn effective_poll_interval(&self) -> Duration {
		self.poll_interval.max(MIN_POLL_INTERVAL)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = NotificationConfig::new();
		assert_eq!(config.api_base_url, "http://localhost:5000/api");
		assert_eq!(config.poll_interval, Duration::from_secs(10));
		assert_eq!(config.auth_token, None);
	}

	#[test]
	fn test_partial_toml_keeps_defaults() {
		let config = NotificationConfig::from_toml(r#"auth_token = "abc""#).unwrap();
		assert_eq!(config.auth_token.as_deref(), Some("abc"));
		assert_eq!(config.poll_interval, Duration::from_secs(10));
	}

	#[test]
	fn test_zero_interval_rejected() {
		assert!(NotificationConfig::from_toml("poll_interval = 0").is_err());
	}

	#[test]
	fn test_builder_interval_is_floored() {
		let config = NotificationConfig::new().with_poll_interval(Duration::ZERO);
		assert_eq!(config.effective_poll_interval(), MIN_POLL_INTERVAL);
	}
}
