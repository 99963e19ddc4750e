//! Notification error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
	/// Transport failure talking to the notifications endpoint
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// Endpoint answered with a non-success status
	#[error("Notification API error ({status}): {body}")]
	Api { status: u16, body: String },

	/// Response body did not decode
	#[error("Failed to decode notification response: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("Configuration error: {0}")]
	Config(#[from] toml::de::Error),

	/// Base URL not usable for building endpoint URLs
	#[error("Invalid API base URL: {0}")]
	InvalidBaseUrl(String),

	/// Notification not present in the cached feed
	#[error("Notification not found: {0}")]
	NotFound(i64),
}

pub type Result<T> = std::result::Result<T, NotificationError>;
