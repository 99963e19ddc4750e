//! Notification wire types

use chrono::{DateTime, NaiveDateTime, Utc};
use estate_tables::{CellValue, Record, RecordId};
use serde::{Deserialize, Deserializer, Serialize};

pub type NotificationId = i64;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
	Lead,
	FollowUp,
	Property,
	Payment,
	System,
	/// Any type this client does not know about
	#[default]
	#[serde(other)]
	Other,
}

impl NotificationKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Lead => "lead",
			Self::FollowUp => "follow_up",
			Self::Property => "property",
			Self::Payment => "payment",
			Self::System => "system",
			Self::Other => "other",
		}
	}
}

/// A single notification as served by `GET /notifications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
	pub id: NotificationId,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub message: String,
	#[serde(rename = "type", default)]
	pub kind: NotificationKind,
	#[serde(default)]
	pub is_read: bool,
	#[serde(deserialize_with = "deserialize_timestamp")]
	pub created_at: DateTime<Utc>,
	#[serde(default)]
	pub entity_type: Option<String>,
	#[serde(default)]
	pub entity_id: Option<RecordId>,
}

/// Timestamps come either with an offset or as naive UTC
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
	deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
	let raw = String::deserialize(deserializer)?;
	if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
		return Ok(date.with_timezone(&Utc));
	}
	NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
		.map(|date| date.and_utc())
		.map_err(serde::de::Error::custom)
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

impl Notification {
	/// Relative age as shown in the dropdown: `Just now`, `5m ago`, `3h ago`, `2d ago`
	///
	/// Timestamps in the future (clock skew) read as `Just now`.
	pub fn time_ago(&self, now: DateTime<Utc>) -> String {
		let seconds = (now - self.created_at).num_seconds();
		if seconds < MINUTE {
			"Just now".to_string()
		} else if seconds < HOUR {
			format!("{}m ago", seconds / MINUTE)
		} else if seconds < DAY {
			format!("{}h ago", seconds / HOUR)
		} else {
			format!("{}d ago", seconds / DAY)
		}
	}

	/// Where clicking the notification leads
	///
	/// A linked lead, property or user opens its detail page. Otherwise the
	/// notification type picks a section; follow-ups only go to the leads
	/// section when no entity is linked at all.
	pub fn route(&self) -> Option<String> {
		let section = match self.kind {
			NotificationKind::Lead => Some("/leads"),
			NotificationKind::Property => Some("/properties"),
			_ => None,
		};

		match (self.entity_type.as_deref(), &self.entity_id) {
			(Some(entity_type), Some(entity_id)) if !entity_type.is_empty() => {
				let detail = match entity_type {
					"lead" => Some("/leads"),
					"property" => Some("/properties"),
					"user" => Some("/employees"),
					_ => None,
				};
				match detail {
					Some(base) => Some(format!("{base}/{entity_id}")),
					None => section.map(str::to_string),
				}
			}
			_ => match self.kind {
				NotificationKind::FollowUp => Some("/leads".to_string()),
				_ => section.map(str::to_string),
			},
		}
	}
}

/// Notifications page rows
impl Record for Notification {
	type Id = NotificationId;

	fn id(&self) -> Option<NotificationId> {
		Some(self.id)
	}

	fn field(&self, key: &str) -> Option<CellValue> {
		match key {
			"id" => Some(CellValue::from(self.id)),
			"title" => Some(CellValue::from(self.title.as_str())),
			"message" => Some(CellValue::from(self.message.as_str())),
			"type" => Some(CellValue::from(self.kind.as_str())),
			"is_read" => Some(CellValue::Bool(self.is_read)),
			"created_at" => Some(CellValue::Date(self.created_at)),
			"entity_type" => self.entity_type.as_deref().map(CellValue::from),
			"entity_id" => self
				.entity_id
				.as_ref()
				.map(|id| CellValue::from(id.to_string())),
			_ => None,
		}
	}
}

/// Body of `GET /notifications`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationFeed {
	#[serde(default)]
	pub notifications: Vec<Notification>,
	#[serde(default)]
	pub unread_count: usize,
}
