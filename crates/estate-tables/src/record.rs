//! Record access for the table engine
//!
//! The engine never looks at a record's concrete shape. It only asks for a
//! stable identifier (for selection) and for field values by column key.

use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A row the table can display
///
/// # Example
///
/// ```rust
/// use estate_tables::{CellValue, Record};
///
/// struct Lead {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for Lead {
///     type Id = u32;
///
///     fn id(&self) -> Option<u32> {
///         Some(self.id)
///     }
///
///     fn field(&self, key: &str) -> Option<CellValue> {
///         match key {
///             "name" => Some(CellValue::from(self.name.as_str())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
	/// Unique identifier used to key row selection
	type Id: Clone + Eq + Hash + Debug;

	/// Returns the record's identifier, if it has one
	///
	/// Records without an identifier can be displayed but not selected.
	fn id(&self) -> Option<Self::Id>;

	/// Returns the value stored under `key`, or `None` when missing or null
	fn field(&self, key: &str) -> Option<CellValue>;
}

/// Identifier of a JSON record
///
/// Serializes as the bare number or string the API uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
	Number(i64),
	Text(String),
}

impl fmt::Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(n) => write!(f, "{n}"),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl From<i64> for RecordId {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for RecordId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

fn json_to_cell(value: &Value) -> Option<CellValue> {
	match value {
		Value::Null => None,
		Value::Bool(b) => Some(CellValue::Bool(*b)),
		Value::Number(n) => n.as_f64().map(CellValue::Number),
		Value::String(s) => Some(CellValue::Text(s.clone())),
		Value::Array(_) | Value::Object(_) => Some(CellValue::Json(value.clone())),
	}
}

fn json_to_id(value: &Value) -> Option<RecordId> {
	match value {
		Value::Number(n) => n.as_i64().map(RecordId::Number),
		Value::String(s) => Some(RecordId::Text(s.clone())),
		_ => None,
	}
}

/// Rows decoded straight from the REST API; the id lives under `"id"`
impl Record for Map<String, Value> {
	type Id = RecordId;

	fn id(&self) -> Option<RecordId> {
		self.get("id").and_then(json_to_id)
	}

	fn field(&self, key: &str) -> Option<CellValue> {
		self.get(key).and_then(json_to_cell)
	}
}

/// Non-object values have no fields and no id
impl Record for Value {
	type Id = RecordId;

	fn id(&self) -> Option<RecordId> {
		self.as_object().and_then(|map| map.id())
	}

	fn field(&self, key: &str) -> Option<CellValue> {
		self.as_object().and_then(|map| map.field(key))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_json_record_id() {
		assert_eq!(json!({"id": 7}).id(), Some(RecordId::Number(7)));
		assert_eq!(json!({"id": "p-7"}).id(), Some(RecordId::from("p-7")));
		assert_eq!(json!({"name": "x"}).id(), None);
		assert_eq!(json!([1, 2]).id(), None);
	}

	#[test]
	fn test_json_record_fields() {
		let row = json!({
			"id": 1,
			"name": "Sea View",
			"price": 4500000,
			"featured": true,
			"owner": null,
			"address": {"city": "Goa"}
		});
		assert_eq!(row.field("name"), Some(CellValue::from("Sea View")));
		assert_eq!(row.field("price"), Some(CellValue::Number(4_500_000.0)));
		assert_eq!(row.field("featured"), Some(CellValue::Bool(true)));
		assert_eq!(row.field("owner"), None);
		assert_eq!(row.field("missing"), None);
		assert!(matches!(row.field("address"), Some(CellValue::Json(_))));
	}
}
