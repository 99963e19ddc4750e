//! # Estate CRM
//!
//! The list-page engine of a real-estate CRM front end. Every list screen
//! (properties, leads, employees, notifications) is built from the same
//! parts, re-exported here behind feature flags:
//!
//! - `tables` - the data table: search, sort, pagination, row selection and
//!   cell formatting ([`tables`])
//! - `filters` - the filter bar above a table and the server list query
//!   ([`filters`])
//! - `notifications` - the notification bell: cached feed, REST source and
//!   background poller ([`notifications`])
//! - `full` (default) - all of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use estate_crm::prelude::*;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"id": 1, "title": "Sea View Villa", "price": 9500000, "status": "active"}),
//!     json!({"id": 2, "title": "Lake Apartment", "price": 4500000, "status": "pending"}),
//! ];
//!
//! let mut table = DataTable::new(
//!     vec![
//!         ColumnDescriptor::new("title", "Title"),
//!         ColumnDescriptor::new("price", "Price").column_type(ColumnType::Currency),
//!         ColumnDescriptor::new("status", "Status").column_type(ColumnType::Status),
//!     ],
//!     TableConfig::new().with_searchable(true).with_selectable(true),
//! );
//! table.toggle_sort("price").unwrap();
//!
//! let view = table.view(&rows);
//! assert_eq!(view.rows[0]["id"], 2);
//! assert_eq!(table.render_row(view.rows[0])[1].text(), "₹45,00,000");
//! ```

#[cfg(feature = "tables")]
pub use estate_tables as tables;

#[cfg(feature = "filters")]
pub use estate_filters as filters;

#[cfg(feature = "notifications")]
pub use estate_notifications as notifications;

/// Prelude module for convenient imports
pub mod prelude {
	#[cfg(feature = "tables")]
	pub use estate_tables::{
		Cell, CellValue, ColumnDescriptor, ColumnType, DataTable, PageSummary, Record, RecordId,
		RowAction, SortDirection, TableConfig, TableError, TableHandlers, TableView,
	};

	#[cfg(feature = "filters")]
	pub use estate_filters::{
		DateRange, FilterError, FilterFields, FilterSet, ListPage, ListQuery, PriceRange,
	};

	#[cfg(feature = "notifications")]
	pub use estate_notifications::{
		HttpNotificationSource, Notification, NotificationCenter, NotificationConfig,
		NotificationError, NotificationFeed, NotificationFilter, NotificationKind,
		NotificationPoller, NotificationService, NotificationSource, PollerHandle, SharedCenter,
	};
}
