//! Filter bar and list queries for the estate CRM
//!
//! List pages (properties, leads, employees) put a filter bar above their
//! table: a search box, quick date buttons and an advanced panel with date
//! range, price bracket, status, type and location. This crate keeps that
//! state, turns it into list endpoint query parameters and decodes the
//! paged response.
//!
//! # Example
//!
//! ```rust
//! use estate_filters::{ListPage, ListQuery};
//!
//! let mut query = ListQuery::new();
//! query.set_search("villa");
//! query.set_filter("price_range", "5000000+");
//!
//! let body = r#"{"properties": [{"id": 7}], "total": 1, "page": 1, "pages": 1}"#;
//! let page: ListPage<serde_json::Value> = serde_json::from_str(body).unwrap();
//! assert_eq!(page.items.len(), 1);
//! assert!(!page.has_pager());
//! ```

pub mod date_range;
pub mod error;
pub mod filter_set;
pub mod price_range;
pub mod query;

pub use date_range::DateRange;
pub use error::{FilterError, Result};
pub use filter_set::{FilterFields, FilterSet};
pub use price_range::PriceRange;
pub use query::{ListPage, ListQuery};
