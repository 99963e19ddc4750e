//! Data table engine for the estate CRM
//!
//! Every list page (properties, leads, employees, ...) renders its records
//! through the same table. This crate holds the part of that table with real
//! behavior: the search → sort → paginate pipeline and the row selection
//! state. Presentation is left to the caller; the engine hands back the rows
//! to show, formatted cells and the derived UI state.
//!
//! # Features
//!
//! - **Search**: case-insensitive substring match across searchable columns
//! - **Sorting**: stable, header-click toggling, missing values first
//! - **Pagination**: fixed-size pages with footer summary and page links
//! - **Selection**: id-keyed, survives paging, page-scoped select-all
//! - **Formatting**: rupee currency, short dates, status and badge pills
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataTable] --> B[Columns]
//!     A --> C[TableConfig]
//!     A --> D[SortState]
//!     A --> E[PaginationState]
//!     A --> F[Selection]
//!     A --> G[TableHandlers]
//!     H[records] --> I[filter_records]
//!     I --> J[sort_records]
//!     J --> K[paginate]
//!     K --> L[TableView]
//! ```
//!
//! # Example
//!
//! ```rust
//! use estate_tables::{ColumnDescriptor, DataTable, TableConfig};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"id": 1, "name": "Alpha"}),
//!     json!({"id": 2, "name": "beta"}),
//! ];
//! let mut table = DataTable::new(
//!     vec![ColumnDescriptor::new("name", "Name")],
//!     TableConfig::new().with_searchable(true),
//! );
//! table.set_search_term("eta");
//!
//! let view = table.view(&rows);
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.rows[0]["id"], 2);
//! ```

#![warn(rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod column;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod sort;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use actions::{RowAction, TableHandlers};
pub use column::{ColumnDescriptor, ColumnType};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use format::Cell;
pub use pagination::{PageSummary, PaginationState};
pub use record::{Record, RecordId};
pub use selection::Selection;
pub use sort::{SortDirection, SortState};
pub use table::{DataTable, TableView};
pub use value::CellValue;
