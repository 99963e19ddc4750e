//! The data table: per-instance state plus the search, sort, paginate pipeline
//!
//! A [`DataTable`] owns everything that lives as long as one mounted table:
//! column definitions, configuration flags, the search term, sort state,
//! current page and row selection. Records stay with the caller and are
//! passed in on every [`DataTable::view`]; all derived state is recomputed
//! from them, so nothing can go stale.

use crate::actions::{RowAction, TableHandlers};
use crate::column::ColumnDescriptor;
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::filter::filter_records;
use crate::format::{Cell, format_cell};
use crate::pagination::{PageSummary, PaginationState, page_links, paginate};
use crate::record::Record;
use crate::selection::Selection;
use crate::sort::{SortDirection, SortState, sort_records};

/// What one render of the table shows
#[derive(Debug)]
pub struct TableView<'a, R> {
	/// Rows on the current page, in display order
	pub rows: Vec<&'a R>,
	/// Row count after searching, before paging
	pub total_count: usize,
	/// Page count after searching; 1 when pagination is off
	pub total_pages: usize,
	/// Page shown; always 1 when pagination is off
	pub current_page: usize,
}

impl<R> TableView<'_, R> {
	/// Whether the footer with page controls is shown
	pub fn shows_footer(&self) -> bool {
		self.total_pages > 1
	}

	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	/// Page numbers offered as direct links
	pub fn page_links(&self) -> Vec<usize> {
		page_links(self.total_pages)
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// A table instance
///
/// # Example
///
/// ```rust
/// use estate_tables::{ColumnDescriptor, DataTable, TableConfig};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"id": 1, "name": "Alpha", "price": 100}),
///     json!({"id": 2, "name": "beta", "price": 50}),
///     json!({"id": 3, "name": "Gamma", "price": 50}),
/// ];
///
/// let mut table = DataTable::new(
///     vec![
///         ColumnDescriptor::new("name", "Name"),
///         ColumnDescriptor::new("price", "Price"),
///     ],
///     TableConfig::new().with_searchable(true),
/// );
///
/// table.toggle_sort("price").unwrap();
/// let view = table.view(&rows);
/// let ids: Vec<_> = view.rows.iter().map(|row| row["id"].as_i64().unwrap()).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// ```
#[derive(Debug)]
pub struct DataTable<R: Record> {
	columns: Vec<ColumnDescriptor>,
	config: TableConfig,
	search_term: String,
	sort: SortState,
	pagination: PaginationState,
	selection: Selection<R::Id>,
	handlers: TableHandlers<R>,
}

impl<R: Record> DataTable<R> {
	/// Creates a table with fresh state: no search, no sort, page 1, nothing selected
	pub fn new(columns: Vec<ColumnDescriptor>, config: TableConfig) -> Self {
		let pagination = PaginationState::new(config.page_size);
		Self {
			columns,
			config,
			search_term: String::new(),
			sort: SortState::unsorted(),
			pagination,
			selection: Selection::new(),
			handlers: TableHandlers::new(),
		}
	}

	/// Wires the page's callback hooks
	pub fn with_handlers(mut self, handlers: TableHandlers<R>) -> Self {
		self.handlers = handlers;
		self
	}

	pub fn columns(&self) -> &[ColumnDescriptor] {
		&self.columns
	}

	pub fn config(&self) -> &TableConfig {
		&self.config
	}

	pub fn handlers(&self) -> &TableHandlers<R> {
		&self.handlers
	}

	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	/// Replaces the search term
	///
	/// The current page is left as is; callers that want to jump back to the
	/// first page after narrowing the results call [`Self::set_page`] or
	/// [`Self::clamp_page`].
	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.search_term = term.into();
		tracing::debug!(term = %self.search_term, "search term changed");
	}

	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	/// Header indicator for `key`
	pub fn sort_indicator(&self, key: &str) -> Option<SortDirection> {
		if !self.config.sortable {
			return None;
		}
		self.sort.indicator(key)
	}

	fn sortable_column(&self, key: &str) -> Result<&ColumnDescriptor> {
		let column = self
			.columns
			.iter()
			.find(|column| column.key() == key)
			.ok_or_else(|| TableError::ColumnNotFound(key.to_string()))?;
		if !column.is_sortable() {
			return Err(TableError::ColumnNotSortable(key.to_string()));
		}
		Ok(column)
	}

	/// Header click on column `key`
	///
	/// Does nothing when sorting is disabled for the table.
	pub fn toggle_sort(&mut self, key: &str) -> Result<()> {
		if !self.config.sortable {
			tracing::debug!(key, "sorting disabled, header click ignored");
			return Ok(());
		}
		self.sortable_column(key)?;
		self.sort.toggle(key);
		tracing::debug!(key, direction = ?self.sort.direction, "sort toggled");
		Ok(())
	}

	/// Sorts by `key` in an explicit direction
	pub fn sort_by(&mut self, key: &str, direction: SortDirection) -> Result<()> {
		self.sortable_column(key)?;
		self.sort = SortState::by(key, direction);
		Ok(())
	}

	/// Drops any active sort
	pub fn clear_sort(&mut self) {
		self.sort = SortState::unsorted();
	}

	pub fn current_page(&self) -> usize {
		self.pagination.current_page()
	}

	/// Jumps to `page` (1-based)
	pub fn set_page(&mut self, page: usize) -> Result<()> {
		self.pagination.set_page(page)?;
		tracing::debug!(page, "page changed");
		Ok(())
	}

	pub fn previous_page(&mut self) {
		self.pagination.previous();
	}

	/// Moves forward, stopping at the last page of `total_pages`
	pub fn next_page(&mut self, total_pages: usize) {
		self.pagination.next(total_pages);
	}

	/// Pulls the current page back into range after the row count changed
	pub fn clamp_page(&mut self, records: &[R]) {
		let total_pages = self.view(records).total_pages;
		self.pagination.clamp(total_pages);
	}

	fn processed<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
		let searched = if self.config.searchable {
			filter_records(records, &self.search_term, &self.columns)
		} else {
			records.iter().collect()
		};
		if self.config.sortable {
			sort_records(searched, &self.sort)
		} else {
			searched
		}
	}

	/// Runs search, sort and pagination over `records`
	pub fn view<'a>(&self, records: &'a [R]) -> TableView<'a, R> {
		let processed = self.processed(records);
		let total_count = processed.len();
		if !self.config.pagination {
			return TableView {
				rows: processed,
				total_count,
				total_pages: 1,
				current_page: 1,
			};
		}

		let current_page = self.pagination.current_page();

		let (page, total_pages) = paginate(&processed, current_page, self.pagination.page_size());
		TableView {
			rows: page.to_vec(),
			total_count,
			total_pages,
			current_page,
		}
	}

	/// The "Showing X to Y of Z results" line, when the footer is shown
	pub fn summary(&self, records: &[R]) -> Option<PageSummary> {
		if !self.config.pagination {
			return None;
		}
		let view = self.view(records);
		view.shows_footer().then(|| {
			PageSummary::new(
				view.current_page,
				self.pagination.page_size(),
				view.total_count,
			)
		})
	}

	/// Formats every column of `record`
	pub fn render_row(&self, record: &R) -> Vec<Cell> {
		self.columns
			.iter()
			.map(|column| format_cell(column.value_of(record).as_ref(), column.kind()))
			.collect()
	}

	pub fn selection(&self) -> &Selection<R::Id> {
		&self.selection
	}

	pub fn is_selected(&self, record: &R) -> bool {
		record.id().is_some_and(|id| self.selection.is_selected(&id))
	}

	fn notify_selection(&self) {
		let ids = self.selection.ids();
		tracing::debug!(selected = ids.len(), "selection changed");
		self.handlers.selection_changed(&ids);
	}

	/// Flips the checkbox of the row with `id`
	pub fn toggle_row(&mut self, id: R::Id) {
		if !self.config.selectable {
			return;
		}
		self.selection.toggle_one(id);
		self.notify_selection();
	}

	/// Sets the checkbox of the row with `id`
	pub fn set_row_selected(&mut self, id: R::Id, checked: bool) {
		if !self.config.selectable {
			return;
		}
		self.selection.set_one(id, checked);
		self.notify_selection();
	}

	fn visible_ids(&self, records: &[R]) -> Vec<R::Id> {
		self.view(records)
			.rows
			.iter()
			.filter_map(|record| record.id())
			.collect()
	}

	/// Header checkbox: selects or deselects the rows on the current page
	pub fn toggle_all(&mut self, records: &[R], checked: bool) {
		if !self.config.selectable {
			return;
		}
		let visible = self.visible_ids(records);
		self.selection.toggle_all(checked, visible);
		self.notify_selection();
	}

	/// Header checkbox state: every row on the current page is selected
	pub fn all_selected(&self, records: &[R]) -> bool {
		let visible = self.visible_ids(records);
		self.selection.all_selected(&visible)
	}

	/// Action buttons shown on each row
	pub fn row_actions(&self) -> Vec<RowAction> {
		if !self.config.actions {
			return Vec::new();
		}
		self.handlers.wired_actions()
	}

	/// Row action button pressed; returns whether a handler ran
	pub fn invoke_action(&self, action: RowAction, record: &R) -> bool {
		if !self.config.actions {
			return false;
		}
		self.handlers.invoke(action, record)
	}

	/// Row body clicked; returns whether a handler ran
	pub fn row_clicked(&self, record: &R) -> bool {
		self.handlers.row_clicked(record)
	}
}
