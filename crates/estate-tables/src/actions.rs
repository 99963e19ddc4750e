//! Optional callback hooks wired by the page that owns the table
//!
//! Every hook is optional. The engine invokes a hook only when it is present
//! and never changes its own behavior based on which hooks are wired.

use crate::record::Record;
use std::fmt;

/// Receives the full set of selected ids after every selection change
pub type SelectionHandler<Id> = Box<dyn Fn(&[Id])>;

/// Receives the record a row event happened on
pub type RowHandler<R> = Box<dyn Fn(&R)>;

/// Per-row action buttons, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
	View,
	Edit,
	Duplicate,
	Share,
	Delete,
}

impl RowAction {
	/// All actions in the order they are displayed
	pub const ALL: [Self; 5] = [
		Self::View,
		Self::Edit,
		Self::Duplicate,
		Self::Share,
		Self::Delete,
	];

	/// Button tooltip
	pub fn label(self) -> &'static str {
		match self {
			Self::View => "View",
			Self::Edit => "Edit",
			Self::Duplicate => "Duplicate",
			Self::Share => "Share",
			Self::Delete => "Delete",
		}
	}
}

/// Hooks a table calls back into
///
/// # Example
///
/// ```rust
/// use estate_tables::actions::{RowAction, TableHandlers};
/// use serde_json::Value;
///
/// let handlers: TableHandlers<Value> = TableHandlers::new()
///     .on_edit(|row: &Value| println!("edit {}", row["id"]))
///     .on_delete(|row: &Value| println!("delete {}", row["id"]));
///
/// assert_eq!(handlers.wired_actions(), vec![RowAction::Edit, RowAction::Delete]);
/// ```
pub struct TableHandlers<R: Record> {
	selection_change: Option<SelectionHandler<R::Id>>,
	row_click: Option<RowHandler<R>>,
	view: Option<RowHandler<R>>,
	edit: Option<RowHandler<R>>,
	duplicate: Option<RowHandler<R>>,
	share: Option<RowHandler<R>>,
	delete: Option<RowHandler<R>>,
}

impl<R: Record> Default for TableHandlers<R> {
	fn default() -> Self {
		Self {
			selection_change: None,
			row_click: None,
			view: None,
			edit: None,
			duplicate: None,
			share: None,
			delete: None,
		}
	}
}

impl<R: Record> TableHandlers<R> {
	/// No hooks wired
	pub fn new() -> Self {
		Self::default()
	}

	pub fn on_selection_change(mut self, handler: impl Fn(&[R::Id]) + 'static) -> Self {
		self.selection_change = Some(Box::new(handler));
		self
	}

	pub fn on_row_click(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.row_click = Some(Box::new(handler));
		self
	}

	pub fn on_view(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.view = Some(Box::new(handler));
		self
	}

	pub fn on_edit(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.edit = Some(Box::new(handler));
		self
	}

	pub fn on_duplicate(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.duplicate = Some(Box::new(handler));
		self
	}

	pub fn on_share(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.share = Some(Box::new(handler));
		self
	}

	pub fn on_delete(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.delete = Some(Box::new(handler));
		self
	}

	fn action_handler(&self, action: RowAction) -> Option<&RowHandler<R>> {
		match action {
			RowAction::View => self.view.as_ref(),
			RowAction::Edit => self.edit.as_ref(),
			RowAction::Duplicate => self.duplicate.as_ref(),
			RowAction::Share => self.share.as_ref(),
			RowAction::Delete => self.delete.as_ref(),
		}
	}

	/// Actions that have a handler, in display order
	pub fn wired_actions(&self) -> Vec<RowAction> {
		RowAction::ALL
			.into_iter()
			.filter(|action| self.action_handler(*action).is_some())
			.collect()
	}

	pub fn has_row_click(&self) -> bool {
		self.row_click.is_some()
	}

	/// Runs the handler for `action`; returns false when none is wired
	pub fn invoke(&self, action: RowAction, record: &R) -> bool {
		match self.action_handler(action) {
			Some(handler) => {
				handler(record);
				true
			}
			None => false,
		}
	}

	/// Runs the row click hook; returns false when none is wired
	pub fn row_clicked(&self, record: &R) -> bool {
		match &self.row_click {
			Some(handler) => {
				handler(record);
				true
			}
			None => false,
		}
	}

	pub(crate) fn selection_changed(&self, ids: &[R::Id]) {
		if let Some(handler) = &self.selection_change {
			handler(ids);
		}
	}
}

impl<R: Record> fmt::Debug for TableHandlers<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableHandlers")
			.field("selection_change", &self.selection_change.is_some())
			.field("row_click", &self.row_click.is_some())
			.field("actions", &self.wired_actions())
			.finish()
	}
}
