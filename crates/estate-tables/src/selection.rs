//! Row selection state
//!
//! Selection is keyed by record id and survives paging, but the bulk
//! operations act only on the ids currently visible on the page.

use std::collections::HashSet;
use std::hash::Hash;

/// Set of selected record ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id: Eq + Hash> {
	selected: HashSet<Id>,
}

impl<Id: Eq + Hash> Default for Selection<Id> {
	fn default() -> Self {
		Self {
			selected: HashSet::new(),
		}
	}
}

impl<Id: Clone + Eq + Hash> Selection<Id> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_selected(&self, id: &Id) -> bool {
		self.selected.contains(id)
	}

	pub fn len(&self) -> usize {
		self.selected.len()
	}

	pub fn is_empty(&self) -> bool {
		self.selected.is_empty()
	}

	/// Flips membership of `id`; returns whether it is now selected
	pub fn toggle_one(&mut self, id: Id) -> bool {
		if self.selected.remove(&id) {
			false
		} else {
			self.selected.insert(id);
			true
		}
	}

	/// Checks or unchecks a single row's box
	pub fn set_one(&mut self, id: Id, checked: bool) {
		if checked {
			self.selected.insert(id);
		} else {
			self.selected.remove(&id);
		}
	}

	/// Header checkbox
	///
	/// Checking adds every visible id to the selection; unchecking removes
	/// exactly the visible ids. Ids on other pages are left alone either way.
	pub fn toggle_all<I>(&mut self, checked: bool, visible: I)
	where
		I: IntoIterator<Item = Id>,
	{
		if checked {
			self.selected.extend(visible);
		} else {
			for id in visible {
				self.selected.remove(&id);
			}
		}
	}

	/// True iff `visible` is non-empty and every id in it is selected
	pub fn all_selected<'a, I>(&self, visible: I) -> bool
	where
		I: IntoIterator<Item = &'a Id>,
		Id: 'a,
	{
		let mut any = false;
		for id in visible {
			if !self.selected.contains(id) {
				return false;
			}
			any = true;
		}
		any
	}

	/// Selected ids in no particular order
	pub fn ids(&self) -> Vec<Id> {
		self.selected.iter().cloned().collect()
	}

	pub fn clear(&mut self) {
		self.selected.clear();
	}
}
