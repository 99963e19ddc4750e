//! Paginate stage, page state and footer helpers

use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of page links shown in the footer
pub const PAGE_LINK_LIMIT: usize = 5;

/// Total page count for `count` rows; never less than 1
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
	count.div_ceil(page_size.get()).max(1)
}

/// Returns the rows of page `page` (1-based) and the total page count
///
/// A page past the end, or page 0, yields an empty slice; the caller owns
/// the page number and is responsible for clamping it.
///
/// # Example
///
/// ```rust
/// use estate_tables::pagination::paginate;
/// use std::num::NonZeroUsize;
///
/// let rows = [1, 2, 3, 4, 5];
/// let size = NonZeroUsize::new(2).unwrap();
///
/// assert_eq!(paginate(&rows, 3, size), (&[5][..], 3));
/// assert_eq!(paginate(&rows, 4, size), (&[][..], 3));
/// ```
pub fn paginate<T>(records: &[T], page: usize, page_size: NonZeroUsize) -> (&[T], usize) {
	let pages = total_pages(records.len(), page_size);
	let size = page_size.get();
	let Some(start) = page.checked_sub(1).and_then(|index| index.checked_mul(size)) else {
		return (&[], pages);
	};
	if start >= records.len() {
		return (&[], pages);
	}
	let end = start.saturating_add(size).min(records.len());
	(&records[start..end], pages)
}

/// Current page and page size of one table instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
	current_page: usize,
	page_size: NonZeroUsize,
}

impl PaginationState {
	/// Starts on page 1
	pub fn new(page_size: NonZeroUsize) -> Self {
		Self {
			current_page: 1,
			page_size,
		}
	}

	pub fn current_page(&self) -> usize {
		self.current_page
	}

	pub fn page_size(&self) -> NonZeroUsize {
		self.page_size
	}

	/// Jumps to `page`
	///
	/// Pages beyond the end are accepted and simply render empty.
	pub fn set_page(&mut self, page: usize) -> Result<()> {
		if page == 0 {
			return Err(TableError::InvalidPage(page));
		}
		self.current_page = page;
		Ok(())
	}

	/// Moves back one page, stopping at 1
	pub fn previous(&mut self) {
		self.current_page = self.current_page.saturating_sub(1).max(1);
	}

	/// Moves forward one page, stopping at `total_pages`
	pub fn next(&mut self, total_pages: usize) {
		self.current_page = (self.current_page + 1).min(total_pages.max(1));
	}

	/// Pulls the current page back into `[1, total_pages]`
	pub fn clamp(&mut self, total_pages: usize) {
		self.current_page = self.current_page.clamp(1, total_pages.max(1));
	}
}

/// The "Showing X to Y of Z results" line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
	pub first: usize,
	pub last: usize,
	pub total: usize,
}

impl PageSummary {
	/// Summary for `page` of a `total`-row result
	pub fn new(page: usize, page_size: NonZeroUsize, total: usize) -> Self {
		let size = page_size.get();
		let first = page.saturating_sub(1).saturating_mul(size).saturating_add(1);
		let last = page.saturating_mul(size).min(total);
		Self { first, last, total }
	}
}

impl std::fmt::Display for PageSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Showing {} to {} of {} results",
			self.first, self.last, self.total
		)
	}
}

/// Page numbers offered as direct links: the first five pages at most
pub fn page_links(total_pages: usize) -> Vec<usize> {
	(1..=total_pages.min(PAGE_LINK_LIMIT)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn size(n: usize) -> NonZeroUsize {
		NonZeroUsize::new(n).unwrap()
	}

	#[test]
	fn test_total_pages() {
		assert_eq!(total_pages(0, size(10)), 1);
		assert_eq!(total_pages(5, size(2)), 3);
		assert_eq!(total_pages(4, size(2)), 2);
		assert_eq!(total_pages(1, size(10)), 1);
	}

	#[test]
	fn test_paginate_windows() {
		let rows: Vec<u32> = (1..=5).collect();
		assert_eq!(paginate(&rows, 1, size(2)), (&[1, 2][..], 3));
		assert_eq!(paginate(&rows, 2, size(2)), (&[3, 4][..], 3));
		assert_eq!(paginate(&rows, 3, size(2)), (&[5][..], 3));
	}

	#[test]
	fn test_paginate_out_of_range_is_empty() {
		let rows: Vec<u32> = (1..=5).collect();
		assert!(paginate(&rows, 4, size(2)).0.is_empty());
		assert!(paginate(&rows, 0, size(2)).0.is_empty());
		assert!(paginate(&rows, usize::MAX, size(2)).0.is_empty());
	}

	#[test]
	fn test_paginate_empty_input() {
		let rows: Vec<u32> = Vec::new();
		assert_eq!(paginate(&rows, 1, size(10)), (&[][..], 1));
	}

	#[test]
	fn test_state_navigation() {
		let mut state = PaginationState::new(size(10));
		assert_eq!(state.current_page(), 1);

		state.previous();
		assert_eq!(state.current_page(), 1);

		state.next(3);
		state.next(3);
		state.next(3);
		assert_eq!(state.current_page(), 3);

		state.previous();
		assert_eq!(state.current_page(), 2);
	}

	#[test]
	fn test_state_set_page() {
		let mut state = PaginationState::new(size(10));
		assert!(matches!(state.set_page(0), Err(TableError::InvalidPage(0))));
		state.set_page(7).unwrap();
		assert_eq!(state.current_page(), 7);
		state.clamp(2);
		assert_eq!(state.current_page(), 2);
		state.clamp(0);
		assert_eq!(state.current_page(), 1);
	}

	#[test]
	fn test_summary() {
		let summary = PageSummary::new(3, size(2), 5);
		assert_eq!(summary, PageSummary { first: 5, last: 5, total: 5 });
		assert_eq!(summary.to_string(), "Showing 5 to 5 of 5 results");
		assert_eq!(PageSummary::new(1, size(10), 42).to_string(), "Showing 1 to 10 of 42 results");
	}

	#[test]
	fn test_page_links() {
		assert_eq!(page_links(1), vec![1]);
		assert_eq!(page_links(3), vec![1, 2, 3]);
		assert_eq!(page_links(12), vec![1, 2, 3, 4, 5]);
	}
}
