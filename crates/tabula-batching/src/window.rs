//! Batch window reduction
//!
//! A long page list is collapsed into a bounded navigation strip: the first
//! page, a window of pages around the current one, the last page, and elision
//! markers where pages were skipped.
//!
//! For 100 pages, a current index of 8 and a window of 3 on each side the
//! strip looks like (1-based labels):
//!
//! ```text
//! [1] ... [6][7][8][*9*][10][11][12] ... [100]
//! ```

use crate::batch::Page;
use crate::error::{BatchError, Result};
use serde::{Deserialize, Serialize};

/// One element of a reduced batch window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowItem {
	/// A page that gets its own link
	Page(Page),
	/// Placeholder for one or more omitted pages
	Elision,
}

impl WindowItem {
	/// Returns the page of this item, `None` for an elision marker
	pub fn page(&self) -> Option<&Page> {
		match self {
			Self::Page(page) => Some(page),
			Self::Elision => None,
		}
	}

	/// Returns true for an elision marker
	pub fn is_elision(&self) -> bool {
		matches!(self, Self::Elision)
	}
}

impl From<Page> for WindowItem {
	fn from(page: Page) -> Self {
		Self::Page(page)
	}
}

/// Returns the largest page count that is shown without reduction
///
/// The additional 3 accounts for the first, the current and the last page.
pub fn full_window_len(prev: usize, next: usize) -> usize {
	prev.saturating_add(next).saturating_add(3)
}

/// Returns true if `total` pages fit into a window of `prev` + `next`
/// neighbours and can be shown in full.
pub fn fits_window(total: usize, prev: usize, next: usize) -> bool {
	total <= full_window_len(prev, next)
}

/// Reduces `pages` to the first page, `prev` pages before `current`, the
/// current page, `next` pages after it and the last page.
///
/// An [`WindowItem::Elision`] stands in for every run of omitted pages.
/// Windows reaching past either end of the list are truncated silently. When
/// the window already covers every page the full list is returned.
///
/// # Errors
///
/// Returns [`BatchError::EmptyPageList`] for an empty `pages` slice and
/// [`BatchError::CurrentOutOfRange`] when `current` is not a valid index.
///
/// # Examples
///
/// ```
/// use tabula_batching::batch::page_list;
/// use tabula_batching::window::{first_neighbours_last, WindowItem};
///
/// let pages = page_list(1000, 10);
/// let window = first_neighbours_last(&pages, 4, 2, 2).unwrap();
/// let indices: Vec<Option<usize>> = window
///     .iter()
///     .map(|item| item.page().map(|page| page.index))
///     .collect();
///
/// assert_eq!(
///     indices,
///     vec![Some(0), None, Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(99)]
/// );
/// ```
pub fn first_neighbours_last(
	pages: &[Page],
	current: usize,
	prev: usize,
	next: usize,
) -> Result<Vec<WindowItem>> {
	if pages.is_empty() {
		return Err(BatchError::EmptyPageList);
	}
	let last = pages.len() - 1;
	if current > last {
		return Err(BatchError::CurrentOutOfRange {
			current,
			len: pages.len(),
		});
	}

	// Page 0 is always shown on its own, so the window before `current`
	// starts at page 1 at the earliest.
	let prev_from = current.saturating_sub(prev).max(1);
	let next_start = current + 1;
	let next_stop = next_start.saturating_add(next);

	let mut window = Vec::with_capacity(full_window_len(prev, next).min(pages.len()) + 2);

	if current > 0 {
		window.push(WindowItem::Page(pages[0]));
	}
	if current.saturating_sub(prev) > 1 {
		window.push(WindowItem::Elision);
	}
	window.extend(pages[prev_from.min(current)..current].iter().copied().map(WindowItem::Page));

	window.push(WindowItem::Page(pages[current]));

	let next_end = next_stop.min(last);
	if next_start < next_end {
		window.extend(pages[next_start..next_end].iter().copied().map(WindowItem::Page));
	}
	if next_stop < last {
		window.push(WindowItem::Elision);
	}
	if current < last {
		window.push(WindowItem::Page(pages[last]));
	}

	tracing::debug!(
		current,
		prev,
		next,
		total = pages.len(),
		shown = window.len(),
		"reduced batch window"
	);
	Ok(window)
}
