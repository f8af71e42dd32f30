//! Fixed-size batches over an ordered item sequence.

use crate::error::{BatchError, Result};
use serde::{Deserialize, Serialize};

/// A single batch (page) of a paginated sequence.
///
/// Pages are plain values: two pages compare equal when they describe the
/// same slice of the same paginated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
	/// Zero-based position of this page in the page list
	pub index: usize,
	/// Offset of the first item of this page in the whole sequence
	pub start: usize,
	/// Nominal batch size used to cut the sequence
	pub size: usize,
	/// Number of items actually on this page (the last page may be short)
	pub len: usize,
	/// Number of pages of the whole paginated sequence
	pub total: usize,
}

impl Page {
	/// Returns the 1-based page number shown to users
	///
	/// # Examples
	///
	/// ```
	/// use tabula_batching::Page;
	///
	/// let page = Page { index: 4, start: 40, size: 10, len: 10, total: 9 };
	/// assert_eq!(page.number(), 5);
	/// ```
	pub fn number(&self) -> usize {
		self.index + 1
	}

	/// Returns the offset one past the last item of this page
	pub fn end(&self) -> usize {
		self.start + self.len
	}

	/// Returns true if this is the first page
	pub fn is_first(&self) -> bool {
		self.index == 0
	}

	/// Returns true if this is the last page
	pub fn is_last(&self) -> bool {
		self.index + 1 == self.total
	}
}

/// Builds the full page list for a sequence of `len` items cut into `size`
/// sized batches.
///
/// An empty sequence still has one (empty) page so that a current page always
/// exists.
///
/// # Examples
///
/// ```
/// use tabula_batching::batch::page_list;
///
/// let pages = page_list(25, 10);
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[2].start, 20);
/// assert_eq!(pages[2].len, 5);
/// ```
pub fn page_list(len: usize, size: usize) -> Vec<Page> {
	let size = size.max(1);
	let total = if len == 0 { 1 } else { len.div_ceil(size) };
	(0..total)
		.map(|index| {
			let start = index * size;
			Page {
				index,
				start,
				size,
				len: size.min(len.saturating_sub(start)),
				total,
			}
		})
		.collect()
}

/// An ordered sequence cut into fixed-size batches with one current batch.
///
/// # Example
///
/// ```rust
/// use tabula_batching::Batch;
///
/// let items: Vec<i32> = (1..=25).collect();
/// let batch = Batch::new(items, 10, 10).unwrap();
///
/// assert_eq!(batch.index(), 1);
/// assert_eq!(batch.total(), 3);
/// assert_eq!(batch.items(), &(11..=20).collect::<Vec<_>>()[..]);
/// ```
#[derive(Debug, Clone)]
pub struct Batch<T> {
	sequence: Vec<T>,
	size: usize,
	pages: Vec<Page>,
	index: usize,
}

impl<T> Batch<T> {
	/// Creates a batch whose current page starts at `start`
	///
	/// `start` is aligned down to a page boundary.
	///
	/// # Errors
	///
	/// Returns [`BatchError::InvalidSize`] for a zero `size` and
	/// [`BatchError::StartOutOfRange`] when `start` lies behind the last item.
	/// An empty sequence only accepts a `start` of 0.
	pub fn new(sequence: Vec<T>, start: usize, size: usize) -> Result<Self> {
		if size == 0 {
			return Err(BatchError::InvalidSize);
		}
		let len = sequence.len();
		if start >= len.max(1) {
			return Err(BatchError::StartOutOfRange { start, len });
		}
		let aligned = start - start % size;
		if aligned != start {
			tracing::debug!(start, aligned, size, "aligned batch start to page boundary");
		}
		Ok(Self {
			pages: page_list(len, size),
			index: aligned / size,
			sequence,
			size,
		})
	}

	/// Creates a batch, moving an out-of-range `start` onto the last page
	///
	/// # Errors
	///
	/// Returns [`BatchError::InvalidSize`] for a zero `size`.
	pub fn clamped(sequence: Vec<T>, start: usize, size: usize) -> Result<Self> {
		if size == 0 {
			return Err(BatchError::InvalidSize);
		}
		let len = sequence.len();
		let start = if start >= len.max(1) {
			let last_start = len.saturating_sub(1) / size * size;
			tracing::warn!(start, last_start, len, "batch start out of range, using last page");
			last_start
		} else {
			start
		};
		Self::new(sequence, start, size)
	}

	/// Returns the items of the current page
	pub fn items(&self) -> &[T] {
		let current = self.current();
		&self.sequence[current.start..current.end()]
	}

	/// Returns the whole batched sequence
	pub fn sequence(&self) -> &[T] {
		&self.sequence
	}

	/// Consumes the batch and returns the whole sequence
	pub fn into_sequence(self) -> Vec<T> {
		self.sequence
	}

	/// Returns the current page
	pub fn current(&self) -> Page {
		self.pages[self.index]
	}

	/// Returns the full page list
	pub fn pages(&self) -> &[Page] {
		&self.pages
	}

	/// Returns the zero-based index of the current page
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns the offset of the first item on the current page
	pub fn start(&self) -> usize {
		self.current().start
	}

	/// Returns the nominal batch size
	pub fn size(&self) -> usize {
		self.size
	}

	/// Returns the number of pages
	pub fn total(&self) -> usize {
		self.pages.len()
	}

	/// Returns the number of items on the current page
	pub fn len(&self) -> usize {
		self.current().len
	}

	/// Returns true if the current page holds no items
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the page after the current one, if any
	pub fn next(&self) -> Option<Page> {
		self.pages.get(self.index + 1).copied()
	}

	/// Returns the page before the current one, if any
	pub fn previous(&self) -> Option<Page> {
		self.index
			.checked_sub(1)
			.and_then(|index| self.pages.get(index).copied())
	}

	/// Returns the first item of the current page
	pub fn first_element(&self) -> Option<&T> {
		self.items().first()
	}

	/// Returns the last item of the current page
	pub fn last_element(&self) -> Option<&T> {
		self.items().last()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 10, 1)]
	#[case(1, 10, 1)]
	#[case(10, 10, 1)]
	#[case(11, 10, 2)]
	#[case(1000, 10, 100)]
	fn test_page_list_total(#[case] len: usize, #[case] size: usize, #[case] total: usize) {
		let pages = page_list(len, size);
		assert_eq!(pages.len(), total);
		assert!(pages.iter().all(|page| page.total == total));
	}

	#[test]
	fn test_page_list_indices_are_contiguous() {
		let pages = page_list(95, 10);
		for (position, page) in pages.iter().enumerate() {
			assert_eq!(page.index, position);
			assert_eq!(page.start, position * 10);
		}
		assert_eq!(pages.last().unwrap().len, 5);
	}

	#[test]
	fn test_batch_current_page_items() {
		let batch = Batch::new((0..30).collect::<Vec<i32>>(), 20, 10).unwrap();
		assert_eq!(batch.index(), 2);
		assert_eq!(batch.items(), &(20..30).collect::<Vec<_>>()[..]);
		assert_eq!(batch.first_element(), Some(&20));
		assert_eq!(batch.last_element(), Some(&29));
		assert!(batch.next().is_none());
		assert_eq!(batch.previous().map(|page| page.index), Some(1));
	}

	#[test]
	fn test_batch_aligns_start() {
		let batch = Batch::new((0..30).collect::<Vec<i32>>(), 13, 10).unwrap();
		assert_eq!(batch.index(), 1);
		assert_eq!(batch.start(), 10);
	}

	#[test]
	fn test_batch_short_last_page() {
		let batch = Batch::new((0..25).collect::<Vec<i32>>(), 20, 10).unwrap();
		assert_eq!(batch.len(), 5);
		assert_eq!(batch.size(), 10);
		assert!(batch.current().is_last());
	}

	#[test]
	fn test_empty_batch_rejects_non_zero_start() {
		let result = Batch::<i32>::new(Vec::new(), 20, 10);
		assert_eq!(
			result.unwrap_err(),
			BatchError::StartOutOfRange { start: 20, len: 0 }
		);
	}

	#[test]
	fn test_clamped_empty_batch_uses_first_page() {
		let batch = Batch::<i32>::clamped(Vec::new(), 20, 10).unwrap();
		assert_eq!(batch.index(), 0);
		assert_eq!(batch.current().start, 0);
		assert!(batch.items().is_empty());
	}

	#[test]
	fn test_batch_rejects_zero_size() {
		let result = Batch::new(vec![1, 2, 3], 0, 0);
		assert_eq!(result.unwrap_err(), BatchError::InvalidSize);
	}

	#[test]
	fn test_batch_rejects_start_out_of_range() {
		let result = Batch::new(vec![1, 2, 3], 3, 2);
		assert_eq!(
			result.unwrap_err(),
			BatchError::StartOutOfRange { start: 3, len: 3 }
		);
	}

	#[test]
	fn test_batch_clamped_uses_last_page() {
		let batch = Batch::clamped((0..25).collect::<Vec<i32>>(), 500, 10).unwrap();
		assert_eq!(batch.index(), 2);
		assert_eq!(batch.items(), &[20, 21, 22, 23, 24]);
	}

	#[test]
	fn test_page_serialization() {
		let page = page_list(25, 10)[2];
		let json = serde_json::to_value(page).unwrap();
		assert_eq!(
			json,
			serde_json::json!({ "index": 2, "start": 20, "size": 10, "len": 5, "total": 3 })
		);
		let parsed: Page = serde_json::from_value(json).unwrap();
		assert_eq!(parsed, page);
	}

	#[test]
	fn test_empty_batch_has_one_page() {
		let batch: Batch<i32> = Batch::new(Vec::new(), 0, 10).unwrap();
		assert_eq!(batch.total(), 1);
		assert!(batch.is_empty());
		assert!(batch.current().is_first());
		assert!(batch.current().is_last());
	}
}
