//! Error types for batching operations.

use thiserror::Error;

/// Errors raised when a batch or a batch window is built from invalid input.
///
/// These are precondition violations: they are reported before any output is
/// produced and callers are expected to validate their input instead of
/// recovering from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
	/// The page list handed to the window reducer was empty.
	#[error("Cannot reduce an empty page list")]
	EmptyPageList,

	/// The current page index does not address a page of the list.
	#[error("Current page index {current} is out of range for {len} pages")]
	CurrentOutOfRange {
		/// Requested current index.
		current: usize,
		/// Number of pages in the list.
		len: usize,
	},

	/// A batch was requested with a size of zero.
	#[error("Batch size must be greater than zero")]
	InvalidSize,

	/// The batch start lies behind the last item.
	#[error("Batch start {start} is out of range for {len} items")]
	StartOutOfRange {
		/// Requested start offset.
		start: usize,
		/// Number of items in the sequence.
		len: usize,
	},
}

/// Result type alias for batching operations.
pub type Result<T> = std::result::Result<T, BatchError>;
