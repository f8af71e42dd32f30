//! Values providers
//!
//! A table does not fetch its items itself: it is handed a [`Values`]
//! provider at construction time and asks it for the row items on every
//! update.

use std::collections::BTreeMap;

/// Source of the items rendered as table rows
pub trait Values<R> {
	/// Returns the items in their natural order
	fn values(&self) -> Vec<R>;
}

/// Items that have a name, used by name, link and selection columns
pub trait Named {
	/// Returns the name of this item
	fn name(&self) -> &str;
}

impl Named for String {
	fn name(&self) -> &str {
		self
	}
}

impl Named for &str {
	fn name(&self) -> &str {
		self
	}
}

/// A container of items
pub trait Container {
	/// The type of the contained items
	type Item;

	/// Returns the contained items in container order
	fn items(&self) -> Vec<Self::Item>;
}

impl<K, V> Container for BTreeMap<K, V>
where
	V: Clone,
{
	type Item = V;

	fn items(&self) -> Vec<V> {
		self.values().cloned().collect()
	}
}

/// Values of a sequence context
///
/// # Example
///
/// ```rust
/// use tabula_tables::values::{SequenceValues, Values};
///
/// let values = SequenceValues::new(vec!["first", "second"]);
/// assert_eq!(values.values(), vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceValues<R> {
	sequence: Vec<R>,
}

impl<R> SequenceValues<R> {
	/// Creates a values provider over `sequence`
	pub fn new(sequence: Vec<R>) -> Self {
		Self { sequence }
	}
}

impl<R: Clone> Values<R> for SequenceValues<R> {
	fn values(&self) -> Vec<R> {
		self.sequence.clone()
	}
}

/// Values of a container context
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use tabula_tables::values::{ContainerValues, Values};
///
/// let mut container = BTreeMap::new();
/// container.insert("second", 2);
/// container.insert("first", 1);
///
/// let values = ContainerValues::new(container);
/// assert_eq!(values.values(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContainerValues<C> {
	container: C,
}

impl<C> ContainerValues<C> {
	/// Creates a values provider over `container`
	pub fn new(container: C) -> Self {
		Self { container }
	}
}

impl<C: Container> Values<C::Item> for ContainerValues<C> {
	fn values(&self) -> Vec<C::Item> {
		self.container.items()
	}
}
