//! # Tabula Batching
//!
//! Batching (pagination) primitives for Tabula tables.
//!
//! ## Components
//!
//! - **Batch**: cuts an ordered sequence into fixed-size pages and tracks the
//!   current one
//! - **Page**: value describing one page (`index`, `start`, `size`, `total`)
//! - **Window reduction**: collapses a long page list into a bounded
//!   navigation strip with elision markers
//!
//! ## Example
//!
//! ```rust
//! use tabula_batching::{Batch, WindowItem, first_neighbours_last};
//!
//! let items: Vec<u32> = (0..1000).collect();
//! let batch = Batch::new(items, 40, 10).unwrap();
//!
//! let window = first_neighbours_last(batch.pages(), batch.index(), 2, 2).unwrap();
//! assert_eq!(window.len(), 9);
//! assert_eq!(window[1], WindowItem::Elision);
//! ```

pub mod batch;
pub mod error;
pub mod window;

pub use batch::{Batch, Page};
pub use error::{BatchError, Result};
pub use window::{WindowItem, first_neighbours_last, fits_window};
