//! Read-side queries over the in-memory note collection.
//!
//! # Responsibility
//! - Compute the filtered, sorted, paginated visible set.
//!
//! # Invariants
//! - Query code never mutates notes or categories.

pub mod view;

pub use view::{clamp_page, visible, FilterOptions, Page, ITEMS_PER_PAGE};
