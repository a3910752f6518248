//! Domain layer for the shopping list plugin.
//!
//! Holds the pieces with actual rules, independent of Zellij and of rendering:
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The item type and the prepend-only item store
//! - [`filter`]: Case-insensitive substring filtering and match ranges
//!
//! # Examples
//!
//! ```
//! use shopping_list::domain::{filter_items, ItemStore};
//!
//! let mut store = ItemStore::new();
//! store.add("Milk");
//! store.add("Eggs");
//! assert_eq!(filter_items(store.all(), "milk").len(), 1);
//! ```

pub mod error;
pub mod filter;
pub mod item;

pub use error::{Result, ShoppingListError};
pub use filter::{filter_items, match_ranges};
pub use item::{Item, ItemStore};
