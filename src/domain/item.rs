//! Shopping list items and the store that owns them.
//!
//! An [`Item`] is nothing more than the label the user typed. It has no
//! identity beyond its text and its position, so two items with the same text
//! are two separate entries. The [`ItemStore`] keeps items newest first and only
//! grows: there is no removal, editing or reordering.

use std::fmt;

/// A single shopping list entry.
///
/// The label is stored exactly as typed, including surrounding whitespace.
/// Construction goes through [`Item::parse`], which refuses blank labels, so a
/// value of this type is always non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    text: String,
}

impl Item {
    /// Builds an item from user text, or `None` if the text is empty or
    /// whitespace only.
    ///
    /// # Examples
    ///
    /// ```
    /// use shopping_list::Item;
    ///
    /// assert_eq!(Item::parse(" Milk ").unwrap().text(), " Milk ");
    /// assert!(Item::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }

    /// The label as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered collection of items, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts `text` at the front of the list.
    ///
    /// Blank text is rejected without complaint: the store is left untouched
    /// and `false` is returned. The flag is not an error, it only lets the
    /// caller decide whether the draft field should be cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use shopping_list::ItemStore;
    ///
    /// let mut store = ItemStore::new();
    /// assert!(store.add("Milk"));
    /// assert!(store.add("Eggs"));
    /// assert!(!store.add("  "));
    ///
    /// let labels: Vec<&str> = store.iter().map(|item| item.text()).collect();
    /// assert_eq!(labels, ["Eggs", "Milk"]);
    /// ```
    pub fn add(&mut self, text: &str) -> bool {
        match Item::parse(text) {
            Some(item) => {
                self.items.insert(0, item);
                tracing::debug!(total_items = self.items.len(), "item added");
                true
            }
            None => {
                tracing::debug!(text_len = text.len(), "blank item rejected");
                false
            }
        }
    }

    /// Read-only view of every item in display order.
    #[must_use]
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ItemStore {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
