//! Search filtering over the item list.
//!
//! Matching is plain case-insensitive substring containment: no tokenizing,
//! no fuzzy scoring, no ranking. A blank query matches everything. The
//! functions here are pure; the session decides when to call them again.

use super::item::Item;

/// Returns `true` when `query` is blank.
#[must_use]
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive containment test used by [`filter_items`].
///
/// A blank query matches every text. A non-blank query is used verbatim, so
/// trailing spaces in the query are part of what must be found.
///
/// # Examples
///
/// ```
/// use shopping_list::domain::filter::matches;
///
/// assert!(matches("Eggs", "egg"));
/// assert!(matches("Eggs", "  "));
/// assert!(!matches("Milk", "egg"));
/// ```
#[must_use]
pub fn matches(text: &str, query: &str) -> bool {
    if is_blank_query(query) {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Projects `items` through `query`, keeping the original relative order.
///
/// # Examples
///
/// ```
/// use shopping_list::{filter_items, ItemStore};
///
/// let mut store = ItemStore::new();
/// store.add("Milk");
/// store.add("Eggs");
///
/// let found = filter_items(store.all(), "EGG");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].text(), "Eggs");
/// assert_eq!(filter_items(store.all(), "").len(), 2);
/// ```
#[must_use]
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    if is_blank_query(query) {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Character ranges of every non-overlapping occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` character indices with an exclusive end, ready for
/// the renderer's highlighter. Returns nothing for a blank query.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if is_blank_query(query) {
        return Vec::new();
    }

    // Fold the whole string like `matches` does (final sigma depends on
    // context), then map each folded char back to the char it came from. Every
    // char folds to as many chars in context as it does alone.
    let lowered = text.to_lowercase();
    let mut folded_chars = lowered.chars();
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (idx, c) in text.chars().enumerate() {
        for _ in 0..c.to_lowercase().count() {
            let Some(lower) = folded_chars.next() else {
                break;
            };
            folded.push(lower);
            origin.push(idx);
        }
    }
    let needle: Vec<char> = query.to_lowercase().chars().collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        if folded[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos];
            let end = origin[pos + needle.len() - 1] + 1;
            match ranges.last_mut() {
                Some((_, prev_end)) if *prev_end >= start => *prev_end = end,
                _ => ranges.push((start, end)),
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStore;

    fn store_of(labels: &[&str]) -> ItemStore {
        let mut store = ItemStore::new();
        for label in labels.iter().rev() {
            store.add(label);
        }
        store
    }

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::text).collect()
    }

    #[test]
    fn blank_query_is_identity() {
        let store = store_of(&["Eggs", "Milk", "Eggplant"]);
        assert_eq!(filter_items(store.all(), ""), store.all());
        assert_eq!(filter_items(store.all(), "   "), store.all());
    }

    #[test]
    fn filter_is_case_insensitive_and_ordered() {
        let store = store_of(&["Eggs", "Milk", "eggplant", "Green EGG dye"]);
        let found = filter_items(store.all(), "eGg");
        assert_eq!(texts(&found), ["Eggs", "eggplant", "Green EGG dye"]);
    }

    #[test]
    fn filter_is_exactly_the_matching_subsequence() {
        let store = store_of(&["Apple", "banana", "Pineapple", "grape", "APPLESAUCE"]);
        let query = "apple";
        let found = filter_items(store.all(), query);

        let expected: Vec<&Item> = store
            .iter()
            .filter(|item| item.text().to_lowercase().contains(&query.to_lowercase()))
            .collect();
        assert_eq!(found.iter().collect::<Vec<_>>(), expected);

        for item in store.iter() {
            assert_eq!(found.contains(item), matches(item.text(), query));
        }
    }

    #[test]
    fn non_blank_query_is_not_trimmed() {
        let store = store_of(&["egg", "egg white"]);
        assert_eq!(texts(&filter_items(store.all(), "egg ")), ["egg white"]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let store = store_of(&["Milk"]);
        assert!(filter_items(store.all(), "xyz").is_empty());
    }

    #[test]
    fn match_ranges_finds_each_occurrence() {
        // Adjacent hits collapse into one highlighted run.
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 5)]);
        assert_eq!(match_ranges("Eggs and eggs", "EGG"), vec![(0, 3), (9, 12)]);
        assert!(match_ranges("Milk", "").is_empty());
        assert!(match_ranges("Milk", "tea").is_empty());
    }

    #[test]
    fn match_ranges_uses_char_indices() {
        assert_eq!(match_ranges("Crème brûlée", "BRÛ"), vec![(6, 9)]);
    }

    #[test]
    fn highlights_agree_with_the_filter_on_final_sigma() {
        let store = store_of(&["ΟΔΟΣ"]);
        assert_eq!(filter_items(store.all(), "ς").len(), 1);
        assert_eq!(match_ranges("ΟΔΟΣ", "ς"), vec![(3, 4)]);
        assert_eq!(match_ranges("ΣΟΣ", "σο"), vec![(0, 2)]);
    }
}
