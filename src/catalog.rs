//! The static item collection served by the daemon.
//!
//! Items are generated once at startup and never change afterwards, so the
//! collection is shared across requests without any locking.

use serde::Serialize;

/// Number of items generated when no override is configured.
pub const DEFAULT_ITEM_COUNT: usize = 1_000_000;

/// Identifier of an item, and of every id carried in selection/sort state.
pub type ItemId = i64;

/// One immutable record of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub value: String,
}

impl Item {
    /// Build the item for `id`; its value is derived from the id alone.
    #[must_use]
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            value: format!("Item {id}"),
        }
    }

    /// Whether this item's value contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased (see [`fold_search`]).
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.value, needle)
    }
}

/// The full, id-ordered item collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Generate `count` items with dense ids `1..=count`.
    #[must_use]
    pub fn generate(count: usize) -> Self {
        let items = (1..=count)
            .map(|n| Item::new(ItemId::try_from(n).unwrap_or(ItemId::MAX)))
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
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

/// Lowercase a search term once so it can be matched against many items.
#[must_use]
pub fn fold_search(search: &str) -> String {
    search.to_lowercase()
}

/// Case-insensitive substring test against an already-lowercased needle.
///
/// ASCII needles are compared byte-wise without allocating; anything else
/// falls back to lowercasing the haystack.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if needle_lower.is_ascii() {
        let needle = needle_lower.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
