use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::catalog::{fold_search, Catalog, Item, ItemId};
use crate::metrics::OperationTimer;
use crate::query::ListParams;
use crate::state::ViewState;

/// An item as returned by a listing, annotated with its selection status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedItem {
    pub id: ItemId,
    pub value: String,
    pub selected: bool,
}

/// One page of a listing plus the size of the filtered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPage {
    pub items: Vec<ListedItem>,
    pub total: usize,
}

/// Serves the catalog and owns the selection/sort state.
///
/// The catalog is shared read-only. Both state sequences sit behind a single
/// mutex and every write replaces a whole sequence.
pub struct ItemService {
    catalog: Arc<Catalog>,
    state: Mutex<ViewState>,
}

impl ItemService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Filter, order and paginate the catalog.
    ///
    /// `total` counts the filtered items before pagination. A page past the
    /// end yields an empty `items` list.
    pub async fn list_items(&self, params: &ListParams) -> ItemPage {
        let _timer = OperationTimer::new("list_items");
        let snapshot = self.state.lock().await.clone();

        let start = params.page.saturating_mul(params.limit);
        let (total, window) = if params.search.is_empty() && snapshot.sort_order.is_empty() {
            let all = self.catalog.items();
            let window: Vec<&Item> = all
                .get(start..)
                .unwrap_or_default()
                .iter()
                .take(params.limit)
                .collect();
            (all.len(), window)
        } else {
            let filtered = filter_items(self.catalog.items(), &params.search);
            let total = filtered.len();
            let window: Vec<&Item> = apply_sort_order(filtered, &snapshot.sort_order)
                .into_iter()
                .skip(start)
                .take(params.limit)
                .collect();
            (total, window)
        };

        let selected: HashSet<ItemId> = snapshot.selected.iter().copied().collect();
        let items: Vec<ListedItem> = window
            .into_iter()
            .map(|item| ListedItem {
                id: item.id,
                value: item.value.clone(),
                selected: selected.contains(&item.id),
            })
            .collect();

        debug!(
            page = params.page,
            limit = params.limit,
            search = %params.search,
            total,
            returned = items.len(),
            "Listed items"
        );
        ItemPage { items, total }
    }

    /// Replace the selection and return the stored sequence.
    pub async fn set_selected(&self, ids: Vec<ItemId>) -> Vec<ItemId> {
        let _timer = OperationTimer::new("set_selected");
        let mut state = self.state.lock().await;
        let stored = state.replace_selected(ids).to_vec();
        debug!(count = stored.len(), "Selection replaced");
        stored
    }

    /// Replace the sort order and return the stored sequence.
    pub async fn set_sort_order(&self, ids: Vec<ItemId>) -> Vec<ItemId> {
        let _timer = OperationTimer::new("set_sort_order");
        let mut state = self.state.lock().await;
        let stored = state.replace_sort_order(ids).to_vec();
        debug!(count = stored.len(), "Sort order replaced");
        stored
    }

    /// Current selection and sort order, verbatim.
    pub async fn get_state(&self) -> ViewState {
        let _timer = OperationTimer::new("get_state");
        self.state.lock().await.clone()
    }
}

/// Items whose value contains `search`, ignoring case. An empty search keeps everything.
fn filter_items<'a>(items: &'a [Item], search: &str) -> Vec<&'a Item> {
    if search.is_empty() {
        return items.iter().collect();
    }
    let needle = fold_search(search);
    items.iter().filter(|item| item.matches(&needle)).collect()
}

/// Move ids listed in `sort_order` to the front, in list position order.
///
/// `items` must be in ascending id order; unlisted items keep that order
/// after the listed ones. A repeated id takes its last position.
fn apply_sort_order<'a>(items: Vec<&'a Item>, sort_order: &[ItemId]) -> Vec<&'a Item> {
    if sort_order.is_empty() {
        return items;
    }
    let positions: HashMap<ItemId, usize> = sort_order
        .iter()
        .enumerate()
        .map(|(position, id)| (*id, position))
        .collect();

    let (mut ranked, rest): (Vec<&Item>, Vec<&Item>) = items
        .into_iter()
        .partition(|item| positions.contains_key(&item.id));
    ranked.sort_by_key(|item| positions.get(&item.id).copied().unwrap_or(usize::MAX));
    ranked.extend(rest);
    ranked
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
