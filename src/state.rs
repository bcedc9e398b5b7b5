use serde::Serialize;

use crate::catalog::ItemId;

/// Server-held UI state: the selected ids and the custom display order.
///
/// Both sequences are stored exactly as the client sent them. Duplicates and
/// ids that match no item are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(rename = "selectedItems")]
    pub selected: Vec<ItemId>,
    pub sort_order: Vec<ItemId>,
}

impl ViewState {
    /// Replace the selection wholesale and return the stored sequence.
    pub fn replace_selected(&mut self, ids: Vec<ItemId>) -> &[ItemId] {
        self.selected = ids;
        &self.selected
    }

    /// Replace the sort order wholesale and return the stored sequence.
    pub fn replace_sort_order(&mut self, ids: Vec<ItemId>) -> &[ItemId] {
        self.sort_order = ids;
        &self.sort_order
    }
}
