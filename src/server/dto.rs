//! Wire shapes for the JSON endpoints.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;

/// `POST /api/selected` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRequest {
    pub selected_ids: Vec<ItemId>,
}

/// `POST /api/selected` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedResponse {
    pub success: bool,
    pub selected_items: Vec<ItemId>,
}

/// `POST /api/sort` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    pub sorted_ids: Vec<ItemId>,
}

/// `POST /api/sort` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResponse {
    pub success: bool,
    pub sort_order: Vec<ItemId>,
}
