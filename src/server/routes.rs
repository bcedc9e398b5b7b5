use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use tracing::debug;

use super::dto::{SelectedRequest, SelectedResponse, SortRequest, SortResponse};
use super::structured_error::ApiError;
use crate::query::ListQuery;
use crate::service::{ItemPage, ItemService};
use crate::state::ViewState;

/// `GET /api/items`. Each parameter is coerced on its own, so one bad value
/// only resets that parameter.
pub async fn list_items(
    State(service): State<Arc<ItemService>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ItemPage> {
    let query = match query {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(e) => {
            debug!("Unparseable query string, using defaults: {e}");
            ListQuery::default()
        }
    };
    Json(service.list_items(&query.into_params()).await)
}

/// `POST /api/selected`
pub async fn set_selected(
    State(service): State<Arc<ItemService>>,
    payload: Result<Json<SelectedRequest>, JsonRejection>,
) -> Result<Json<SelectedResponse>, ApiError> {
    let Json(req) = payload?;
    let selected_items = service.set_selected(req.selected_ids).await;
    Ok(Json(SelectedResponse {
        success: true,
        selected_items,
    }))
}

/// `POST /api/sort`
pub async fn set_sort_order(
    State(service): State<Arc<ItemService>>,
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<SortResponse>, ApiError> {
    let Json(req) = payload?;
    let sort_order = service.set_sort_order(req.sorted_ids).await;
    Ok(Json(SortResponse {
        success: true,
        sort_order,
    }))
}

/// `GET /api/state`
pub async fn get_state(State(service): State<Arc<ItemService>>) -> Json<ViewState> {
    Json(service.get_state().await)
}
