#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::StatusCode;
use common::{get, item_ids, post_json, test_app};
use serde_json::json;

#[tokio::test]
async fn test_fresh_listing_returns_first_twenty() {
    let app = test_app(100);
    let (status, body) = get(&app, "/api/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 100);
    assert_eq!(item_ids(&body), (1..=20).collect::<Vec<_>>());
    assert_eq!(body["items"][0], json!({"id": 1, "value": "Item 1", "selected": false}));
}

#[tokio::test]
async fn test_full_dataset_fresh_start() {
    let app = test_app(itemlist_daemon::DEFAULT_ITEM_COUNT);
    let (_, state) = get(&app, "/api/state").await;
    assert_eq!(state, json!({"selectedItems": [], "sortOrder": []}));

    let (status, body) = get(&app, "/api/items?page=0&limit=20&search=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1_000_000);
    assert_eq!(item_ids(&body), (1..=20).collect::<Vec<_>>());
    assert!(body["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|item| item["selected"] == false));
}

#[tokio::test]
async fn test_pagination_last_partial_page() {
    let app = test_app(45);
    let (_, body) = get(&app, "/api/items?page=2&limit=20").await;
    assert_eq!(item_ids(&body), (41..=45).collect::<Vec<_>>());
    assert_eq!(body["total"], 45);
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let app = test_app(45);
    let (status, body) = get(&app, "/api/items?page=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["total"], 45);
}

#[tokio::test]
async fn test_malformed_numbers_use_defaults() {
    let app = test_app(100);
    let (_, expected) = get(&app, "/api/items").await;
    for uri in [
        "/api/items?page=abc&limit=xyz",
        "/api/items?page=-1&limit=-3",
        "/api/items?limit=0",
        "/api/items?page=&limit=",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, expected, "{uri}");
    }
}

#[tokio::test]
async fn test_duplicate_query_keys_keep_first_value() {
    let app = test_app(100);
    let (status, body) = get(&app, "/api/items?page=1&page=2&search=item%209").await;
    assert_eq!(status, StatusCode::OK);
    // 9, 90..=99 filtered; page 1 of 20 is past the end
    assert_eq!(body["total"], 11);
    assert_eq!(body["items"], json!([]));

    let (_, body) = get(&app, "/api/items?limit=3&limit=50&search=item%209").await;
    assert_eq!(item_ids(&body), vec![9, 90, 91]);
}

#[tokio::test]
async fn test_malformed_param_keeps_other_params() {
    let app = test_app(100);
    let (_, body) = get(&app, "/api/items?page=abc&limit=2&search=ITEM%205").await;
    assert_eq!(body["total"], 11);
    assert_eq!(item_ids(&body), vec![5, 50]);
}

#[tokio::test]
async fn test_page_beyond_usize_is_empty() {
    let app = test_app(100);
    let (status, body) = get(&app, "/api/items?page=99999999999999999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["total"], 100);
}

#[tokio::test]
async fn test_limit_beyond_usize_returns_everything() {
    let app = test_app(30);
    let (_, body) = get(&app, "/api/items?limit=99999999999999999999").await;
    assert_eq!(item_ids(&body), (1..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_search_filters_case_insensitively() {
    let app = test_app(100);
    let (_, body) = get(&app, "/api/items?search=ITEM%209&limit=50").await;
    // 9, 90..=99
    assert_eq!(body["total"], 11);
    assert_eq!(item_ids(&body)[..3], [9, 90, 91]);
}

#[tokio::test]
async fn test_sort_order_then_listing() {
    let app = test_app(10);
    let (status, body) = post_json(&app, "/api/sort", r#"{"sortedIds":[5,3]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "sortOrder": [5, 3]}));

    let (_, body) = get(&app, "/api/items?limit=10").await;
    assert_eq!(item_ids(&body), vec![5, 3, 1, 2, 4, 6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_sort_order_posted_twice_is_idempotent() {
    let app = test_app(30);
    post_json(&app, "/api/sort", r#"{"sortedIds":[30,1,15]}"#).await;
    let (_, once) = get(&app, "/api/items?limit=30").await;
    post_json(&app, "/api/sort", r#"{"sortedIds":[30,1,15]}"#).await;
    let (_, twice) = get(&app, "/api/items?limit=30").await;
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_selection_marks_items() {
    let app = test_app(100);
    let (status, body) = post_json(&app, "/api/selected", r#"{"selectedIds":[7,42]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "selectedItems": [7, 42]}));

    let (_, state) = get(&app, "/api/state").await;
    assert_eq!(state["selectedItems"], json!([7, 42]));

    let (_, body) = get(&app, "/api/items?limit=100").await;
    for item in body["items"].as_array().unwrap() {
        let id = item["id"].as_i64().unwrap();
        assert_eq!(item["selected"], json!(id == 7 || id == 42), "id {id}");
    }
}

#[tokio::test]
async fn test_state_keeps_duplicates_and_unknown_ids() {
    let app = test_app(10);
    post_json(&app, "/api/selected", r#"{"selectedIds":[3,3,999,-4]}"#).await;
    post_json(&app, "/api/sort", r#"{"sortedIds":[2,2]}"#).await;
    let (_, state) = get(&app, "/api/state").await;
    assert_eq!(
        state,
        json!({"selectedItems": [3, 3, 999, -4], "sortOrder": [2, 2]})
    );
}
