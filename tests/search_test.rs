//! Search endpoint tests
//!
//! These tests pin down the behavior of `GET /product/search`:
//! - filter predicates (category, brand, free text, visibility)
//! - the sort-field allow-list and direction mapping
//! - pagination math and its consistency with the total count
//! - degradation of malformed input to defaults

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use bloomshop::database::{init_db, put_product, AppState};
use bloomshop::model::Product;
use bloomshop::route::create_app;

struct Seed {
    id: &'static str,
    name: &'static str,
    category: Option<&'static str>,
    brand: Option<&'static str>,
    discount: Option<i64>,
    day: u32,
    visible: bool,
}

/// Five visible products plus one hidden one. Ids are chosen so the store's
/// default (id) order is p1..p5 for the visible set.
const CATALOG: &[Seed] = &[
    Seed { id: "p1", name: "Red Rose Bouquet", category: Some("c1"), brand: Some("b1"), discount: Some(500), day: 5, visible: true },
    Seed { id: "p2", name: "White rose", category: Some("c1"), brand: Some("b2"), discount: None, day: 4, visible: true },
    Seed { id: "p3", name: "Tulip Mix", category: Some("c2"), brand: Some("b1"), discount: Some(300), day: 3, visible: true },
    Seed { id: "p4", name: "Lily Classic", category: Some("c2"), brand: Some("b2"), discount: Some(200), day: 2, visible: true },
    Seed { id: "p5", name: "Sunflower", category: None, brand: None, discount: Some(100), day: 1, visible: true },
    Seed { id: "p6", name: "Hidden Rose", category: Some("c1"), brand: Some("b1"), discount: Some(50), day: 6, visible: false },
];

fn setup_test_app() -> (axum::Router, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let db = init_db(temp_db.path().to_str().unwrap()).expect("Failed to initialize test database");

    for seed in CATALOG {
        let record = Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            original_price: 1000,
            discount_price: seed.discount,
            description: String::new(),
            thumbnail: format!("{}.jpg", seed.id),
            category_id: seed.category.map(str::to_string),
            brand_id: seed.brand.map(str::to_string),
            is_show: seed.visible,
            updated_at: Utc.with_ymd_and_hms(2026, 1, seed.day, 0, 0, 0).unwrap(),
        };
        put_product(&db, &record).expect("Failed to seed product");
    }

    let state = AppState { db: Arc::new(db) };
    (create_app(state), temp_db)
}

async fn search(app: axum::Router, query_string: &str) -> (StatusCode, Value) {
    let uri = format!("/product/search{query_string}");
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("Failed to parse JSON");
    (status, body)
}

fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_pagination_scenario_page_two_of_five() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(app, "?page=2&pageSize=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(ids(&body), ["p3", "p4"]);
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(app, "?page=3&pageSize=2").await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(ids(&body), ["p5"]);
}

#[tokio::test]
async fn test_text_filter_is_case_insensitive_and_respects_visibility() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(app.clone(), "?search=Rose").await;

    assert_eq!(status, StatusCode::OK);
    // "Red Rose Bouquet" and "White rose" match; "Hidden Rose" is not visible
    assert_eq!(body["total"], 2);
    assert_eq!(ids(&body), ["p1", "p2"]);

    let (_, lowercase) = search(app, "?search=rose").await;
    assert_eq!(ids(&lowercase), ["p1", "p2"]);
}

#[tokio::test]
async fn test_category_and_brand_filters() {
    let (app, _temp_db) = setup_test_app();

    let (_, by_category) = search(app.clone(), "?categoryId=c1").await;
    assert_eq!(ids(&by_category), ["p1", "p2"]);

    let (_, by_brand) = search(app.clone(), "?brandId=b1").await;
    assert_eq!(ids(&by_brand), ["p1", "p3"]);

    // Filters combine conjunctively
    let (_, combined) = search(app, "?categoryId=c1&brandId=b2").await;
    assert_eq!(combined["total"], 1);
    assert_eq!(ids(&combined), ["p2"]);
}

#[tokio::test]
async fn test_sort_by_name() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(app, "?sortBy=name&pageSize=10").await;

    // Byte-wise name order: uppercase letters sort before lowercase
    assert_eq!(ids(&body), ["p4", "p1", "p5", "p3", "p2"]);
}

#[tokio::test]
async fn test_sort_by_discount_desc_puts_missing_discounts_last() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(app, "?sortBy=discount_price&sortOrder=desc&pageSize=10").await;

    let discounts: Vec<Option<i64>> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["discount_price"].as_i64())
        .collect();

    // Non-increasing over the priced prefix, None strictly at the end
    assert_eq!(discounts, [Some(500), Some(300), Some(200), Some(100), None]);
    assert_eq!(ids(&body), ["p1", "p3", "p4", "p5", "p2"]);
}

#[tokio::test]
async fn test_sort_by_updated_at() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(app, "?sortBy=updatedAt&sortOrder=desc&pageSize=10").await;
    assert_eq!(ids(&body), ["p1", "p2", "p3", "p4", "p5"]);
}

#[tokio::test]
async fn test_unlisted_sort_field_leaves_default_order() {
    let (app, _temp_db) = setup_test_app();

    let (_, baseline) = search(app.clone(), "?pageSize=10").await;
    let (status, body) = search(app, "?sortBy=original_price&sortOrder=desc&pageSize=10").await;

    // Not on the allow-list: no error, and ordering is unaffected
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), ids(&baseline));
    assert_eq!(ids(&body), ["p1", "p2", "p3", "p4", "p5"]);
}

#[tokio::test]
async fn test_huge_page_number_returns_empty_page_with_totals() {
    let (app, _temp_db) = setup_test_app();

    let uri = format!("?page={}&pageSize=2", usize::MAX);
    let (status, body) = search(app, &uri).await;

    // Offset computation saturates; far-past-the-end pages are just empty
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 3);
}

#[tokio::test]
async fn test_malformed_pagination_degrades_to_defaults() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(app, "?page=abc&pageSize=zero").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 1);
    // Default page size is 4
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["totalPages"], 2);
}

#[tokio::test]
async fn test_identical_requests_return_identical_results() {
    let (app, _temp_db) = setup_test_app();

    let (_, first) = search(app.clone(), "?search=rose&sortBy=name&page=1&pageSize=2").await;
    let (_, second) = search(app, "?search=rose&sortBy=name&page=1&pageSize=2").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_every_result_is_visible() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(app, "?pageSize=10").await;

    // p6 is seeded but hidden; it must appear in neither the page nor the total
    assert_eq!(body["total"], 5);
    assert!(!ids(&body).contains(&"p6".to_string()));
}
