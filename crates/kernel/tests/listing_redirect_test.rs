#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Listing parameter gate integration tests.
//!
//! Invalid filter and sort parameters must redirect to the canonical URL
//! before any handler runs.

use axum::http::StatusCode;
use storefront_kernel::Config;
use storefront_test_utils::query;

mod common;
use common::{TestApp, body_text, location};

// =============================================================================
// Redirect targets
// =============================================================================

#[tokio::test]
async fn invalid_sort_redirects_to_bare_query() {
    let app = TestApp::new();
    let response = app.get("/search?sort=test").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/search?");
}

#[tokio::test]
async fn invalid_availability_redirects_to_bare_query() {
    let app = TestApp::new();
    let response = app.get("/search?available=blah").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/search?");
}

#[tokio::test]
async fn negative_and_non_numeric_prices_are_stripped() {
    let app = TestApp::new();
    for bad in ["-10", "blah"] {
        let response = app
            .get(&format!("/search?price.min={bad}&price.max=50"))
            .await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/search?price.max=50");
    }
}

#[tokio::test]
async fn whitespace_only_prices_are_stripped() {
    let app = TestApp::new();
    let response = app.get("/search?price.min=+&price.max=%20%20&sort=newest").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/search?sort=newest");
}

#[tokio::test]
async fn partial_product_types_keep_recognized_values() {
    let app = TestApp::new();
    let uri = format!(
        "/search?{}",
        query(&[("product-type", "toys"), ("product-type", "not-a-type")])
    );
    let response = app.get(&uri).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/search?product-type=toys");
}

#[tokio::test]
async fn unrelated_params_survive_redirect() {
    let app = TestApp::new();
    let response = app.get("/search?q=red+hat&sort=bogus&utm_source=mail").await;

    assert_eq!(location(&response), "/search?q=red+hat&utm_source=mail");
}

#[tokio::test]
async fn redirect_keeps_request_path() {
    let app = TestApp::new();
    let response = app.get("/api/search/variables?sort=nope").await;

    assert_eq!(location(&response), "/api/search/variables?");
}

#[tokio::test]
async fn following_redirect_reaches_valid_page() {
    let app = TestApp::new();
    let uri = "/search?sort=x&available=1&price.min=-5&price.max=abc\
               &product-type=toys&product-type=bogus";
    let response = app.get(uri).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let target = location(&response).to_string();
    let second = app.get(&target).await;
    assert_eq!(second.status(), StatusCode::OK, "canonical {target} redirected again");
}

// =============================================================================
// Redirect status and metrics
// =============================================================================

#[tokio::test]
async fn configured_redirect_status_is_used() {
    let app = TestApp::with_config(Config {
        listing_redirect_status: 302,
        ..Config::default()
    });
    let response = app.get("/search?sort=test").await;

    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn redirects_are_counted_per_dimension() {
    let app = TestApp::new();
    app.get("/search?sort=test&available=blah").await;
    app.get("/search?sort=other").await;
    app.get("/search?sort=newest").await;

    let metrics = body_text(app.get("/metrics").await).await;
    assert!(metrics.contains(r#"listing_redirects_total{dimension="sort"} 2"#));
    assert!(metrics.contains(r#"listing_redirects_total{dimension="available"} 1"#));
    assert!(metrics.contains("listing_requests_total 1"));
}

#[tokio::test]
async fn non_listing_routes_are_not_gated() {
    let app = TestApp::new();
    let response = app.get("/health?sort=test").await;

    assert_eq!(response.status(), StatusCode::OK);
}
