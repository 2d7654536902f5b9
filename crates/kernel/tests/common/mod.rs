#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the REAL kernel router around an in-memory listing backend, so
//! tests exercise the actual gate, handlers, and serialization.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use storefront_kernel::catalog::QueryVariables;
use storefront_kernel::storefront::{InMemoryListing, Product, ProductListing, StorefrontError};
use storefront_kernel::{AppState, Config, routes};
use storefront_test_utils::{products_json, sample_catalog};

/// Test application wrapper using the real kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App backed by the sample catalog.
    pub fn new() -> Self {
        let products: Vec<Product> =
            serde_json::from_value(products_json(&sample_catalog())).unwrap();
        Self::with_listing(Config::default(), Arc::new(InMemoryListing::new(products)))
    }

    pub fn with_config(config: Config) -> Self {
        let products: Vec<Product> =
            serde_json::from_value(products_json(&sample_catalog())).unwrap();
        Self::with_listing(config, Arc::new(InMemoryListing::new(products)))
    }

    pub fn with_listing(config: Config, listing: Arc<dyn ProductListing>) -> Self {
        let state = AppState::with_listing(config, listing);
        Self {
            router: routes::router(state.clone()),
            state,
        }
    }

    /// Issue a GET request.
    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Issue a GET request and decode a JSON body, asserting 200 OK.
    pub async fn get_json(&self, uri: &str) -> Value {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_json(response).await
    }
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Read a response body as text.
pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// `Location` header of a redirect response.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
}

/// Listing backend that always fails.
pub struct FailingListing;

#[async_trait]
impl ProductListing for FailingListing {
    async fn list_products(
        &self,
        _variables: &QueryVariables,
    ) -> Result<Vec<Product>, StorefrontError> {
        Err(StorefrontError::Status { status: 503 })
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
