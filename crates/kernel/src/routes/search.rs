//! Product listing routes.
//!
//! Every route here sits behind the listing parameter gate, so handlers
//! only ever see validated query variables.

use std::time::Instant;

use axum::{
    Extension, Json, Router,
    extract::State,
    http::Uri,
    routing::get,
};
use serde::Serialize;

use crate::catalog::{FilterControls, QueryVariables};
use crate::error::AppResult;
use crate::middleware::{ListingRequest, canonicalize_listing_params};
use crate::state::AppState;
use crate::storefront::Product;

/// Create the listing router.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/search", get(search))
        .route("/api/search/variables", get(search_variables))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            canonicalize_listing_params,
        ))
}

#[derive(Serialize)]
struct SearchResponse {
    variables: QueryVariables,
    controls: FilterControls,
    total: usize,
    products: Vec<Product>,
}

async fn search(
    State(state): State<AppState>,
    Extension(listing): Extension<ListingRequest>,
    uri: Uri,
) -> AppResult<Json<SearchResponse>> {
    let started = Instant::now();
    let result = state.listing().list_products(&listing.variables).await;
    state
        .metrics()
        .storefront_query_duration_seconds
        .observe(started.elapsed().as_secs_f64());

    let products = result.inspect_err(|_| {
        state.metrics().storefront_errors.inc();
    })?;

    Ok(Json(SearchResponse {
        controls: FilterControls::from_params(&listing.params, uri.path()),
        total: products.len(),
        variables: listing.variables,
        products,
    }))
}

async fn search_variables(Extension(listing): Extension<ListingRequest>) -> Json<QueryVariables> {
    Json(listing.variables)
}
