//! GraphQL client for the hosted product-listing query.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::ProductListing;
use super::types::{Product, StorefrontError};
use crate::catalog::QueryVariables;

/// Header carrying the public storefront access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Request timeout for listing queries.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Product-listing query; variables come straight from [`QueryVariables`].
pub const PRODUCT_LISTING_QUERY: &str = r#"
query ProductListing(
  $handle: String!
  $first: Int!
  $sortKey: ProductCollectionSortKeys
  $reverse: Boolean
  $filters: [ProductFilter!]
) {
  collection(handle: $handle) {
    products(first: $first, sortKey: $sortKey, reverse: $reverse, filters: $filters) {
      nodes {
        id
        handle
        title
        productType
        availableForSale
        createdAt
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
      }
    }
  }
}
"#;

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ListingData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ListingData {
    collection: Option<CollectionProducts>,
}

#[derive(Deserialize)]
struct CollectionProducts {
    products: ProductConnection,
}

#[derive(Deserialize)]
struct ProductConnection {
    nodes: Vec<Product>,
}

/// Listing backend backed by the hosted storefront GraphQL API.
pub struct StorefrontClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
    collection: String,
    first: u32,
}

impl StorefrontClient {
    pub fn new(
        endpoint: impl Into<String>,
        access_token: Option<String>,
        collection: impl Into<String>,
        first: u32,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("failed to build storefront HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            access_token,
            collection: collection.into(),
            first,
        })
    }

    /// JSON body for one listing request.
    pub fn request_body(&self, variables: &QueryVariables) -> Value {
        json!({
            "query": PRODUCT_LISTING_QUERY,
            "variables": {
                "handle": self.collection,
                "first": self.first,
                "sortKey": variables.sort_key,
                "reverse": variables.reverse,
                "filters": variables.filters,
            },
        })
    }
}

#[async_trait]
impl ProductListing for StorefrontClient {
    async fn list_products(
        &self,
        variables: &QueryVariables,
    ) -> Result<Vec<Product>, StorefrontError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&self.request_body(variables));
        if let Some(token) = &self.access_token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "storefront listing request rejected");
            return Err(StorefrontError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let products = decode_listing_response(body, &self.collection)?;
        debug!(count = products.len(), collection = %self.collection, "listing fetched");
        Ok(products)
    }

    fn backend_name(&self) -> &'static str {
        "storefront"
    }
}

/// Extract product nodes from a listing response body.
pub fn decode_listing_response(body: Value, handle: &str) -> Result<Vec<Product>, StorefrontError> {
    let response: GraphQlResponse = serde_json::from_value(body)?;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(StorefrontError::GraphQl { messages });
    }

    response
        .data
        .and_then(|data| data.collection)
        .map(|collection| collection.products.nodes)
        .ok_or_else(|| StorefrontError::CollectionNotFound {
            handle: handle.to_string(),
        })
}
