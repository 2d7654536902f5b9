//! Hosted product-listing collaborator.
//!
//! The kernel only hands validated [`QueryVariables`] to a listing backend;
//! how the backend executes them is its own business.

mod client;
mod memory;
pub mod types;

use async_trait::async_trait;

use crate::catalog::QueryVariables;

pub use client::{
    ACCESS_TOKEN_HEADER, PRODUCT_LISTING_QUERY, StorefrontClient, decode_listing_response,
};
pub use memory::InMemoryListing;
pub use types::{Money, Product, ProductPriceRange, StorefrontError};

/// Product listing backend.
#[async_trait]
pub trait ProductListing: Send + Sync {
    /// Fetch one page of products for validated query variables.
    async fn list_products(
        &self,
        variables: &QueryVariables,
    ) -> Result<Vec<Product>, StorefrontError>;

    /// Short backend name for health output and logs.
    fn backend_name(&self) -> &'static str;
}
