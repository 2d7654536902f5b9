//! Hosted catalog product types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors talking to the hosted product-listing API.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("storefront request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("storefront returned HTTP {status}")]
    Status { status: u16 },

    #[error("storefront query failed: {messages}")]
    GraphQl { messages: String },

    #[error("collection '{handle}' not found")]
    CollectionNotFound { handle: String },

    #[error("malformed storefront response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Amount as a float, for range comparisons.
    pub fn as_f64(&self) -> Option<f64> {
        self.amount.trim().parse().ok()
    }
}

/// Price range across a product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceRange {
    pub min_variant_price: Money,
}

/// A product node as returned by the listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub product_type: String,
    pub available_for_sale: bool,
    /// RFC 3339 timestamp.
    pub created_at: String,
    pub price_range: ProductPriceRange,
}

impl Product {
    pub fn min_price(&self) -> Option<f64> {
        self.price_range.min_variant_price.as_f64()
    }
}
