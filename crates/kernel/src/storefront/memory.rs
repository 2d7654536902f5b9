//! In-process listing backend.
//!
//! Applies listing query variables to a fixed product table. Table order is
//! the best-selling rank.

use std::cmp::Ordering;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::ProductListing;
use super::types::{Product, StorefrontError};
use crate::catalog::{FilterPredicate, ProductSortKey, QueryVariables};

/// Default page size when none is configured.
const DEFAULT_PAGE_SIZE: usize = 24;

pub struct InMemoryListing {
    products: Vec<Product>,
    page_size: usize,
}

impl InMemoryListing {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Load a JSON array of product nodes.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read product fixtures from {}", path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid product fixtures in {}", path.display()))?;
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching `variables`, sorted and truncated to one page.
    pub fn apply(&self, variables: &QueryVariables) -> Vec<Product> {
        let mut matched: Vec<Product> = self
            .products
            .iter()
            .filter(|product| matches_filters(product, &variables.filters))
            .cloned()
            .collect();

        match variables.sort_key {
            Some(ProductSortKey::Price) => matched.sort_by(compare_price),
            Some(ProductSortKey::Created) => {
                matched.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            }
            Some(ProductSortKey::BestSelling) | None => {}
        }
        if variables.reverse == Some(true) {
            matched.reverse();
        }

        matched.truncate(self.page_size);
        matched
    }
}

/// Availability and price predicates must all hold; product-type predicates
/// are alternatives.
fn matches_filters(product: &Product, filters: &[FilterPredicate]) -> bool {
    let mut wanted_types = filters
        .iter()
        .filter_map(|filter| match filter {
            FilterPredicate::ProductType(t) => Some(t.as_str()),
            _ => None,
        })
        .peekable();

    if wanted_types.peek().is_some()
        && !wanted_types.any(|t| t.eq_ignore_ascii_case(&product.product_type))
    {
        return false;
    }

    filters.iter().all(|filter| match filter {
        FilterPredicate::Available(available) => product.available_for_sale == *available,
        FilterPredicate::Price(range) => product.min_price().is_some_and(|p| range.contains(p)),
        FilterPredicate::ProductType(_) => true,
    })
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    match (a.min_price(), b.min_price()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl ProductListing for InMemoryListing {
    async fn list_products(
        &self,
        variables: &QueryVariables,
    ) -> Result<Vec<Product>, StorefrontError> {
        Ok(self.apply(variables))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
