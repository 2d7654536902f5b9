//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::metrics::Metrics;
use crate::storefront::{InMemoryListing, ProductListing, StorefrontClient};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Loaded configuration.
    config: Config,

    /// Product listing backend.
    listing: Arc<dyn ProductListing>,

    /// Prometheus metrics.
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Build state from configuration, selecting the listing backend.
    pub fn new(config: &Config) -> Result<Self> {
        let listing: Arc<dyn ProductListing> = match &config.storefront_api_url {
            Some(url) => {
                info!(endpoint = %url, collection = %config.storefront_collection, "using hosted storefront listing");
                Arc::new(StorefrontClient::new(
                    url.clone(),
                    config.storefront_access_token.clone(),
                    config.storefront_collection.clone(),
                    config.products_per_page,
                )?)
            }
            None => {
                let listing = match &config.product_fixtures {
                    Some(path) => InMemoryListing::from_file(path)
                        .context("failed to load in-memory listing")?,
                    None => InMemoryListing::new(Vec::new()),
                };
                info!(products = listing.len(), "using in-memory listing");
                Arc::new(listing.with_page_size(config.products_per_page as usize))
            }
        };

        Ok(Self::with_listing(config.clone(), listing))
    }

    /// Build state around an explicit listing backend.
    pub fn with_listing(config: Config, listing: Arc<dyn ProductListing>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                listing,
                metrics: Arc::new(Metrics::new()),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn listing(&self) -> &dyn ProductListing {
        self.inner.listing.as_ref()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }
}
