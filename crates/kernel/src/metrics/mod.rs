//! Prometheus metrics collection.
//!
//! Provides application metrics in Prometheus format.

use prometheus_client::encoding::{EncodeLabelSet, text::encode};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;

use crate::catalog::Dimension;

/// Labels for canonicalizing redirects.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RedirectLabels {
    pub dimension: String,
}

/// Application metrics.
pub struct Metrics {
    registry: Registry,

    /// Listing requests that passed the redirect gate.
    pub listing_requests: Counter,

    /// Canonicalizing redirects, one increment per invalid dimension.
    pub listing_redirects: Family<RedirectLabels, Counter>,

    /// Listing backend query duration.
    pub storefront_query_duration_seconds: Histogram,

    /// Listing backend failures.
    pub storefront_errors: Counter,
}

impl Metrics {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let listing_requests = Counter::default();
        registry.register(
            "listing_requests",
            "Listing requests with valid query parameters",
            listing_requests.clone(),
        );

        let listing_redirects = Family::<RedirectLabels, Counter>::default();
        registry.register(
            "listing_redirects",
            "Canonicalizing redirects by invalid dimension",
            listing_redirects.clone(),
        );

        let storefront_query_duration_seconds =
            Histogram::new(exponential_buckets(0.005, 2.0, 12));
        registry.register(
            "storefront_query_duration_seconds",
            "Listing backend query duration in seconds",
            storefront_query_duration_seconds.clone(),
        );

        let storefront_errors = Counter::default();
        registry.register(
            "storefront_errors",
            "Listing backend failures",
            storefront_errors.clone(),
        );

        Self {
            registry,
            listing_requests,
            listing_redirects,
            storefront_query_duration_seconds,
            storefront_errors,
        }
    }

    /// Record one redirect for each invalid dimension.
    pub fn record_redirect(&self, invalid: &[Dimension]) {
        for dimension in invalid {
            self.listing_redirects
                .get_or_create(&RedirectLabels {
                    dimension: dimension.key().to_string(),
                })
                .inc();
        }
    }

    /// Encode all metrics in Prometheus text format.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        // Prometheus encoding to String buffer is infallible
        #[allow(clippy::expect_used)]
        encode(&mut buffer, &self.registry).expect("encoding metrics");
        buffer
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
