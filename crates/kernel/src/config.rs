//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Largest page the hosted listing query accepts.
const MAX_PRODUCTS_PER_PAGE: u32 = 250;

/// Redirect statuses allowed for canonicalizing listing URLs.
const REDIRECT_STATUSES: [u16; 4] = [302, 303, 307, 308];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Hosted storefront GraphQL endpoint. When None, the in-memory
    /// listing backend is used.
    pub storefront_api_url: Option<String>,

    /// Public storefront access token.
    pub storefront_access_token: Option<String>,

    /// Collection handle the listing query reads from (default: "all").
    pub storefront_collection: String,

    /// Products requested per listing page (default: 24, max 250).
    pub products_per_page: u32,

    /// JSON product fixtures for the in-memory backend.
    pub product_fixtures: Option<PathBuf>,

    /// Status used when redirecting to a canonical listing URL (default: 307).
    pub listing_redirect_status: u16,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            storefront_api_url: None,
            storefront_access_token: None,
            storefront_collection: "all".to_string(),
            products_per_page: 24,
            product_fixtures: None,
            listing_redirect_status: 307,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v.parse().context("PORT must be a valid u16")?,
            None => defaults.port,
        };

        let storefront_api_url = lookup("STOREFRONT_API_URL").filter(|v| !v.trim().is_empty());
        let storefront_access_token = lookup("STOREFRONT_ACCESS_TOKEN");

        let storefront_collection =
            lookup("STOREFRONT_COLLECTION").unwrap_or(defaults.storefront_collection);

        let products_per_page: u32 = match lookup("PRODUCTS_PER_PAGE") {
            Some(v) => v
                .parse()
                .context("PRODUCTS_PER_PAGE must be a valid u32")?,
            None => defaults.products_per_page,
        };
        if products_per_page == 0 || products_per_page > MAX_PRODUCTS_PER_PAGE {
            bail!("PRODUCTS_PER_PAGE must be between 1 and {MAX_PRODUCTS_PER_PAGE}");
        }

        let product_fixtures = lookup("PRODUCT_FIXTURES").map(PathBuf::from);

        let listing_redirect_status: u16 = match lookup("LISTING_REDIRECT_STATUS") {
            Some(v) => v
                .parse()
                .context("LISTING_REDIRECT_STATUS must be a valid u16")?,
            None => defaults.listing_redirect_status,
        };
        if !REDIRECT_STATUSES.contains(&listing_redirect_status) {
            bail!("LISTING_REDIRECT_STATUS must be one of {REDIRECT_STATUSES:?}");
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            port,
            storefront_api_url,
            storefront_access_token,
            storefront_collection,
            products_per_page,
            product_fixtures,
            listing_redirect_status,
            cors_allowed_origins,
        })
    }
}
