//! HTTP middleware components.
//!
//! Provides the listing query-parameter gate.

pub mod listing_params;

pub use listing_params::{ListingRequest, canonicalize_listing_params, redirect_response};
