//! Catalog listing filter and sort module.
//!
//! This module provides:
//! - SearchParams: ordered query-string parameters
//! - Readers: per-dimension validation of the query string
//! - build_query_variables: listing query variables or a canonical redirect
//! - Presentation: current control state for the view layer

pub mod presentation;
pub mod query_builder;
pub mod readers;
pub mod search_params;
pub mod types;

pub use presentation::{ControlOption, FilterControls};
pub use query_builder::{CanonicalRedirect, ListingParams, build_query_variables, canonicalize};
pub use search_params::SearchParams;
pub use types::{
    Dimension, FilterPredicate, ParamRead, PriceRange, ProductSortKey, ProductType,
    QueryVariables, SortOption, UnknownIdentifier,
};
