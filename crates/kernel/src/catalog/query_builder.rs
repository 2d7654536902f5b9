//! Listing query-variable builder.
//!
//! Runs every parameter reader and either assembles the variables for the
//! product-listing query or produces the canonical query string the client
//! must be redirected to. Invalid input is never defaulted silently: the URL
//! always reflects exactly what was applied.

use super::readers::{
    read_availability, read_price_max, read_price_min, read_product_types, read_sort,
};
use super::search_params::SearchParams;
use super::types::{
    Dimension, FilterPredicate, ParamRead, PriceRange, ProductType, QueryVariables, SortOption,
};

/// Every dimension read from one query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingParams {
    pub sort: ParamRead<Option<SortOption>>,
    pub available: ParamRead<Option<bool>>,
    pub price_min: ParamRead<Option<f64>>,
    pub price_max: ParamRead<Option<f64>>,
    pub product_types: ParamRead<Vec<ProductType>>,
}

impl ListingParams {
    pub fn read(params: &SearchParams) -> Self {
        Self {
            sort: read_sort(params),
            available: read_availability(params),
            price_min: read_price_min(params),
            price_max: read_price_max(params),
            product_types: read_product_types(params),
        }
    }

    pub fn is_valid(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Sort => self.sort.is_valid,
            Dimension::Available => self.available.is_valid,
            Dimension::PriceMin => self.price_min.is_valid,
            Dimension::PriceMax => self.price_max.is_valid,
            Dimension::ProductType => self.product_types.is_valid,
        }
    }

    /// Invalid dimensions, in key order.
    pub fn invalid_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| !self.is_valid(*d))
            .collect()
    }
}

/// Redirect outcome: the query string with every invalid dimension fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRedirect {
    pub params: SearchParams,
    pub invalid: Vec<Dimension>,
}

impl CanonicalRedirect {
    /// Redirect target for the request path.
    pub fn location(&self, path: &str) -> String {
        self.params.href(path)
    }
}

/// Build the listing query variables, or the redirect that canonicalizes
/// the query string when any dimension is invalid.
pub fn build_query_variables(params: &SearchParams) -> Result<QueryVariables, CanonicalRedirect> {
    let listing = ListingParams::read(params);

    let invalid = listing.invalid_dimensions();
    if !invalid.is_empty() {
        return Err(CanonicalRedirect {
            params: canonicalize_with(params, &listing),
            invalid,
        });
    }

    let mut filters = Vec::new();

    if let Some(available) = listing.available.value {
        filters.push(FilterPredicate::Available(available));
    }

    let price = PriceRange {
        min: listing.price_min.value,
        max: listing.price_max.value,
    };
    if !price.is_unbounded() {
        filters.push(FilterPredicate::Price(price));
    }

    filters.extend(
        listing
            .product_types
            .value
            .iter()
            .map(|t| FilterPredicate::ProductType(*t)),
    );

    let (sort_key, reverse) = match listing.sort.value {
        Some(option) => {
            let (key, reverse) = option.query_variables();
            (Some(key), Some(reverse))
        }
        None => (None, None),
    };

    Ok(QueryVariables {
        sort_key,
        reverse,
        filters,
    })
}

/// Copy of `params` with every invalid dimension removed or corrected.
///
/// Valid dimensions and unrelated parameters are kept verbatim.
pub fn canonicalize(params: &SearchParams) -> SearchParams {
    canonicalize_with(params, &ListingParams::read(params))
}

fn canonicalize_with(params: &SearchParams, listing: &ListingParams) -> SearchParams {
    let mut canonical = params.clone();
    for dimension in listing.invalid_dimensions() {
        canonical.delete(dimension.key());
        if dimension == Dimension::ProductType {
            for product_type in &listing.product_types.value {
                canonical.append(dimension.key(), product_type.as_str());
            }
        }
    }
    canonical
}
