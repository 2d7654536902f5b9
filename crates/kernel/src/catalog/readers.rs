//! Per-dimension parameter readers.
//!
//! Each reader extracts one dimension from the query string and reports
//! whether the supplied value was legal. Readers never fail and never
//! substitute a default for an unparsable value.

use super::search_params::SearchParams;
use super::types::{Dimension, ParamRead, ProductType, SortOption};

/// Read the `sort` parameter.
pub fn read_sort(params: &SearchParams) -> ParamRead<Option<SortOption>> {
    let Some(raw) = params.get(Dimension::Sort.key()) else {
        return ParamRead::absent();
    };
    match raw.parse() {
        Ok(option) => ParamRead::valid(Some(option)),
        Err(_) => ParamRead::invalid(),
    }
}

/// Read the `available` parameter; only the literals `true` and `false`.
pub fn read_availability(params: &SearchParams) -> ParamRead<Option<bool>> {
    match params.get(Dimension::Available.key()) {
        None => ParamRead::absent(),
        Some("true") => ParamRead::valid(Some(true)),
        Some("false") => ParamRead::valid(Some(false)),
        Some(_) => ParamRead::invalid(),
    }
}

pub fn read_price_min(params: &SearchParams) -> ParamRead<Option<f64>> {
    read_price_bound(params, Dimension::PriceMin)
}

pub fn read_price_max(params: &SearchParams) -> ParamRead<Option<f64>> {
    read_price_bound(params, Dimension::PriceMax)
}

/// Read one price bound.
///
/// An empty value counts as absent. Anything else, whitespace included,
/// must be a finite, non-negative decimal once surrounding whitespace is
/// trimmed. No upper limit and no min/max cross-check.
pub fn read_price_bound(params: &SearchParams, dimension: Dimension) -> ParamRead<Option<f64>> {
    let raw = match params.get(dimension.key()) {
        None | Some("") => return ParamRead::absent(),
        Some(raw) => raw.trim(),
    };
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => ParamRead::valid(Some(amount)),
        _ => ParamRead::invalid(),
    }
}

/// Read every `product-type` value.
///
/// The recognized subset is returned in original order even when some
/// values were unknown; any unknown value marks the dimension invalid.
pub fn read_product_types(params: &SearchParams) -> ParamRead<Vec<ProductType>> {
    let raw = params.get_all(Dimension::ProductType.key());
    let recognized: Vec<ProductType> = raw.iter().filter_map(|v| v.parse().ok()).collect();
    ParamRead {
        is_valid: recognized.len() == raw.len(),
        value: recognized,
    }
}
