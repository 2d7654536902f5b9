//! View-facing accessors for the current filter and sort state.
//!
//! These run after the redirect gate has accepted the query string, so they
//! read values through the same readers and ignore validity.

use serde::Serialize;

use super::readers::{
    read_availability, read_price_max, read_price_min, read_product_types, read_sort,
};
use super::search_params::SearchParams;
use super::types::{Dimension, PriceRange, ProductType, SortOption};

pub fn selected_sort(params: &SearchParams) -> Option<SortOption> {
    read_sort(params).value
}

pub fn is_sort_selected(params: &SearchParams, option: SortOption) -> bool {
    selected_sort(params) == Some(option)
}

pub fn selected_availability(params: &SearchParams) -> Option<bool> {
    read_availability(params).value
}

pub fn is_availability_selected(params: &SearchParams, available: bool) -> bool {
    selected_availability(params) == Some(available)
}

pub fn selected_price_range(params: &SearchParams) -> PriceRange {
    PriceRange {
        min: read_price_min(params).value,
        max: read_price_max(params).value,
    }
}

pub fn selected_product_types(params: &SearchParams) -> Vec<ProductType> {
    read_product_types(params).value
}

pub fn is_product_type_selected(params: &SearchParams, product_type: ProductType) -> bool {
    selected_product_types(params).contains(&product_type)
}

/// Link that selects `option`, or clears the sort if it is already selected.
pub fn sort_href(params: &SearchParams, path: &str, option: SortOption) -> String {
    let mut next = params.clone();
    if is_sort_selected(params, option) {
        next.delete(Dimension::Sort.key());
    } else {
        next.set(Dimension::Sort.key(), option.as_str());
    }
    next.href(path)
}

/// Link that selects an availability value, or clears it if selected.
pub fn availability_href(params: &SearchParams, path: &str, available: bool) -> String {
    let mut next = params.clone();
    if is_availability_selected(params, available) {
        next.delete(Dimension::Available.key());
    } else {
        next.set(Dimension::Available.key(), available.to_string());
    }
    next.href(path)
}

/// Link that adds or removes one product type, keeping the others.
pub fn product_type_href(params: &SearchParams, path: &str, product_type: ProductType) -> String {
    let mut next = params.clone();
    if is_product_type_selected(params, product_type) {
        next.delete_value(Dimension::ProductType.key(), product_type.as_str());
    } else {
        next.append(Dimension::ProductType.key(), product_type.as_str());
    }
    next.href(path)
}

/// Link applying `range`; a missing bound removes that parameter.
pub fn price_range_href(params: &SearchParams, path: &str, range: PriceRange) -> String {
    let mut next = params.clone();
    for (dimension, bound) in [
        (Dimension::PriceMin, range.min),
        (Dimension::PriceMax, range.max),
    ] {
        match bound {
            Some(amount) => next.set(dimension.key(), amount.to_string()),
            None => next.delete(dimension.key()),
        }
    }
    next.href(path)
}

/// One toggleable control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
    pub href: String,
}

/// Full control state for a listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterControls {
    pub sort: Vec<ControlOption>,
    pub availability: Vec<ControlOption>,
    pub product_types: Vec<ControlOption>,
    pub price: PriceRange,
    /// Link with every listing dimension removed.
    pub clear_href: String,
}

impl FilterControls {
    pub fn from_params(params: &SearchParams, path: &str) -> Self {
        let sort = SortOption::ALL
            .into_iter()
            .map(|option| ControlOption {
                value: option.as_str(),
                label: option.label(),
                selected: is_sort_selected(params, option),
                href: sort_href(params, path, option),
            })
            .collect();

        let availability = [(true, "true", "In stock"), (false, "false", "Out of stock")]
            .into_iter()
            .map(|(available, value, label)| ControlOption {
                value,
                label,
                selected: is_availability_selected(params, available),
                href: availability_href(params, path, available),
            })
            .collect();

        let product_types = ProductType::ALL
            .into_iter()
            .map(|product_type| ControlOption {
                value: product_type.as_str(),
                label: product_type.label(),
                selected: is_product_type_selected(params, product_type),
                href: product_type_href(params, path, product_type),
            })
            .collect();

        let mut cleared = params.clone();
        for dimension in Dimension::ALL {
            cleared.delete(dimension.key());
        }

        Self {
            sort,
            availability,
            product_types,
            price: selected_price_range(params),
            clear_href: cleared.href(path),
        }
    }
}
