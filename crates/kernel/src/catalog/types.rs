//! Catalog listing types.
//!
//! Provides the closed vocabularies and output shapes of the listing query:
//! - SortOption / ProductSortKey: user-facing sort identifiers and the
//!   storefront sort keys they map to
//! - ProductType: the fixed product-type vocabulary
//! - Dimension / ParamRead: one validated facet of the query string
//! - FilterPredicate / QueryVariables: variables for the product-listing query

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A query-string value that is not part of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownIdentifier {
    pub kind: &'static str,
    pub value: String,
}

/// User-facing sort identifier, as it appears in the `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    BestSelling,
    PriceHighToLow,
    PriceLowToHigh,
    Newest,
}

impl SortOption {
    /// Every sort option, in the order the controls present them.
    pub const ALL: [SortOption; 4] = [
        SortOption::BestSelling,
        SortOption::PriceHighToLow,
        SortOption::PriceLowToHigh,
        SortOption::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::BestSelling => "best-selling",
            SortOption::PriceHighToLow => "price-high-to-low",
            SortOption::PriceLowToHigh => "price-low-to-high",
            SortOption::Newest => "newest",
        }
    }

    /// Human-readable label for sort controls.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::BestSelling => "Best selling",
            SortOption::PriceHighToLow => "Price: high to low",
            SortOption::PriceLowToHigh => "Price: low to high",
            SortOption::Newest => "Newest",
        }
    }

    /// Storefront sort key and reverse flag for the listing query.
    pub fn query_variables(&self) -> (ProductSortKey, bool) {
        match self {
            SortOption::BestSelling => (ProductSortKey::BestSelling, false),
            SortOption::PriceHighToLow => (ProductSortKey::Price, true),
            SortOption::PriceLowToHigh => (ProductSortKey::Price, false),
            SortOption::Newest => (ProductSortKey::Created, true),
        }
    }
}

impl FromStr for SortOption {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownIdentifier {
                kind: "sort option",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key understood by the hosted product-listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortKey {
    BestSelling,
    Price,
    Created,
}

/// Known product types accepted by the `product-type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Apparel,
    Accessories,
    Stationery,
    Stickers,
    Toys,
}

impl ProductType {
    pub const ALL: [ProductType; 5] = [
        ProductType::Apparel,
        ProductType::Accessories,
        ProductType::Stationery,
        ProductType::Stickers,
        ProductType::Toys,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Apparel => "apparel",
            ProductType::Accessories => "accessories",
            ProductType::Stationery => "stationery",
            ProductType::Stickers => "stickers",
            ProductType::Toys => "toys",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Apparel => "Apparel",
            ProductType::Accessories => "Accessories",
            ProductType::Stationery => "Stationery",
            ProductType::Stickers => "Stickers",
            ProductType::Toys => "Toys",
        }
    }
}

impl FromStr for ProductType {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|product_type| product_type.as_str() == s)
            .ok_or_else(|| UnknownIdentifier {
                kind: "product type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One independently validated facet of the listing query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Sort,
    Available,
    PriceMin,
    PriceMax,
    ProductType,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Sort,
        Dimension::Available,
        Dimension::PriceMin,
        Dimension::PriceMax,
        Dimension::ProductType,
    ];

    /// Query-string parameter name.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Sort => "sort",
            Dimension::Available => "available",
            Dimension::PriceMin => "price.min",
            Dimension::PriceMax => "price.max",
            Dimension::ProductType => "product-type",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of reading one dimension from the query string.
///
/// Absent dimensions are valid. For product types `value` holds the
/// recognized subset even when `is_valid` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRead<T> {
    pub value: T,
    pub is_valid: bool,
}

impl<T> ParamRead<T> {
    pub fn valid(value: T) -> Self {
        Self {
            value,
            is_valid: true,
        }
    }
}

impl<T> ParamRead<Option<T>> {
    /// The dimension was not supplied.
    pub fn absent() -> Self {
        Self::valid(None)
    }

    /// The dimension was supplied but could not be parsed.
    pub fn invalid() -> Self {
        Self {
            value: None,
            is_valid: false,
        }
    }
}

/// Price range predicate; either bound may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Inclusive bound check.
    pub fn contains(&self, amount: f64) -> bool {
        self.min.is_none_or(|min| amount >= min) && self.max.is_none_or(|max| amount <= max)
    }
}

/// One entry in the listing query's `filters` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterPredicate {
    Available(bool),
    Price(PriceRange),
    ProductType(ProductType),
}

/// Variables for the hosted product-listing query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<ProductSortKey>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,

    #[serde(default)]
    pub filters: Vec<FilterPredicate>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn sort_mapping_table() {
        assert_eq!(
            SortOption::BestSelling.query_variables(),
            (ProductSortKey::BestSelling, false)
        );
        assert_eq!(
            SortOption::PriceHighToLow.query_variables(),
            (ProductSortKey::Price, true)
        );
        assert_eq!(
            SortOption::PriceLowToHigh.query_variables(),
            (ProductSortKey::Price, false)
        );
        assert_eq!(
            SortOption::Newest.query_variables(),
            (ProductSortKey::Created, true)
        );
    }

    #[test]
    fn sort_option_parses_only_exact_identifiers() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert!("Newest".parse::<SortOption>().is_err());
        assert!(" newest".parse::<SortOption>().is_err());
        let err = "test".parse::<SortOption>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sort option 'test'");
    }

    #[test]
    fn product_type_uses_canonical_spelling() {
        assert_eq!(
            "stationery".parse::<ProductType>().unwrap(),
            ProductType::Stationery
        );
        assert!("stationary".parse::<ProductType>().is_err());
    }

    #[test]
    fn serde_names_match_query_identifiers() {
        for option in SortOption::ALL {
            let json = serde_json::to_value(option).unwrap();
            assert_eq!(json, serde_json::json!(option.as_str()));
        }
        for product_type in ProductType::ALL {
            let json = serde_json::to_value(product_type).unwrap();
            assert_eq!(json, serde_json::json!(product_type.as_str()));
        }
        let json = serde_json::to_value(ProductSortKey::BestSelling).unwrap();
        assert_eq!(json, serde_json::json!("BEST_SELLING"));
    }

    #[test]
    fn filter_predicates_serialize_to_listing_shape() {
        let filters = vec![
            FilterPredicate::Available(false),
            FilterPredicate::Price(PriceRange {
                min: Some(10.0),
                max: None,
            }),
            FilterPredicate::ProductType(ProductType::Toys),
        ];
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"available": false},
                {"price": {"min": 10.0}},
                {"productType": "toys"},
            ])
        );
    }

    #[test]
    fn query_variables_omit_absent_sort() {
        let json = serde_json::to_value(QueryVariables::default()).unwrap();
        assert_eq!(json, serde_json::json!({"filters": []}));

        let vars = QueryVariables {
            sort_key: Some(ProductSortKey::Created),
            reverse: Some(true),
            filters: Vec::new(),
        };
        let json = serde_json::to_value(vars).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sortKey": "CREATED", "reverse": true, "filters": []})
        );
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange {
            min: Some(10.0),
            max: Some(100.0),
        };
        assert!(range.contains(10.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(100.01));
        assert!(PriceRange::default().contains(0.0));
        assert!(PriceRange::default().is_unbounded());
    }

    #[test]
    fn dimension_keys() {
        let keys: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            ["sort", "available", "price.min", "price.max", "product-type"]
        );
    }
}
