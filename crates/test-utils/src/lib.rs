//! Storefront test utilities.
//!
//! Helpers for integration testing: product fixtures in the hosted listing
//! API's node shape, listing response bodies, and query-string builders.

use serde_json::{Value as JsonValue, json};
use url::form_urlencoded;

/// Create a test product with default values.
pub fn test_product(handle: &str, title: &str) -> TestProduct {
    TestProduct {
        id: format!("gid://catalog/Product/{handle}"),
        handle: handle.to_string(),
        title: title.to_string(),
        product_type: String::new(),
        available_for_sale: true,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        price: "10.0".to_string(),
        currency_code: "USD".to_string(),
    }
}

/// A test product builder for creating listing fixtures.
#[derive(Debug, Clone)]
pub struct TestProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub product_type: String,
    pub available_for_sale: bool,
    pub created_at: String,
    pub price: String,
    pub currency_code: String,
}

impl TestProduct {
    /// Set the product type.
    pub fn with_type(mut self, product_type: &str) -> Self {
        self.product_type = product_type.to_string();
        self
    }

    /// Set the minimum variant price.
    pub fn with_price(mut self, amount: &str) -> Self {
        self.price = amount.to_string();
        self
    }

    /// Set the creation timestamp (RFC 3339).
    pub fn created(mut self, created_at: &str) -> Self {
        self.created_at = created_at.to_string();
        self
    }

    /// Mark as sold out.
    pub fn sold_out(mut self) -> Self {
        self.available_for_sale = false;
        self
    }

    /// Product node JSON.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "handle": self.handle,
            "title": self.title,
            "productType": self.product_type,
            "availableForSale": self.available_for_sale,
            "createdAt": self.created_at,
            "priceRange": {
                "minVariantPrice": {
                    "amount": self.price,
                    "currencyCode": self.currency_code,
                },
            },
        })
    }
}

/// JSON array of product nodes.
pub fn products_json(products: &[TestProduct]) -> JsonValue {
    JsonValue::Array(products.iter().map(TestProduct::to_json).collect())
}

/// Listing query response body wrapping `products`.
pub fn listing_response(products: &[TestProduct]) -> JsonValue {
    json!({
        "data": {
            "collection": {
                "products": {
                    "nodes": products_json(products),
                },
            },
        },
    })
}

/// A small catalog covering every product type, in best-selling order.
pub fn sample_catalog() -> Vec<TestProduct> {
    vec![
        test_product("logo-tee", "Logo Tee")
            .with_type("apparel")
            .with_price("25.00")
            .created("2024-02-10T09:00:00Z"),
        test_product("plush-fox", "Plush Fox")
            .with_type("toys")
            .with_price("15.00")
            .created("2024-04-01T09:00:00Z"),
        test_product("dot-notebook", "Dot Notebook")
            .with_type("stationery")
            .with_price("8.50")
            .created("2023-11-20T09:00:00Z")
            .sold_out(),
        test_product("sticker-pack", "Sticker Pack")
            .with_type("stickers")
            .with_price("4.00")
            .created("2024-03-05T09:00:00Z"),
        test_product("canvas-tote", "Canvas Tote")
            .with_type("accessories")
            .with_price("120.00")
            .created("2024-01-15T09:00:00Z")
            .sold_out(),
    ]
}

/// Encode `pairs` as a query string, keeping order and repeats.
pub fn query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let product = test_product("fox", "Fox").with_type("toys").sold_out();
        let json = product.to_json();
        assert_eq!(json["productType"], "toys");
        assert_eq!(json["availableForSale"], false);
        assert_eq!(json["priceRange"]["minVariantPrice"]["amount"], "10.0");
    }

    #[test]
    fn query_keeps_repeats() {
        let encoded = query(&[("product-type", "toys"), ("product-type", "apparel")]);
        assert_eq!(encoded, "product-type=toys&product-type=apparel");
    }

    #[test]
    fn listing_response_shape() {
        let body = listing_response(&sample_catalog());
        let nodes = body["data"]["collection"]["products"]["nodes"]
            .as_array()
            .unwrap();
        assert_eq!(nodes.len(), 5);
    }
}
