//! Shop transfer types mirroring the backend's JSON, plus the cart's
//! optimistic local mutations.
//!
//! These structs never own lifecycle — they reflect the backend's current
//! view after each request. Money stays `f64` because that is what the
//! backend serializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: i64,
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    /// JSON-encoded attribute map, opaque to the frontend.
    #[serde(default)]
    pub attributes: String,
    #[serde(default)]
    pub price_adjustment: f64,
    #[serde(default)]
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub base_price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub gtin: Option<String>,
    #[serde(default)]
    pub character_value: Option<String>,
    #[serde(default)]
    pub etsy_link: Option<String>,
    pub status: String,
    #[serde(default)]
    pub categories: Option<Vec<CategoryRef>>,
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
    #[serde(default)]
    pub variants: Option<Vec<ProductVariant>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Primary image if flagged, otherwise the first by display order.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        let images = self.images.as_deref()?;
        images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| images.iter().min_by_key(|image| image.display_order))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub variant_id: Option<i64>,
    pub quantity: u32,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub variant: Option<ProductVariant>,
}

impl CartItem {
    /// Unit price with the variant adjustment applied; 0 when the product
    /// payload was not embedded.
    pub fn unit_price(&self) -> f64 {
        let base = self.product.as_ref().map_or(0.0, |p| p.base_price);
        let adjustment = self.variant.as_ref().map_or(0.0, |v| v.price_adjustment);
        base + adjustment
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    pub session_token: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Cart plus the totals the backend computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub cart: Cart,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.cart.items.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.items.iter().map(|item| item.quantity).sum()
    }

    /// Drops an item locally after the backend confirmed the delete.
    ///
    /// Optimistic contract: this adjusted view is authoritative until the
    /// next successful refetch replaces it with the backend's totals. Tax and
    /// discount are left untouched — only the backend can recompute them.
    pub fn remove_item_locally(&mut self, item_id: i64) {
        let Some(index) = self.cart.items.iter().position(|item| item.id == item_id) else {
            return;
        };
        let removed = self.cart.items.remove(index);
        let line = removed.line_total();
        self.subtotal = (self.subtotal - line).max(0.0);
        self.total = (self.total - line).max(0.0);
    }

    /// Empties the cart locally after the backend confirmed the clear.
    /// Same contract as [`remove_item_locally`](Self::remove_item_locally).
    pub fn clear_locally(&mut self) {
        self.cart.items.clear();
        self.subtotal = 0.0;
        self.tax = 0.0;
        self.discount = 0.0;
        self.total = 0.0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    pub email: String,
    pub name: String,
    pub payment_method: String,
    pub shipping_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub order_number: String,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub total: f64,
    pub status: String,
}

/// Outcome of applying a discount code to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountApplication {
    pub discount_code: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub discount_amount: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total_before: f64,
    pub total_after: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, base_price: f64) -> Product {
        Product {
            id,
            slug: format!("product-{id}"),
            title: format!("Product {id}"),
            short_description: String::new(),
            long_description: None,
            base_price,
            currency: "EUR".into(),
            sku: format!("SKU-{id}"),
            gtin: None,
            character_value: None,
            etsy_link: None,
            status: "published".into(),
            categories: None,
            images: None,
            variants: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn cart_view() -> CartView {
        let items = vec![
            CartItem {
                id: 1,
                cart_id: 7,
                product_id: 10,
                variant_id: None,
                quantity: 2,
                product: Some(product(10, 15.0)),
                variant: None,
            },
            CartItem {
                id: 2,
                cart_id: 7,
                product_id: 11,
                variant_id: Some(99),
                quantity: 1,
                product: Some(product(11, 20.0)),
                variant: Some(ProductVariant {
                    id: 99,
                    product_id: 11,
                    sku: "SKU-11-L".into(),
                    name: "Large".into(),
                    attributes: String::new(),
                    price_adjustment: 5.0,
                    stock: 3,
                }),
            },
        ];
        CartView {
            cart: Cart {
                id: 7,
                session_token: "abc".into(),
                user_id: None,
                items,
                discount_code: None,
                created_at: None,
                updated_at: None,
            },
            subtotal: 55.0,
            tax: 5.5,
            discount: 0.0,
            total: 60.5,
        }
    }

    #[test]
    fn line_total_applies_variant_adjustment() {
        let view = cart_view();
        assert_eq!(view.cart.items[0].line_total(), 30.0);
        assert_eq!(view.cart.items[1].line_total(), 25.0);
    }

    #[test]
    fn optimistic_remove_drops_item_and_line_total() {
        let mut view = cart_view();
        view.remove_item_locally(1);

        assert_eq!(view.cart.items.len(), 1);
        assert_eq!(view.cart.items[0].id, 2);
        assert_eq!(view.subtotal, 25.0);
        assert_eq!(view.total, 30.5);
        // Backend-owned figures stand until the next successful refetch.
        assert_eq!(view.tax, 5.5);
    }

    #[test]
    fn optimistic_remove_of_unknown_item_is_a_no_op() {
        let mut view = cart_view();
        let before = view.clone();
        view.remove_item_locally(999);
        assert_eq!(view, before);
    }

    #[test]
    fn optimistic_clear_zeroes_the_view() {
        let mut view = cart_view();
        view.clear_locally();
        assert!(view.is_empty());
        assert_eq!(view.subtotal, 0.0);
        assert_eq!(view.total, 0.0);
    }

    #[test]
    fn item_count_sums_quantities() {
        assert_eq!(cart_view().item_count(), 3);
    }

    #[test]
    fn primary_image_prefers_flag_then_order() {
        let mut p = product(1, 1.0);
        p.images = Some(vec![
            ProductImage {
                id: 1,
                url: "/b.png".into(),
                alt_text: None,
                display_order: 2,
                is_primary: false,
            },
            ProductImage {
                id: 2,
                url: "/a.png".into(),
                alt_text: None,
                display_order: 1,
                is_primary: false,
            },
        ]);
        assert_eq!(p.primary_image().unwrap().id, 2);

        p.images.as_mut().unwrap()[0].is_primary = true;
        assert_eq!(p.primary_image().unwrap().id, 1);
    }

    #[test]
    fn cart_view_round_trips_through_json() {
        let view = cart_view();
        let json = serde_json::to_string(&view).unwrap();
        let back: CartView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
