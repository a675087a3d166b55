// src/common/pricing.rs
//
// Effective price/image resolution for a (product, optional variation) pair.
// This is the single implementation used by catalog payloads, cart subtotals
// and order snapshotting; call sites must never re-derive the rule.

use rust_decimal::Decimal;

use crate::models::catalog::{Product, ProductVariation};

#[derive(Debug, Clone, PartialEq)]
pub struct EffectivePricing {
    pub effective_price: Decimal,
    pub effective_sale_price: Option<Decimal>,
    pub is_discounted: bool,
    pub display_images: Vec<String>,
}

impl EffectivePricing {
    /// The price actually charged per unit: the sale price when it genuinely
    /// undercuts the regular one, otherwise the regular price.
    pub fn unit_price(&self) -> Decimal {
        match self.effective_sale_price {
            Some(sale) if self.is_discounted => sale,
            _ => self.effective_price,
        }
    }
}

/// Resolution rule:
/// - with a variation selected, its price/sale-price win outright; the
///   product's `is_on_sale` flag plays no part;
/// - without one, the product price applies and `sale_price` only counts
///   while `is_on_sale` is set;
/// - variation images are used only when non-empty, otherwise the product
///   images; never a mix of variation price with product-level sale data.
pub fn resolve(product: &Product, variation: Option<&ProductVariation>) -> EffectivePricing {
    let (effective_price, effective_sale_price, display_images) = match variation {
        Some(v) => {
            let images = if v.images.is_empty() {
                product.images.clone()
            } else {
                v.images.clone()
            };
            (v.price, v.sale_price, images)
        }
        None => {
            let sale = if product.is_on_sale { product.sale_price } else { None };
            (product.price, sale, product.images.clone())
        }
    };

    let is_discounted = matches!(effective_sale_price, Some(sale) if sale < effective_price);

    EffectivePricing {
        effective_price,
        effective_sale_price,
        is_discounted,
        display_images,
    }
}

/// Write-time invariant shared by product and variation mutations: a present
/// sale price must undercut the regular price.
pub fn sale_price_is_valid(price: Decimal, sale_price: Option<Decimal>) -> bool {
    match sale_price {
        Some(sale) => sale < price,
        None => true,
    }
}

/// Subtotal for one line: resolved unit price × quantity.
pub fn line_subtotal(product: &Product, variation: Option<&ProductVariation>, quantity: u32) -> Decimal {
    resolve(product, variation).unit_price() * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{ProductCategory, Specifications};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use sqlx::types::Json;

    fn product(price: Decimal, is_on_sale: bool, sale_price: Option<Decimal>) -> Product {
        Product {
            id: 1,
            name: "Wolf Panel".into(),
            slug: "wolf-panel".into(),
            description: String::new(),
            detailed_description: vec![],
            price,
            images: vec!["/uploads/wolf-1.jpg".into(), "/uploads/wolf-2.jpg".into()],
            features: vec![],
            specifications: Json(Specifications::default()),
            category: ProductCategory::Animals,
            stock: 10,
            is_active: true,
            is_on_sale,
            sale_price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn variation(price: Decimal, sale_price: Option<Decimal>, images: Vec<String>) -> ProductVariation {
        ProductVariation {
            id: 11,
            product_id: 1,
            color: "black".into(),
            size: "60x80".into(),
            price,
            sale_price,
            images,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn no_variation_uses_base_price_and_images() {
        let p = product(dec!(150.00), false, None);
        let resolved = resolve(&p, None);
        assert_eq!(resolved.effective_price, dec!(150.00));
        assert_eq!(resolved.effective_sale_price, None);
        assert!(!resolved.is_discounted);
        assert_eq!(resolved.display_images, p.images);
        assert_eq!(resolved.unit_price(), dec!(150.00));
    }

    #[test]
    fn product_sale_price_applies_only_when_on_sale() {
        let on_sale = product(dec!(100.00), true, Some(dec!(80.00)));
        let resolved = resolve(&on_sale, None);
        assert!(resolved.is_discounted);
        assert_eq!(resolved.unit_price(), dec!(80.00));

        // The flag off shadows a lingering sale_price value.
        let off_sale = product(dec!(100.00), false, Some(dec!(80.00)));
        let resolved = resolve(&off_sale, None);
        assert!(!resolved.is_discounted);
        assert_eq!(resolved.unit_price(), dec!(100.00));
    }

    #[test]
    fn selected_variation_price_wins_over_base() {
        // Wolf Panel, base 150.00; black/60x80 variation priced 180.00.
        let p = product(dec!(150.00), false, None);
        let v = variation(dec!(180.00), None, vec!["/uploads/wolf-black.jpg".into()]);
        let resolved = resolve(&p, Some(&v));
        assert_eq!(resolved.unit_price(), dec!(180.00));
        assert_eq!(resolved.display_images, vec!["/uploads/wolf-black.jpg".to_string()]);
        // Quantity 2 must charge 360.00, not the 300.00 the base price would give.
        assert_eq!(line_subtotal(&p, Some(&v), 2), dec!(360.00));
    }

    #[test]
    fn variation_sale_price_shadows_variation_price() {
        let p = product(dec!(150.00), false, None);
        let v = variation(dec!(180.00), Some(dec!(160.00)), vec![]);
        let resolved = resolve(&p, Some(&v));
        assert!(resolved.is_discounted);
        assert_eq!(resolved.unit_price(), dec!(160.00));
    }

    #[test]
    fn variation_ignores_product_level_sale() {
        // Product-level discount never leaks onto a selected variation.
        let p = product(dec!(150.00), true, Some(dec!(100.00)));
        let v = variation(dec!(180.00), None, vec![]);
        let resolved = resolve(&p, Some(&v));
        assert_eq!(resolved.effective_sale_price, None);
        assert_eq!(resolved.unit_price(), dec!(180.00));
    }

    #[test]
    fn variation_with_no_images_falls_back_to_product_images() {
        let p = product(dec!(150.00), false, None);
        let v = variation(dec!(180.00), None, vec![]);
        let resolved = resolve(&p, Some(&v));
        assert_eq!(resolved.display_images, p.images);
        // ... but the price stays the variation's.
        assert_eq!(resolved.effective_price, dec!(180.00));
    }

    #[test]
    fn sale_line_subtotal_scenario() {
        // isOnSale=true, price=100.00, salePrice=80.00, quantity 3 -> 240.00.
        let p = product(dec!(100.00), true, Some(dec!(80.00)));
        assert_eq!(line_subtotal(&p, None, 3), dec!(240.00));
    }

    #[test]
    fn write_time_sale_price_check() {
        assert!(sale_price_is_valid(dec!(100.00), None));
        assert!(sale_price_is_valid(dec!(100.00), Some(dec!(80.00))));
        assert!(!sale_price_is_valid(dec!(100.00), Some(dec!(100.00))));
        assert!(!sale_price_is_valid(dec!(100.00), Some(dec!(120.00))));
    }

    #[test]
    fn sale_price_not_below_price_is_not_a_discount() {
        let p = product(dec!(100.00), true, Some(dec!(100.00)));
        let resolved = resolve(&p, None);
        assert!(!resolved.is_discounted);
        assert_eq!(resolved.unit_price(), dec!(100.00));
    }
}
