// src/cart.rs
//
// Cart state container used by the storefront client. Lines are keyed by the
// full (product id, color, size) tuple for every operation, so two variations
// of the same product are always independent lines. Persistence goes through
// the `CartStore` port: loaded once at open, written after every mutation, so
// the backing medium (local storage bridge, JSON file, session) is swappable
// without touching the merge logic.

use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::pricing;
use crate::models::catalog::{Product, ProductVariation};

/// Line identity. `color`/`size` are `None` for the implicit "no variation"
/// state of a single-SKU product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: i64,
    pub color: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at add time.
    pub product: Product,
    /// Snapshot of the selected variation, if any.
    pub variation: Option<ProductVariation>,
    pub quantity: u32,
}

impl CartLine {
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product.id,
            color: self.variation.as_ref().map(|v| v.color.clone()),
            size: self.variation.as_ref().map(|v| v.size.clone()),
        }
    }

    pub fn subtotal(&self) -> Decimal {
        pricing::line_subtotal(&self.product, self.variation.as_ref(), self.quantity)
    }
}

pub trait CartStore {
    fn load(&self) -> anyhow::Result<Vec<CartLine>>;
    fn save(&self, lines: &[CartLine]) -> anyhow::Result<()>;
}

/// Durable JSON-file store. A missing file reads as an empty cart.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Vec<CartLine>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, lines: &[CartLine]) -> anyhow::Result<()> {
        fs::write(&self.path, serde_json::to_vec(lines)?)?;
        Ok(())
    }
}

pub struct Cart<S: CartStore> {
    lines: Vec<CartLine>,
    store: S,
}

impl<S: CartStore> Cart<S> {
    pub fn open(store: S) -> anyhow::Result<Self> {
        let lines = store.load()?;
        Ok(Self { lines, store })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adding an identical (product, variation) combination merges into the
    /// existing line; a different variation of the same product stays its own
    /// line. Zero quantities are ignored.
    pub fn add(
        &mut self,
        product: Product,
        variation: Option<ProductVariation>,
        quantity: u32,
    ) -> anyhow::Result<()> {
        if quantity == 0 {
            return Ok(());
        }
        let incoming = CartLine { product, variation, quantity };
        let key = incoming.key();
        match self.lines.iter_mut().find(|l| l.key() == key) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(incoming),
        }
        self.store.save(&self.lines)
    }

    /// Sets the quantity of the line matching `key`; zero removes the line.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) -> anyhow::Result<()> {
        if quantity == 0 {
            return self.remove(key);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.key() == key) {
            line.quantity = quantity;
        }
        self.store.save(&self.lines)
    }

    pub fn remove(&mut self, key: &LineKey) -> anyhow::Result<()> {
        self.lines.retain(|l| &l.key() != key);
        self.store.save(&self.lines)
    }

    /// Empties the cart; called after a successful order submission.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.lines.clear();
        self.store.save(&self.lines)
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{ProductCategory, Specifications};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use sqlx::types::Json;
    use std::cell::RefCell;

    /// In-memory store that counts saves, standing in for local storage.
    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Vec<CartLine>>,
        save_count: RefCell<usize>,
    }

    impl CartStore for &MemoryStore {
        fn load(&self) -> anyhow::Result<Vec<CartLine>> {
            Ok(self.saved.borrow().clone())
        }

        fn save(&self, lines: &[CartLine]) -> anyhow::Result<()> {
            *self.saved.borrow_mut() = lines.to_vec();
            *self.save_count.borrow_mut() += 1;
            Ok(())
        }
    }

    fn product(id: i64, price: Decimal) -> Product {
        Product {
            id,
            name: format!("panel-{id}"),
            slug: format!("panel-{id}"),
            description: String::new(),
            detailed_description: vec![],
            price,
            images: vec!["/uploads/p.jpg".into()],
            features: vec![],
            specifications: Json(Specifications::default()),
            category: ProductCategory::Other,
            stock: 5,
            is_active: true,
            is_on_sale: false,
            sale_price: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn variation(product_id: i64, color: &str, size: &str, price: Decimal) -> ProductVariation {
        ProductVariation {
            id: product_id * 100,
            product_id,
            color: color.into(),
            size: size.into(),
            price,
            sale_price: None,
            images: vec![],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn key(product_id: i64, combo: Option<(&str, &str)>) -> LineKey {
        LineKey {
            product_id,
            color: combo.map(|(c, _)| c.to_string()),
            size: combo.map(|(_, s)| s.to_string()),
        }
    }

    #[test]
    fn adding_same_combination_merges_quantities() {
        let store = MemoryStore::default();
        let mut cart = Cart::open(&store).unwrap();
        let v = variation(1, "black", "60x80", dec!(180.00));
        cart.add(product(1, dec!(150.00)), Some(v.clone()), 2).unwrap();
        cart.add(product(1, dec!(150.00)), Some(v), 3).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn different_variations_stay_distinct_lines() {
        let store = MemoryStore::default();
        let mut cart = Cart::open(&store).unwrap();
        cart.add(product(1, dec!(150.00)), Some(variation(1, "black", "60x80", dec!(180.00))), 1)
            .unwrap();
        cart.add(product(1, dec!(150.00)), Some(variation(1, "gold", "60x80", dec!(200.00))), 1)
            .unwrap();
        cart.add(product(1, dec!(150.00)), None, 1).unwrap();
        assert_eq!(cart.lines().len(), 3);
    }

    #[test]
    fn update_and_remove_are_keyed_by_full_tuple() {
        let store = MemoryStore::default();
        let mut cart = Cart::open(&store).unwrap();
        cart.add(product(1, dec!(150.00)), Some(variation(1, "black", "60x80", dec!(180.00))), 1)
            .unwrap();
        cart.add(product(1, dec!(150.00)), Some(variation(1, "gold", "60x80", dec!(200.00))), 1)
            .unwrap();

        cart.update_quantity(&key(1, Some(("black", "60x80"))), 4).unwrap();
        let black = cart
            .lines()
            .iter()
            .find(|l| l.variation.as_ref().is_some_and(|v| v.color == "black"))
            .unwrap();
        assert_eq!(black.quantity, 4);

        // Removing one variation must not touch its sibling.
        cart.remove(&key(1, Some(("gold", "60x80")))).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let store = MemoryStore::default();
        let mut cart = Cart::open(&store).unwrap();
        cart.add(product(1, dec!(150.00)), None, 2).unwrap();
        cart.update_quantity(&key(1, None), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn subtotal_uses_effective_prices() {
        let store = MemoryStore::default();
        let mut cart = Cart::open(&store).unwrap();
        // Variation at 180.00 × 2 = 360.00 (not 300.00 from the base price).
        cart.add(product(1, dec!(150.00)), Some(variation(1, "black", "60x80", dec!(180.00))), 2)
            .unwrap();
        // On-sale single-SKU product: 80.00 × 3 = 240.00.
        let mut sale = product(2, dec!(100.00));
        sale.is_on_sale = true;
        sale.sale_price = Some(dec!(80.00));
        cart.add(sale, None, 3).unwrap();
        assert_eq!(cart.subtotal(), dec!(600.00));
    }

    #[test]
    fn every_mutation_hits_the_store() {
        let store = MemoryStore::default();
        let mut cart = Cart::open(&store).unwrap();
        cart.add(product(1, dec!(150.00)), None, 1).unwrap();
        cart.update_quantity(&key(1, None), 2).unwrap();
        cart.clear().unwrap();
        assert_eq!(*store.save_count.borrow(), 3);
    }

    #[test]
    fn json_file_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut cart = Cart::open(JsonFileStore::new(&path)).unwrap();
        cart.add(product(1, dec!(150.00)), Some(variation(1, "black", "60x80", dec!(180.00))), 2)
            .unwrap();

        let reloaded = Cart::open(JsonFileStore::new(&path)).unwrap();
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.lines()[0].quantity, 2);
        assert_eq!(reloaded.subtotal(), dec!(360.00));
    }
}
