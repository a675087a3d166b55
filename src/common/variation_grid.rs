// src/common/variation_grid.rs
//
// Draft-row generation for the admin variation editor: the full Cartesian
// product of the selected colors and sizes. Combinations that already have a
// row keep their entered data; new combinations start empty.

use rust_decimal::Decimal;

/// An editable draft row. `id` is present for rows that already exist in the
/// database and feeds straight into the bulk upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftVariation {
    pub id: Option<i64>,
    pub color: String,
    pub size: String,
    pub price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub images: Vec<String>,
    pub is_active: bool,
}

impl DraftVariation {
    fn blank(color: &str, size: &str) -> Self {
        Self {
            id: None,
            color: color.to_string(),
            size: size.to_string(),
            price: None,
            sale_price: None,
            images: Vec::new(),
            is_active: true,
        }
    }
}

/// Builds colors × sizes in input order. Existing drafts matching a
/// combination are carried over unchanged; combinations no longer selected
/// are dropped from the grid (deleting their rows is a separate action).
pub fn generate(colors: &[String], sizes: &[String], existing: &[DraftVariation]) -> Vec<DraftVariation> {
    let mut grid = Vec::with_capacity(colors.len() * sizes.len());
    for color in colors {
        for size in sizes {
            let row = existing
                .iter()
                .find(|d| &d.color == color && &d.size == size)
                .cloned()
                .unwrap_or_else(|| DraftVariation::blank(color, size));
            grid.push(row);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_cartesian_product_in_input_order() {
        let grid = generate(&strings(&["black", "gold"]), &strings(&["40x60", "60x80"]), &[]);
        let combos: Vec<(&str, &str)> =
            grid.iter().map(|d| (d.color.as_str(), d.size.as_str())).collect();
        assert_eq!(
            combos,
            vec![("black", "40x60"), ("black", "60x80"), ("gold", "40x60"), ("gold", "60x80")]
        );
        assert!(grid.iter().all(|d| d.id.is_none() && d.price.is_none() && d.is_active));
    }

    #[test]
    fn existing_rows_keep_entered_data() {
        let existing = vec![DraftVariation {
            id: Some(42),
            color: "black".into(),
            size: "60x80".into(),
            price: Some(dec!(180.00)),
            sale_price: None,
            images: vec!["/uploads/black.jpg".into()],
            is_active: true,
        }];
        let grid = generate(&strings(&["black"]), &strings(&["40x60", "60x80"]), &existing);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].id, None);
        assert_eq!(grid[1].id, Some(42));
        assert_eq!(grid[1].price, Some(dec!(180.00)));
        assert_eq!(grid[1].images, vec!["/uploads/black.jpg".to_string()]);
    }

    #[test]
    fn deselected_combinations_are_dropped() {
        let existing = vec![DraftVariation {
            id: Some(7),
            color: "silver".into(),
            size: "40x60".into(),
            price: Some(dec!(120.00)),
            sale_price: None,
            images: vec![],
            is_active: true,
        }];
        let grid = generate(&strings(&["black"]), &strings(&["40x60"]), &existing);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].color, "black");
        assert_eq!(grid[0].id, None);
    }
}
