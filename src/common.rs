pub mod error;
pub mod pricing;
pub mod variation_grid;
