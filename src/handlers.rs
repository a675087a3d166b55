pub mod auth;
pub mod content;
pub mod custom_orders;
pub mod orders;
pub mod products;
pub mod settings;
pub mod uploads;
pub mod variations;
