pub mod auth;
pub mod catalog;
pub mod content;
pub mod custom_order;
pub mod order;
