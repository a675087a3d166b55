pub mod auth;
pub use auth::AuthService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod variation_service;
pub use variation_service::VariationService;
pub mod order_service;
pub use order_service::OrderService;
pub mod custom_order_service;
pub use custom_order_service::CustomOrderService;
pub mod content_service;
pub use content_service::ContentService;
pub mod settings_service;
pub use settings_service::SettingsService;
pub mod storage;
pub use storage::ImageStorage;
