pub mod user_repo;
pub use user_repo::UserRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod variation_repo;
pub use variation_repo::VariationRepository;
pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod custom_order_repo;
pub use custom_order_repo::CustomOrderRepository;
pub mod content_repo;
pub use content_repo::ContentRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
