// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        ContentRepository, CustomOrderRepository, OrderRepository, ProductRepository,
        SettingsRepository, UserRepository, VariationRepository,
    },
    services::{
        AuthService, CatalogService, ContentService, CustomOrderService, ImageStorage,
        OrderService, SettingsService, VariationService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub upload_dir: String,
    pub bind_addr: String,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub variation_service: VariationService,
    pub order_service: OrderService,
    pub custom_order_service: CustomOrderService,
    pub content_service: ContentService,
    pub settings_service: SettingsService,
    pub storage: ImageStorage,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("database connection established");

        let user_repo = UserRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let variation_repo = VariationRepository::new(db_pool.clone());
        let order_repo = OrderRepository::new(db_pool.clone());
        let custom_order_repo = CustomOrderRepository::new(db_pool.clone());
        let content_repo = ContentRepository::new(db_pool.clone());
        let settings_repo = SettingsRepository::new(db_pool.clone());

        let storage = ImageStorage::new(&upload_dir);

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let catalog_service = CatalogService::new(product_repo.clone(), variation_repo.clone());
        let variation_service =
            VariationService::new(db_pool.clone(), variation_repo.clone(), product_repo.clone());
        let order_service = OrderService::new(order_repo, product_repo, variation_repo);
        let custom_order_service = CustomOrderService::new(custom_order_repo, storage.clone());
        let content_service = ContentService::new(content_repo, storage.clone());
        let settings_service = SettingsService::new(settings_repo);

        Ok(Self {
            db_pool,
            upload_dir,
            bind_addr,
            auth_service,
            catalog_service,
            variation_service,
            order_service,
            custom_order_service,
            content_service,
            settings_service,
            storage,
        })
    }
}
