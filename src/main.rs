//src/main.rs

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod cart;
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::{admin_guard, auth_guard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new().await?;

    sqlx::migrate!().run(&app_state.db_pool).await?;
    tracing::info!("database migrations applied");

    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route(
            "/me",
            get(handlers::auth::get_me).layer(axum_middleware::from_fn_with_state(
                app_state.clone(),
                auth_guard,
            )),
        );

    let public_routes = Router::new()
        .route("/products", get(handlers::products::list_products))
        .route("/products/{idOrSlug}", get(handlers::products::get_product))
        .route(
            "/products/{id}/variations",
            get(handlers::variations::list_variations),
        )
        .route("/orders", post(handlers::orders::create_order))
        .route(
            "/custom-orders",
            post(handlers::custom_orders::create_custom_order),
        )
        .route("/hero-slides", get(handlers::content::list_hero_slides))
        .route("/gallery", get(handlers::content::list_gallery))
        .route("/contact", post(handlers::content::submit_contact))
        .route("/settings", get(handlers::settings::get_settings));

    let admin_routes = Router::new()
        .route(
            "/products",
            get(handlers::products::admin_list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route(
            "/products/{id}/variations",
            get(handlers::variations::admin_list_variations),
        )
        .route(
            "/products/{id}/variations/bulk",
            post(handlers::variations::bulk_upsert_variations),
        )
        .route("/variations", post(handlers::variations::create_variation))
        .route(
            "/variations/{id}",
            put(handlers::variations::update_variation)
                .delete(handlers::variations::delete_variation),
        )
        .route("/orders", get(handlers::orders::list_orders))
        .route("/orders/stats", get(handlers::orders::order_stats))
        .route(
            "/orders/{id}",
            get(handlers::orders::get_order).delete(handlers::orders::delete_order),
        )
        .route(
            "/orders/{id}/status",
            put(handlers::orders::update_order_status),
        )
        .route(
            "/custom-orders",
            get(handlers::custom_orders::list_custom_orders),
        )
        .route(
            "/custom-orders/{id}",
            get(handlers::custom_orders::get_custom_order)
                .put(handlers::custom_orders::update_custom_order)
                .delete(handlers::custom_orders::delete_custom_order),
        )
        .route(
            "/hero-slides",
            get(handlers::content::admin_list_hero_slides)
                .post(handlers::content::create_hero_slide),
        )
        .route(
            "/hero-slides/{id}",
            put(handlers::content::update_hero_slide).delete(handlers::content::delete_hero_slide),
        )
        .route("/gallery", post(handlers::content::upload_gallery_image))
        .route(
            "/gallery/{id}",
            axum::routing::delete(handlers::content::delete_gallery_image),
        )
        .route("/contacts", get(handlers::content::list_contacts))
        .route(
            "/contacts/{id}/read",
            put(handlers::content::mark_contact_read),
        )
        .route(
            "/contacts/{id}",
            axum::routing::delete(handlers::content::delete_contact),
        )
        .route("/settings", put(handlers::settings::update_settings))
        .route("/uploads", post(handlers::uploads::upload_image))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api", public_routes)
        .nest("/api/admin", admin_routes)
        .nest_service("/uploads", ServeDir::new(&app_state.upload_dir))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Uploads are capped at 5 MB by the storage layer; the body limit
        // leaves headroom for the multipart framing.
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state.clone());

    let listener = TcpListener::bind(&app_state.bind_addr).await?;
    tracing::info!("server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
