// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::admin_list_products,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Variations ---
        handlers::variations::list_variations,
        handlers::variations::admin_list_variations,
        handlers::variations::create_variation,
        handlers::variations::update_variation,
        handlers::variations::delete_variation,
        handlers::variations::bulk_upsert_variations,

        // --- Orders ---
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::order_stats,
        handlers::orders::get_order,
        handlers::orders::update_order_status,
        handlers::orders::delete_order,

        // --- Custom orders ---
        handlers::custom_orders::create_custom_order,
        handlers::custom_orders::list_custom_orders,
        handlers::custom_orders::get_custom_order,
        handlers::custom_orders::update_custom_order,
        handlers::custom_orders::delete_custom_order,

        // --- Content ---
        handlers::content::list_hero_slides,
        handlers::content::admin_list_hero_slides,
        handlers::content::create_hero_slide,
        handlers::content::update_hero_slide,
        handlers::content::delete_hero_slide,
        handlers::content::list_gallery,
        handlers::content::upload_gallery_image,
        handlers::content::delete_gallery_image,
        handlers::content::submit_contact,
        handlers::content::list_contacts,
        handlers::content::mark_contact_read,
        handlers::content::delete_contact,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,

        // --- Uploads ---
        handlers::uploads::upload_image,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Catalog ---
            models::catalog::ProductCategory,
            models::catalog::Specifications,
            models::catalog::Product,
            models::catalog::ProductVariation,
            models::catalog::ProductWithVariations,
            models::catalog::ProductPage,
            models::catalog::CreateProductPayload,
            models::catalog::UpdateProductPayload,
            models::catalog::CreateVariationPayload,
            models::catalog::UpdateVariationPayload,
            models::catalog::BulkVariationEntry,
            handlers::variations::BulkVariationsPayload,

            // --- Orders ---
            models::order::OrderStatus,
            models::order::PaymentMethod,
            models::order::PaymentStatus,
            models::order::CustomerInfo,
            models::order::OrderItemVariation,
            models::order::OrderItem,
            models::order::Order,
            models::order::OrderStats,
            models::order::CheckoutVariationRef,
            models::order::CheckoutItemPayload,
            models::order::CheckoutPayload,
            models::order::CheckoutResponse,
            models::order::UpdateOrderStatusPayload,

            // --- Custom orders ---
            models::custom_order::CustomOrderStatus,
            models::custom_order::CustomOrder,
            models::custom_order::UpdateCustomOrderPayload,

            // --- Content ---
            models::content::HeroSlide,
            models::content::GalleryImage,
            models::content::ContactMessage,
            models::content::StoreSettings,
            models::content::UpdateStoreSettingsPayload,
            models::content::CreateHeroSlidePayload,
            models::content::UpdateHeroSlidePayload,
            models::content::CreateContactPayload,

            // --- Uploads ---
            handlers::uploads::UploadResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Products", description = "Catalog browsing and product management"),
        (name = "Variations", description = "Color and size variations"),
        (name = "Orders", description = "Checkout and order management"),
        (name = "Custom Orders", description = "Custom design requests"),
        (name = "Content", description = "Hero slides, gallery and contact inbox"),
        (name = "Settings", description = "Store settings singleton"),
        (name = "Uploads", description = "Admin image uploads")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
