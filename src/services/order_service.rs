// src/services/order_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, pricing},
    db::{OrderRepository, ProductRepository, VariationRepository},
    models::{
        catalog::{Product, ProductVariation},
        order::{
            CheckoutPayload, CheckoutResponse, CustomerInfo, Order, OrderItem, OrderItemVariation,
            OrderStats, OrderStatus, PaymentMethod, PaymentStatus,
        },
    },
};

/// Initial payment status by method: manual methods count as settled at the
/// till, only the (placeholder) online method stays pending.
pub fn initial_payment_status(method: PaymentMethod) -> PaymentStatus {
    match method {
        PaymentMethod::Online => PaymentStatus::Pending,
        PaymentMethod::Cash | PaymentMethod::BankTransfer => PaymentStatus::Completed,
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingField(field)),
    }
}

/// Checks the required contact fields in a fixed order and reports the first
/// absent one by its wire name.
pub fn validate_customer(payload: &CheckoutPayload) -> Result<CustomerInfo, AppError> {
    let first_name = required(&payload.first_name, "firstName")?.to_string();
    let last_name = required(&payload.last_name, "lastName")?.to_string();
    let email = required(&payload.email, "email")?.to_string();
    let phone = required(&payload.phone, "phone")?.to_string();
    let document_number = required(&payload.document_number, "documentNumber")?.to_string();
    let address = required(&payload.address, "address")?.to_string();

    Ok(CustomerInfo {
        first_name,
        last_name,
        email,
        phone,
        document_number,
        address,
        comment: payload.comment.clone().filter(|c| !c.trim().is_empty()),
    })
}

/// Checks the remaining top-level contract fields: a non-empty items list,
/// a present `total` and a payment method. The client total is only checked
/// for presence; the stored total always comes from the snapshot.
pub fn validate_top_level(payload: &CheckoutPayload) -> Result<PaymentMethod, AppError> {
    if payload.items.is_empty() {
        return Err(AppError::EmptyOrder);
    }
    payload.total.ok_or(AppError::MissingField("total"))?;
    payload.payment_method.ok_or(AppError::MissingField("paymentMethod"))
}

/// Builds the immutable items snapshot from resolved catalog rows. The unit
/// price comes from the shared resolution rule; the total is the sum of
/// unit price × quantity and is never recomputed after this point.
pub fn build_snapshot(
    lines: &[(Product, Option<ProductVariation>, u32)],
) -> (Vec<OrderItem>, Decimal) {
    let mut items = Vec::with_capacity(lines.len());
    let mut total = Decimal::ZERO;

    for (product, variation, quantity) in lines {
        let resolved = pricing::resolve(product, variation.as_ref());
        let unit_price = resolved.unit_price();
        total += unit_price * Decimal::from(*quantity);
        items.push(OrderItem {
            product_id: product.id,
            name: product.name.clone(),
            image: resolved.display_images.first().cloned(),
            unit_price,
            quantity: *quantity,
            variation: variation.as_ref().map(|v| OrderItemVariation {
                id: v.id,
                color: v.color.clone(),
                size: v.size.clone(),
            }),
        });
    }

    (items, total)
}

#[derive(Clone)]
pub struct OrderService {
    order_repo: OrderRepository,
    product_repo: ProductRepository,
    variation_repo: VariationRepository,
}

impl OrderService {
    pub fn new(
        order_repo: OrderRepository,
        product_repo: ProductRepository,
        variation_repo: VariationRepository,
    ) -> Self {
        Self { order_repo, product_repo, variation_repo }
    }

    /// Checkout submission. Guest checkout passes `user_id = None`.
    pub async fn create_order(
        &self,
        user_id: Option<Uuid>,
        payload: CheckoutPayload,
    ) -> Result<CheckoutResponse, AppError> {
        let customer_info = validate_customer(&payload)?;
        let payment_method = validate_top_level(&payload)?;

        // Resolve every line against the live catalog; prices are captured
        // here, at submission time, not trusted from the client.
        let mut lines = Vec::with_capacity(payload.items.len());
        for item in &payload.items {
            if item.quantity == 0 {
                return Err(AppError::InvalidQuantity);
            }
            let product = self
                .product_repo
                .find_by_id(item.product_id)
                .await?
                .ok_or(AppError::ProductNotFound)?;
            let variation = match &item.variation {
                Some(combo) => Some(
                    self.variation_repo
                        .find_by_combo(product.id, &combo.color, &combo.size)
                        .await?
                        .ok_or(AppError::VariationNotFound)?,
                ),
                None => None,
            };
            lines.push((product, variation, item.quantity));
        }

        let (items, total_amount) = build_snapshot(&lines);
        let payment_status = initial_payment_status(payment_method);

        let order = self
            .order_repo
            .insert(user_id, &customer_info, &items, total_amount, payment_method, payment_status)
            .await?;

        tracing::info!(order_id = order.id, total = %order.total_amount, "order placed");

        Ok(CheckoutResponse { order_number: order.order_number(), order })
    }

    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        self.order_repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Order, AppError> {
        self.order_repo.find_by_id(id).await?.ok_or(AppError::OrderNotFound)
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Order, AppError> {
        self.order_repo
            .update_status(id, status, payment_status)
            .await?
            .ok_or(AppError::OrderNotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.order_repo.delete(id).await? {
            return Err(AppError::OrderNotFound);
        }
        Ok(())
    }

    pub async fn stats(&self) -> Result<OrderStats, AppError> {
        self.order_repo.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{ProductCategory, Specifications};
    use crate::models::order::CheckoutItemPayload;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use sqlx::types::Json;

    fn product(id: i64, price: Decimal) -> Product {
        Product {
            id,
            name: format!("Panel {id}"),
            slug: format!("panel-{id}"),
            description: String::new(),
            detailed_description: vec![],
            price,
            images: vec![format!("/uploads/panel-{id}.jpg")],
            features: vec![],
            specifications: Json(Specifications::default()),
            category: ProductCategory::Nature,
            stock: 5,
            is_active: true,
            is_on_sale: false,
            sale_price: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn variation(product_id: i64, price: Decimal) -> ProductVariation {
        ProductVariation {
            id: product_id * 10,
            product_id,
            color: "black".into(),
            size: "60x80".into(),
            price,
            sale_price: None,
            images: vec!["/uploads/black.jpg".into()],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn payload() -> CheckoutPayload {
        CheckoutPayload {
            first_name: Some("Nino".into()),
            last_name: Some("Beridze".into()),
            email: Some("nino@example.com".into()),
            phone: Some("+995555123456".into()),
            document_number: Some("01001012345".into()),
            address: Some("Tbilisi, Rustaveli 12".into()),
            comment: None,
            items: vec![CheckoutItemPayload { product_id: 1, quantity: 1, variation: None }],
            total: Some(dec!(150.00)),
            payment_method: Some(PaymentMethod::Cash),
        }
    }

    #[test]
    fn payment_status_derivation() {
        assert_eq!(initial_payment_status(PaymentMethod::Cash), PaymentStatus::Completed);
        assert_eq!(initial_payment_status(PaymentMethod::BankTransfer), PaymentStatus::Completed);
        assert_eq!(initial_payment_status(PaymentMethod::Online), PaymentStatus::Pending);
    }

    #[test]
    fn first_missing_field_is_named() {
        let mut p = payload();
        p.phone = None;
        assert!(matches!(validate_customer(&p), Err(AppError::MissingField("phone"))));

        // With several absent, the first in field order wins.
        let mut p = payload();
        p.last_name = Some("   ".into());
        p.address = None;
        assert!(matches!(validate_customer(&p), Err(AppError::MissingField("lastName"))));
    }

    #[test]
    fn top_level_fields_are_presence_checked() {
        let mut p = payload();
        p.items.clear();
        assert!(matches!(validate_top_level(&p), Err(AppError::EmptyOrder)));

        let mut p = payload();
        p.total = None;
        assert!(matches!(validate_top_level(&p), Err(AppError::MissingField("total"))));

        let mut p = payload();
        p.payment_method = None;
        assert!(matches!(
            validate_top_level(&p),
            Err(AppError::MissingField("paymentMethod"))
        ));

        assert_eq!(validate_top_level(&payload()).unwrap(), PaymentMethod::Cash);
    }

    #[test]
    fn client_total_is_not_trusted() {
        // A wrong client total still passes the presence check; the stored
        // total is the snapshot sum.
        let mut p = payload();
        p.total = Some(dec!(1.00));
        assert!(validate_top_level(&p).is_ok());
        let (_, total) = build_snapshot(&[(product(1, dec!(150.00)), None, 1)]);
        assert_eq!(total, dec!(150.00));
    }

    #[test]
    fn valid_customer_passes_through() {
        let info = validate_customer(&payload()).unwrap();
        assert_eq!(info.first_name, "Nino");
        assert_eq!(info.comment, None);
    }

    #[test]
    fn snapshot_total_uses_effective_prices() {
        // Variation at 180.00 × 2 plus base-priced product at 150.00 × 1.
        let lines = vec![
            (product(1, dec!(150.00)), Some(variation(1, dec!(180.00))), 2),
            (product(2, dec!(150.00)), None, 1),
        ];
        let (items, total) = build_snapshot(&lines);
        assert_eq!(total, dec!(510.00));
        assert_eq!(items[0].unit_price, dec!(180.00));
        assert_eq!(items[0].image, Some("/uploads/black.jpg".to_string()));
        assert_eq!(items[0].variation.as_ref().unwrap().color, "black");
        assert_eq!(items[1].unit_price, dec!(150.00));
        assert!(items[1].variation.is_none());
    }

    #[test]
    fn snapshot_keeps_sale_prices() {
        let mut p = product(1, dec!(100.00));
        p.is_on_sale = true;
        p.sale_price = Some(dec!(80.00));
        let (items, total) = build_snapshot(&[(p, None, 3)]);
        assert_eq!(total, dec!(240.00));
        assert_eq!(items[0].unit_price, dec!(80.00));
    }

    #[test]
    fn order_number_formatting() {
        use crate::models::order::format_order_number;
        assert_eq!(format_order_number(42), "ORD-000042");
        assert_eq!(format_order_number(1234567), "ORD-1234567");
    }
}
