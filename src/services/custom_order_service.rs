// src/services/custom_order_service.rs

use crate::{
    common::error::AppError,
    db::CustomOrderRepository,
    models::custom_order::{CustomOrder, UpdateCustomOrderPayload},
    services::storage::ImageStorage,
};

/// Fields collected from the multipart form before validation.
#[derive(Debug, Default)]
pub struct CustomOrderIntake {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub quantity: Option<String>,
    pub additional_details: Option<String>,
    /// (original filename, bytes) of the uploaded design.
    pub image: Option<(String, Vec<u8>)>,
}

#[derive(Debug, PartialEq)]
pub struct ValidatedIntake {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub width: String,
    pub height: String,
    pub quantity: i32,
    pub additional_details: Option<String>,
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::MissingField(field)),
    }
}

/// Field checks in a fixed order; the image is checked first since the whole
/// flow is pointless without a design.
pub fn validate_intake(intake: &CustomOrderIntake) -> Result<ValidatedIntake, AppError> {
    if intake.image.is_none() {
        return Err(AppError::InvalidUpload("A design image is required.".into()));
    }

    let customer_name = required(&intake.customer_name, "customerName")?;
    let email = required(&intake.email, "email")?;
    let phone = required(&intake.phone, "phone")?;
    let width = required(&intake.width, "width")?;
    let height = required(&intake.height, "height")?;
    let quantity_raw = required(&intake.quantity, "quantity")?;
    let quantity: i32 = quantity_raw.parse().map_err(|_| AppError::InvalidQuantity)?;
    if quantity < 1 {
        return Err(AppError::InvalidQuantity);
    }

    Ok(ValidatedIntake {
        customer_name,
        email,
        phone,
        width,
        height,
        quantity,
        additional_details: intake.additional_details.clone().filter(|d| !d.trim().is_empty()),
    })
}

#[derive(Clone)]
pub struct CustomOrderService {
    repo: CustomOrderRepository,
    storage: ImageStorage,
}

impl CustomOrderService {
    pub fn new(repo: CustomOrderRepository, storage: ImageStorage) -> Self {
        Self { repo, storage }
    }

    pub async fn create(&self, intake: CustomOrderIntake) -> Result<CustomOrder, AppError> {
        let validated = validate_intake(&intake)?;
        let (filename, data) = intake
            .image
            .ok_or_else(|| AppError::InvalidUpload("A design image is required.".into()))?;

        let image_url = self.storage.save("designs", &filename, &data).await?;

        let order = self
            .repo
            .insert(
                &validated.customer_name,
                &validated.email,
                &validated.phone,
                &image_url,
                &validated.width,
                &validated.height,
                validated.quantity,
                validated.additional_details.as_deref(),
            )
            .await?;

        tracing::info!(custom_order_id = order.id, "custom order received");
        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<CustomOrder>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<CustomOrder, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::CustomOrderNotFound)
    }

    pub async fn update(
        &self,
        id: i64,
        payload: UpdateCustomOrderPayload,
    ) -> Result<CustomOrder, AppError> {
        let mut order = self.repo.find_by_id(id).await?.ok_or(AppError::CustomOrderNotFound)?;

        if let Some(status) = payload.status {
            order.status = status;
        }
        if let Some(price) = payload.estimated_price {
            order.estimated_price = Some(price);
        }
        if let Some(notes) = payload.admin_notes {
            order.admin_notes = Some(notes);
        }

        self.repo.update(&order).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::CustomOrderNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intake() -> CustomOrderIntake {
        CustomOrderIntake {
            customer_name: Some("Giorgi".into()),
            email: Some("giorgi@example.com".into()),
            phone: Some("+995555000111".into()),
            width: Some("60sm".into()),
            height: Some("80sm".into()),
            quantity: Some("2".into()),
            additional_details: None,
            image: Some(("design.png".into(), vec![1, 2, 3])),
        }
    }

    #[test]
    fn missing_image_is_rejected_first() {
        let mut i = intake();
        i.image = None;
        i.customer_name = None;
        assert!(matches!(validate_intake(&i), Err(AppError::InvalidUpload(_))));
    }

    #[test]
    fn first_missing_field_is_named() {
        let mut i = intake();
        i.phone = Some("  ".into());
        assert!(matches!(validate_intake(&i), Err(AppError::MissingField("phone"))));
    }

    #[test]
    fn quantity_must_be_a_positive_integer() {
        let mut i = intake();
        i.quantity = Some("zero".into());
        assert!(matches!(validate_intake(&i), Err(AppError::InvalidQuantity)));
        i.quantity = Some("0".into());
        assert!(matches!(validate_intake(&i), Err(AppError::InvalidQuantity)));
    }

    #[test]
    fn valid_intake_passes() {
        let v = validate_intake(&intake()).unwrap();
        assert_eq!(v.quantity, 2);
        assert_eq!(v.width, "60sm");
        assert_eq!(v.additional_details, None);
    }
}
