use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::ProductError;
use crate::validation;

/// Stock level, always derived from `quantity`
///
/// Declaration order is the sort order, in memory and in the Postgres enum type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "inventory_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryStatus {
    #[sea_orm(string_value = "OUT_OF_STOCK")]
    OutOfStock,
    #[sea_orm(string_value = "LOW_STOCK")]
    LowStock,
    #[sea_orm(string_value = "IN_STOCK")]
    InStock,
}

/// Product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_category")]
pub enum Category {
    #[sea_orm(string_value = "Accessories")]
    Accessories,
    #[sea_orm(string_value = "Clothing")]
    Clothing,
    #[sea_orm(string_value = "Fitness")]
    Fitness,
    #[sea_orm(string_value = "Electronics")]
    Electronics,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    /// Business identifier, unique across every product ever created
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub inventory_status: InventoryStatus,
    pub category: Category,
    /// Image file name or URL
    pub image: Option<String>,
    /// Average rating, 0 to 5
    pub rating: Option<f64>,
    /// Soft-delete flag; deleted products are hidden from every read
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload
///
/// Every field is optional: on create the mandatory ones are checked by
/// [`NewProduct::try_from`], on update absent fields are left untouched.
/// There is no `inventoryStatus`; it is recomputed from `quantity`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Invalid price value: the price must be greater or equal to zero"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Invalid quantity value: the quantity must be greater or equal to zero"))]
    pub quantity: Option<i32>,
    pub category: Option<Category>,
    pub image: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "Invalid rating value: the rating must be between 0 and 5, included"))]
    pub rating: Option<f64>,
}

/// A fully validated [`ProductInput`], the only way to build a [`Product`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub category: Category,
    pub image: Option<String>,
    pub rating: Option<f64>,
}

impl TryFrom<ProductInput> for NewProduct {
    type Error = ProductError;

    /// Mandatory fields first; range checks only run once they are all present.
    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        let missing = validation::missing_mandatory_fields(&input);
        if !missing.is_empty() {
            return Err(ProductError::MissingMandatoryFields(missing));
        }
        validation::check_numeric_ranges(&input)?;

        match input {
            ProductInput {
                code: Some(code),
                name: Some(name),
                price: Some(price),
                category: Some(category),
                description,
                quantity,
                image,
                rating,
            } => Ok(Self {
                code,
                name,
                description,
                price,
                quantity: quantity.unwrap_or(0),
                category,
                image,
                rating,
            }),
            _ => Err(ProductError::Internal(
                "mandatory field check passed with a missing field".to_string(),
            )),
        }
    }
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            code: input.code,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            inventory_status: InventoryStatus::from_quantity(input.quantity),
            category: input.category,
            image: input.image,
            rating: input.rating,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field present in `input`, then recompute the inventory
    /// status. `id` and `deleted` are never touched.
    pub fn apply_patch(&mut self, input: ProductInput) {
        if let Some(code) = input.code {
            self.code = code;
        }
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = Some(description);
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if let Some(quantity) = input.quantity {
            self.quantity = quantity;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if let Some(image) = input.image {
            self.image = Some(image);
        }
        if let Some(rating) = input.rating {
            self.rating = Some(rating);
        }
        self.inventory_status = InventoryStatus::from_quantity(self.quantity);
        self.updated_at = Utc::now();
    }

    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_input() -> ProductInput {
        ProductInput {
            code: Some("f230fh0g3".to_string()),
            name: Some("Bamboo Watch".to_string()),
            price: Some(65.0),
            category: Some(Category::Accessories),
            ..Default::default()
        }
    }

    fn product() -> Product {
        Product::new(NewProduct::try_from(minimal_input()).unwrap())
    }

    #[test]
    fn test_new_product_defaults() {
        let product = product();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.inventory_status, InventoryStatus::OutOfStock);
        assert!(!product.deleted);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_new_product_derives_status_from_quantity() {
        let input = ProductInput {
            quantity: Some(24),
            ..minimal_input()
        };
        let product = Product::new(NewProduct::try_from(input).unwrap());
        assert_eq!(product.inventory_status, InventoryStatus::InStock);
    }

    #[test]
    fn test_try_from_reports_missing_fields_before_ranges() {
        let input = ProductInput {
            name: Some("Bamboo Watch".to_string()),
            price: Some(-1.0),
            ..Default::default()
        };

        let err = NewProduct::try_from(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "New product is missing mandatory field(s) : [code,category]"
        );
    }

    #[test]
    fn test_apply_patch_quantity_only() {
        let mut product = product();
        let before = product.clone();

        product.apply_patch(ProductInput {
            quantity: Some(50),
            ..Default::default()
        });

        assert_eq!(product.quantity, 50);
        assert_eq!(product.inventory_status, InventoryStatus::InStock);
        assert_eq!(product.id, before.id);
        assert_eq!(product.code, before.code);
        assert_eq!(product.name, before.name);
        assert_eq!(product.price, before.price);
        assert_eq!(product.category, before.category);
        assert_eq!(product.description, before.description);
        assert!(!product.deleted);
    }

    #[test]
    fn test_apply_patch_recomputes_status_even_without_quantity() {
        let mut product = product();
        // A stale status must not survive a merge
        product.inventory_status = InventoryStatus::InStock;

        product.apply_patch(ProductInput {
            name: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(product.name, "Renamed");
        assert_eq!(product.inventory_status, InventoryStatus::OutOfStock);
    }

    #[test]
    fn test_apply_patch_keeps_deleted_flag() {
        let mut product = product();
        product.mark_deleted();

        product.apply_patch(ProductInput::default());
        assert!(product.deleted);
    }

    #[test]
    fn test_product_json_is_camel_case() {
        let json = serde_json::to_value(product()).unwrap();
        assert_eq!(json["inventoryStatus"], "OUT_OF_STOCK");
        assert_eq!(json["category"], "Accessories");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("inventory_status").is_none());
    }

    #[test]
    fn test_product_input_ignores_inventory_status() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "quantity": 3,
            "inventoryStatus": "IN_STOCK",
            "description": null
        }))
        .unwrap();

        assert_eq!(input.quantity, Some(3));
        assert_eq!(input.description, None);
    }
}
