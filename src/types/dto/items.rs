use chrono::DateTime;
use poem_openapi::Object;

use crate::types::db::item;

/// Request model for creating a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Title of the item (1-200 characters)
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item, must not be negative
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
}

/// Request model for partially updating an item
///
/// Absent fields are left untouched.
#[derive(Object, Debug)]
pub struct UpdateItemRequest {
    /// New title (1-200 characters)
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New price, must not be negative
    #[oai(validator(minimum(value = "0")))]
    pub price: Option<f64>,
}

/// Response model representing an item
#[derive(Object, Debug)]
pub struct Item {
    /// Unique identifier for the item
    pub id: i32,

    /// Title of the item
    pub title: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        let created_at = DateTime::from_timestamp(model.created_at, 0)
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default();

        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            created_at,
        }
    }
}

/// Response model for the average price endpoint
#[derive(Object, Debug)]
pub struct AveragePriceResponse {
    /// Arithmetic mean of all item prices, 0.0 when no items exist
    pub average_price: f64,
}
