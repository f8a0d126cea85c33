use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::internal::ItemStoreError;

/// Standardized error response for item endpoints
#[derive(Object, Debug)]
pub struct ItemErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// API key header is missing
    #[oai(status = 401)]
    MissingApiKey(Json<ItemErrorResponse>),

    /// API key does not match the configured secret
    #[oai(status = 401)]
    InvalidApiKey(Json<ItemErrorResponse>),

    /// No item exists with the requested ID
    #[oai(status = 404)]
    NotFound(Json<ItemErrorResponse>),

    /// The store rejected the write (constraint violation)
    #[oai(status = 400)]
    Conflict(Json<ItemErrorResponse>),

    /// A multi-step write failed and was rolled back
    #[oai(status = 400)]
    TransactionFailed(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

impl ItemsError {
    /// Create a MissingApiKey error
    pub fn missing_api_key() -> Self {
        ItemsError::MissingApiKey(Json(ItemErrorResponse {
            error: "missing_api_key".to_string(),
            message: "API key is missing".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InvalidApiKey error
    pub fn invalid_api_key() -> Self {
        ItemsError::InvalidApiKey(Json(ItemErrorResponse {
            error: "invalid_api_key".to_string(),
            message: "Invalid API key".to_string(),
            status_code: 401,
        }))
    }

    /// Create a NotFound error for the given item ID
    pub fn not_found(id: i32) -> Self {
        ItemsError::NotFound(Json(ItemErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("Item with ID {} not found", id),
            status_code: 404,
        }))
    }

    /// Create a Conflict error carrying the underlying cause
    pub fn conflict(message: String) -> Self {
        ItemsError::Conflict(Json(ItemErrorResponse {
            error: "conflict".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create a TransactionFailed error carrying the underlying cause
    pub fn transaction_failed(message: String) -> Self {
        ItemsError::TransactionFailed(Json(ItemErrorResponse {
            error: "transaction_failed".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        ItemsError::InternalError(Json(ItemErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemsError::MissingApiKey(json) => json.0.message.clone(),
            ItemsError::InvalidApiKey(json) => json.0.message.clone(),
            ItemsError::NotFound(json) => json.0.message.clone(),
            ItemsError::Conflict(json) => json.0.message.clone(),
            ItemsError::TransactionFailed(json) => json.0.message.clone(),
            ItemsError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<ItemStoreError> for ItemsError {
    fn from(err: ItemStoreError) -> Self {
        match err {
            ItemStoreError::NotFound(id) => ItemsError::not_found(id),
            err @ ItemStoreError::Conflict { .. } => ItemsError::conflict(err.to_string()),
            err @ (ItemStoreError::TransactionBegin { .. }
            | ItemStoreError::TransactionCommit { .. }) => {
                ItemsError::transaction_failed(err.to_string())
            }
            err @ ItemStoreError::Database { .. } => ItemsError::internal_error(err.to_string()),
        }
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404_variant() {
        let err = ItemsError::from(ItemStoreError::NotFound(42));
        match err {
            ItemsError::NotFound(json) => {
                assert_eq!(json.0.status_code, 404);
                assert!(json.0.message.contains("42"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn store_conflict_maps_to_400_with_cause() {
        let source = sea_orm::DbErr::Custom("UNIQUE constraint failed".to_string());
        let err = ItemsError::from(ItemStoreError::Conflict { source });
        match err {
            ItemsError::Conflict(json) => {
                assert_eq!(json.0.status_code, 400);
                assert!(json.0.message.contains("UNIQUE constraint failed"));
            }
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn transaction_failure_maps_to_400() {
        let source = sea_orm::DbErr::Custom("disk full".to_string());
        let err = ItemsError::from(ItemStoreError::TransactionCommit { source });
        match err {
            ItemsError::TransactionFailed(json) => assert_eq!(json.0.status_code, 400),
            other => panic!("Expected TransactionFailed, got {:?}", other),
        }
    }
}
