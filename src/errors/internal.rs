use thiserror::Error;

/// Internal error type for repository operations
///
/// Not exposed via API - endpoints must convert to ItemsError.
#[derive(Error, Debug)]
pub enum ItemStoreError {
    #[error("Item with ID {0} not found")]
    NotFound(i32),

    #[error("Constraint violation: {source}")]
    Conflict {
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Starting transaction failed: {source}")]
    TransactionBegin {
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Committing transaction failed: {source}")]
    TransactionCommit {
        #[source]
        source: sea_orm::DbErr,
    },
}

impl ItemStoreError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        ItemStoreError::Database {
            operation: operation.to_string(),
            source,
        }
    }
}
