use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::errors::internal::ItemStoreError;
use crate::types::db::item;

/// Input for inserting a new item row
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Partial update for an item
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ItemChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// ItemStore mediates all reads and writes of items against the database
///
/// The connection handle is passed in at construction; the store never
/// reaches for ambient global state. Payload shape is validated at the API
/// boundary - the store only enforces referential existence and surfaces
/// constraint violations from the database.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new item and return the persisted row
    ///
    /// # Returns
    /// * `Ok(item::Model)` - The created item with generated `id` and `created_at`
    /// * `Err(ItemStoreError)` - Conflict if the store rejects the insert
    pub async fn create(&self, input: NewItem) -> Result<item::Model, ItemStoreError> {
        tracing::info!(title = %input.title, "creating item");

        let created = Self::insert_item(&self.db, input).await?;

        tracing::info!(id = created.id, "item created");
        Ok(created)
    }

    /// List items ordered by ID ascending
    ///
    /// Returns at most `limit` items starting at `offset`. The optional
    /// `title_filter` matches substrings case-insensitively. No total count
    /// is returned.
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
        title_filter: Option<&str>,
    ) -> Result<Vec<item::Model>, ItemStoreError> {
        tracing::debug!(limit, offset, title_filter, "listing items");

        let mut query = item::Entity::find();
        if let Some(fragment) = title_filter {
            let pattern = format!("%{}%", fragment.to_lowercase());
            query = query.filter(Expr::expr(Func::lower(Expr::col(item::Column::Title))).like(pattern));
        }

        query
            .order_by_asc(item::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ItemStoreError::database("list_items", e))
    }

    /// Fetch a single item by ID
    pub async fn get(&self, id: i32) -> Result<item::Model, ItemStoreError> {
        let item = item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ItemStoreError::database("get_item", e))?;

        match item {
            Some(model) => Ok(model),
            None => {
                tracing::warn!(id, "item not found");
                Err(ItemStoreError::NotFound(id))
            }
        }
    }

    /// Apply a partial update to an item
    ///
    /// Only the fields present in `changes` are written; everything else is
    /// left as it was. An empty patch returns the current row without
    /// touching the database.
    pub async fn update(
        &self,
        id: i32,
        changes: ItemChanges,
    ) -> Result<item::Model, ItemStoreError> {
        tracing::info!(id, "updating item");

        let existing = self.get(id).await?;
        if changes.is_empty() {
            return Ok(existing);
        }

        let mut active: item::ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| Self::write_error("update_item", e))?;

        tracing::info!(id = updated.id, "item updated");
        Ok(updated)
    }

    /// Permanently delete an item
    pub async fn delete(&self, id: i32) -> Result<(), ItemStoreError> {
        tracing::warn!(id, "deleting item");

        let result = item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ItemStoreError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            tracing::warn!(id, "item not found");
            return Err(ItemStoreError::NotFound(id));
        }

        tracing::info!(id, "item deleted");
        Ok(())
    }

    /// Arithmetic mean of all item prices, 0.0 when the table is empty
    pub async fn average_price(&self) -> Result<f64, ItemStoreError> {
        let row = item::Entity::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col(item::Column::Price))),
                "value",
            )
            .into_model::<AveragePriceRow>()
            .one(&self.db)
            .await
            .map_err(|e| ItemStoreError::database("average_price", e))?;

        let average = row.and_then(|r| r.value).unwrap_or(0.0);
        tracing::debug!(average, "average price calculated");
        Ok(average)
    }

    /// Create a new item and optionally retitle an existing one, atomically
    ///
    /// Both writes happen inside a single transaction. If the linked target
    /// does not exist, or any step fails, the whole transaction is rolled
    /// back - including the new item's insert - before the error propagates.
    /// The caller observes either both writes applied or neither.
    pub async fn create_with_linked_update(
        &self,
        input: NewItem,
        retitle: Option<(i32, String)>,
    ) -> Result<item::Model, ItemStoreError> {
        tracing::info!(title = %input.title, "starting linked-create transaction");

        let txn = self
            .db
            .begin()
            .await
            .map_err(|source| ItemStoreError::TransactionBegin { source })?;

        let created = match Self::insert_item(&txn, input).await {
            Ok(model) => model,
            Err(err) => return Self::abort(txn, err).await,
        };

        if let Some((existing_id, new_title)) = retitle {
            tracing::info!(existing_id, new_title = %new_title, "retitling linked item");

            let found = match item::Entity::find_by_id(existing_id).one(&txn).await {
                Ok(found) => found,
                Err(e) => {
                    return Self::abort(txn, ItemStoreError::database("find_linked_item", e)).await
                }
            };
            let Some(existing) = found else {
                return Self::abort(txn, ItemStoreError::NotFound(existing_id)).await;
            };

            let mut active: item::ActiveModel = existing.into();
            active.title = Set(new_title);
            if let Err(e) = active.update(&txn).await {
                return Self::abort(txn, Self::write_error("retitle_linked_item", e)).await;
            }
        }

        txn.commit()
            .await
            .map_err(|source| ItemStoreError::TransactionCommit { source })?;

        tracing::info!(id = created.id, "linked-create transaction committed");
        Ok(created)
    }

    async fn insert_item(
        conn: &impl ConnectionTrait,
        input: NewItem,
    ) -> Result<item::Model, ItemStoreError> {
        let active = item::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            price: Set(input.price),
            created_at: Set(Utc::now().timestamp()),
        };

        active
            .insert(conn)
            .await
            .map_err(|e| Self::write_error("create_item", e))
    }

    /// Roll back the transaction and surface the error that caused it
    async fn abort<T>(
        txn: DatabaseTransaction,
        err: ItemStoreError,
    ) -> Result<T, ItemStoreError> {
        tracing::error!(error = %err, "rolling back linked-create transaction");

        if let Err(rollback_err) = txn.rollback().await {
            tracing::error!(error = %rollback_err, "rollback failed");
        }
        Err(err)
    }

    fn write_error(operation: &str, e: DbErr) -> ItemStoreError {
        // Unique and foreign key violations come through sql_err(); SQLite
        // reports CHECK failures only in the message text.
        if e.sql_err().is_some() || e.to_string().contains("constraint") {
            ItemStoreError::Conflict { source: e }
        } else {
            ItemStoreError::database(operation, e)
        }
    }
}

#[derive(FromQueryResult)]
struct AveragePriceRow {
    value: Option<f64>,
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore").field("db", &"<connection>").finish()
    }
}
