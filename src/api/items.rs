use std::sync::Arc;

use poem_openapi::{
    param::{Header, Path, Query},
    payload::Json,
    ApiResponse, OpenApi, Tags,
};

use crate::errors::api::ItemsError;
use crate::services::ApiKeyService;
use crate::stores::item_store::{ItemChanges, NewItem};
use crate::stores::ItemStore;
use crate::types::dto::items::{AveragePriceResponse, CreateItemRequest, Item, UpdateItemRequest};

/// Items API endpoints
///
/// Reads are open; create/update/delete require the shared API key in the
/// `x-api-key` header.
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
    api_keys: Arc<ApiKeyService>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given store and authorizer
    pub fn new(item_store: Arc<ItemStore>, api_keys: Arc<ApiKeyService>) -> Self {
        Self {
            item_store,
            api_keys,
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

/// Response for item creation
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<Item>),
}

/// Response for item deletion
#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    /// Item deleted
    #[oai(status = 204)]
    Deleted,
}

#[OpenApi(prefix_path = "/items/")]
impl ItemsApi {
    /// Create a new item
    #[oai(path = "/", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        #[oai(name = "x-api-key")] api_key: Header<Option<String>>,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemsError> {
        self.api_keys.authorize(api_key.0.as_deref())?;

        let Json(body) = body;
        let created = self
            .item_store
            .create(NewItem {
                title: body.title,
                description: body.description,
                price: body.price,
            })
            .await?;

        Ok(CreateItemResponse::Created(Json(created.into())))
    }

    /// List items ordered by ID ascending
    ///
    /// `title` filters by case-insensitive substring match.
    #[oai(path = "/", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        #[oai(validator(minimum(value = "1"), maximum(value = "100")))] limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
        title: Query<Option<String>>,
    ) -> Result<Json<Vec<Item>>, ItemsError> {
        let items = self
            .item_store
            .list(limit.0.unwrap_or(10), offset.0.unwrap_or(0), title.0.as_deref())
            .await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Fetch a single item by ID
    #[oai(path = "/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i32>) -> Result<Json<Item>, ItemsError> {
        let item = self.item_store.get(id.0).await?;
        Ok(Json(item.into()))
    }

    /// Partially update an item
    ///
    /// Only the fields present in the body are applied.
    #[oai(path = "/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        #[oai(name = "x-api-key")] api_key: Header<Option<String>>,
        id: Path<i32>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemsError> {
        self.api_keys.authorize(api_key.0.as_deref())?;

        let Json(body) = body;
        let updated = self
            .item_store
            .update(
                id.0,
                ItemChanges {
                    title: body.title,
                    description: body.description,
                    price: body.price,
                },
            )
            .await?;

        Ok(Json(updated.into()))
    }

    /// Permanently delete an item
    #[oai(path = "/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(
        &self,
        #[oai(name = "x-api-key")] api_key: Header<Option<String>>,
        id: Path<i32>,
    ) -> Result<DeleteItemResponse, ItemsError> {
        self.api_keys.authorize(api_key.0.as_deref())?;

        self.item_store.delete(id.0).await?;
        Ok(DeleteItemResponse::Deleted)
    }

    /// Arithmetic mean of all item prices
    #[oai(path = "/meta/average_price", method = "get", tag = "ApiTags::Items")]
    async fn average_price(&self) -> Result<Json<AveragePriceResponse>, ItemsError> {
        let average_price = self.item_store.average_price().await?;
        Ok(Json(AveragePriceResponse { average_price }))
    }
}
