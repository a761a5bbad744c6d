use crate::api::event::{ApiGatewayEvent, ApiResponse};
use crate::domain::model::{Item, NewItem};
use crate::domain::ports::ItemTable;
use crate::utils::error::RecordsError;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

pub const ITEMS_PATH: &str = "/items";
const ITEM_PATH_PREFIX: &str = "/items/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ListItems,
    CreateItem,
    GetItem(String),
    DeleteItem(String),
    NotFound,
}

impl Route {
    /// 依 method 與 path 分類請求；`{id}` 優先取自 pathParameters
    pub fn from_event(event: &ApiGatewayEvent) -> Self {
        let method = event.http_method.as_str();
        let path = event.path.as_str();

        match (method, path) {
            ("GET", ITEMS_PATH) => Route::ListItems,
            ("POST", ITEMS_PATH) => Route::CreateItem,
            ("GET" | "DELETE", _) if path.starts_with(ITEM_PATH_PREFIX) => {
                let id = event
                    .path_parameter("id")
                    .or_else(|| path.strip_prefix(ITEM_PATH_PREFIX))
                    .unwrap_or_default();

                if id.is_empty() {
                    Route::NotFound
                } else if method == "GET" {
                    Route::GetItem(id.to_string())
                } else {
                    Route::DeleteItem(id.to_string())
                }
            }
            _ => Route::NotFound,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(#[from] RecordsError),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// 內部錯誤細節只寫入日誌，不回傳給呼叫端
    pub fn into_response(self) -> ApiResponse {
        let status_code = self.status_code();
        match self {
            ApiError::BadRequest(message) | ApiError::NotFound(message) => {
                ApiResponse::error(status_code, message)
            }
            ApiError::Internal(e) => {
                tracing::error!("❌ Request failed: {} (Category: {:?})", e, e.category());
                ApiResponse::error(500, "Internal server error")
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ItemList {
    items: Vec<Item>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

/// CRUD handler for the items resource.
///
/// Stateless between invocations; the table is the only shared dependency.
pub struct ItemsHandler<T: ItemTable> {
    table: T,
}

impl<T: ItemTable> ItemsHandler<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub async fn handle(&self, event: &ApiGatewayEvent) -> ApiResponse {
        let route = Route::from_event(event);
        tracing::debug!("{} {} -> {:?}", event.http_method, event.path, route);

        let result = match route {
            Route::ListItems => self.list_items().await,
            Route::CreateItem => self.create_item(event.body.as_deref()).await,
            Route::GetItem(id) => self.get_item(&id).await,
            Route::DeleteItem(id) => self.delete_item(&id).await,
            Route::NotFound => Err(ApiError::NotFound("Not found")),
        };

        result.unwrap_or_else(ApiError::into_response)
    }

    /// Full table scan, returned in one response.
    pub async fn list_items(&self) -> Result<ApiResponse, ApiError> {
        let items = self.table.scan().await?;
        let count = items.len();
        tracing::debug!("Listing {} items", count);

        Ok(ApiResponse::json(200, &ItemList { items, count })?)
    }

    pub async fn create_item(&self, body: Option<&str>) -> Result<ApiResponse, ApiError> {
        let body = body
            .filter(|body| !body.is_empty())
            .ok_or(ApiError::BadRequest("Request body is required"))?;

        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|_| ApiError::BadRequest("Invalid request body"))?;
        if !value.is_object() {
            return Err(ApiError::BadRequest("Invalid request body"));
        }
        let new_item: NewItem =
            serde_json::from_value(value).map_err(|_| ApiError::BadRequest("Invalid request body"))?;

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let item = Item {
            id: uuid::Uuid::new_v4().to_string(),
            name: new_item.name.unwrap_or_default(),
            description: new_item.description.unwrap_or_default(),
            created_at: now.clone(),
            updated_at: now,
        };

        self.table.put(&item).await?;
        tracing::info!("Created item {}", item.id);

        Ok(ApiResponse::json(201, &item)?)
    }

    pub async fn get_item(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let item = self
            .table
            .get(id)
            .await?
            .ok_or(ApiError::NotFound("Item not found"))?;

        Ok(ApiResponse::json(200, &item)?)
    }

    /// Existence check and delete are separate table calls; a concurrent
    /// writer can slip in between them.
    pub async fn delete_item(&self, id: &str) -> Result<ApiResponse, ApiError> {
        if self.table.get(id).await?.is_none() {
            return Err(ApiError::NotFound("Item not found"));
        }

        self.table.delete(id).await?;
        tracing::info!("Deleted item {}", id);

        Ok(ApiResponse::json(
            200,
            &Message {
                message: "Item deleted successfully",
            },
        )?)
    }
}
