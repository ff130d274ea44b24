//! Shopping-list item handlers.
//!
//! ```text
//! GET    /items
//! POST   /items          {"name":"popsicle","price":1.45}
//! GET    /items/{name}
//! PATCH  /items/{name}   {"name":"new popsicle","price":2.45}
//! DELETE /items/{name}
//! ```

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, delete, get, patch, post, web};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Item, ItemFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ItemSchema};
use crate::inbound::http::state::HttpState;

/// Message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Deleted";

/// Request body for create and update.
///
/// Both fields are optional on the wire; create applies its own presence
/// check and update copies whatever arrived. `price` must be a JSON number:
/// a quoted price such as `"2"` is rejected with 400 rather than stored as
/// text.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ItemPayload {
    #[schema(example = "popsicle")]
    pub name: Option<String>,
    #[schema(example = 1.45)]
    pub price: Option<f64>,
}

impl From<ItemPayload> for ItemFields {
    fn from(value: ItemPayload) -> Self {
        let ItemPayload { name, price } = value;
        Self { name, price }
    }
}

/// Item body extractor that reads a missing body as `{}`.
///
/// Requests that carry a body go through [`web::Json`], so the registered
/// `JsonConfig` still rejects malformed or non-JSON payloads.
#[derive(Debug)]
pub struct ItemBody(pub ItemPayload);

impl ItemBody {
    fn is_absent(req: &HttpRequest) -> bool {
        let headers = req.headers();
        if headers.contains_key(header::CONTENT_TYPE)
            || headers.contains_key(header::TRANSFER_ENCODING)
        {
            return false;
        }
        headers
            .get(header::CONTENT_LENGTH)
            .is_none_or(|len| len.as_bytes() == b"0")
    }
}

impl FromRequest for ItemBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if Self::is_absent(req) {
            return Box::pin(async { Ok(Self(ItemPayload::default())) });
        }
        let json = web::Json::<ItemPayload>::from_request(req, payload);
        Box::pin(async move { Ok(Self(json.await?.into_inner())) })
    }
}

/// `{ "items": [...] }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsResponse {
    #[schema(value_type = Vec<ItemSchema>)]
    pub items: Vec<Item>,
}

/// `{ "item": {...} }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    #[schema(value_type = ItemSchema)]
    pub item: Item,
}

/// `{ "message": "Deleted" }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Deleted")]
    pub message: String,
}

/// List every item in insertion order.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = ItemsResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<ItemsResponse>> {
    let items = state.items.list_items().await?;
    Ok(web::Json(ItemsResponse { items }))
}

/// Append an item to the list.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Neither name nor price supplied", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    body: ItemBody,
) -> ApiResult<HttpResponse> {
    let item = state
        .items_command
        .create_item(body.0.into())
        .await?;
    Ok(HttpResponse::Created().json(ItemResponse { item }))
}

/// Fetch the first item with the given name.
#[utoipa::path(
    get,
    path = "/items/{name}",
    params(
        ("name" = String, Path, description = "Exact, case-sensitive item name")
    ),
    responses(
        (status = 200, description = "Matching item", body = ItemResponse),
        (status = 404, description = "No item with that name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{name}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<web::Json<ItemResponse>> {
    let item = state.items.get_item(&name).await?;
    Ok(web::Json(ItemResponse { item }))
}

/// Overwrite both fields of the first item with the given name.
///
/// Fields missing from the body become absent on the stored item; a request
/// without a body clears both. A missing name answers 404 regardless of the
/// body.
#[utoipa::path(
    patch,
    path = "/items/{name}",
    request_body = ItemPayload,
    params(
        ("name" = String, Path, description = "Exact, case-sensitive item name")
    ),
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 400, description = "Unreadable body", body = ErrorSchema),
        (status = 404, description = "No item with that name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[patch("/items/{name}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    name: web::Path<String>,
    body: ItemBody,
) -> ApiResult<web::Json<ItemResponse>> {
    let item = state
        .items_command
        .update_item(&name, body.0.into())
        .await?;
    Ok(web::Json(ItemResponse { item }))
}

/// Remove the first item with the given name.
#[utoipa::path(
    delete,
    path = "/items/{name}",
    params(
        ("name" = String, Path, description = "Exact, case-sensitive item name")
    ),
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "No item with that name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{name}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.items_command.delete_item(&name).await?;
    Ok(web::Json(MessageResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}

/// Register the item routes on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use shopping_list::inbound::http::items::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_items)
        .service(create_item)
        .service(get_item)
        .service(update_item)
        .service(delete_item);
}
