use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::item::input::ItemInput;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::GetAllItemsUseCase;
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemRequest, ItemResponse};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| {
        Json(ErrorResponse::new(
            poem::http::StatusCode::BAD_REQUEST,
            "ValidationError",
            "item.invalid_id",
        ))
    })
}

fn parse_input(body: ItemRequest) -> Result<ItemInput, Json<ErrorResponse>> {
    ItemInput::new(body.name, body.description, body.quantity)
        .map_err(|violations| Json(ErrorResponse::validation(violations)))
}

/// Shopping list management API
///
/// Endpoints for managing shopping list items.
#[OpenApi]
impl ItemApi {
    /// Create an item
    ///
    /// Adds a new item to the shopping list. The item name must not be in
    /// use by any existing item.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, body: Json<ItemRequest>) -> CreateItemResponse {
        let input = match parse_input(body.0) {
            Ok(input) => input,
            Err(json) => return CreateItemResponse::BadRequest(json),
        };

        match self
            .create_use_case
            .execute(CreateItemParams { input })
            .await
        {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => CreateItemResponse::Conflict(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List all items
    ///
    /// Returns every shopping list item, newest first.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all(&self) -> GetAllItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllItemsResponse::InternalError(json)
            }
        }
    }

    /// Get an item by ID
    ///
    /// Returns a single shopping list item.
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_by_id(&self, id: Path<String>) -> GetItemByIdResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return GetItemByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams { id: uuid })
            .await
        {
            Ok(item) => GetItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemByIdResponse::NotFound(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// Replaces name, description, and quantity wholesale and refreshes the
    /// update timestamp.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update(&self, id: Path<String>, body: Json<ItemRequest>) -> UpdateItemResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return UpdateItemResponse::BadRequest(json),
        };

        let input = match parse_input(body.0) {
            Ok(input) => input,
            Err(json) => return UpdateItemResponse::BadRequest(json),
        };

        match self
            .update_use_case
            .execute(UpdateItemParams { id: uuid, input })
            .await
        {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateItemResponse::NotFound(json),
                    409 => UpdateItemResponse::Conflict(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Permanently removes an item from the shopping list.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<String>) -> DeleteItemResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return DeleteItemResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteItemParams { id: uuid })
            .await
        {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
