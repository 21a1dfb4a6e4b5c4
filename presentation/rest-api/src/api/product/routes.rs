use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{
    ApiErrorResponse, ErrorResponse, INTERNAL_ERROR_MESSAGE, IntoErrorResponse,
    ValidationErrorResponse,
};
use crate::api::product::dto::{
    ProductEnvelope, ProductIdEnvelope, ProductPageResponse, ProductRequest, ProductResponse,
};
use crate::api::product::error_mapper::PRODUCT_NOT_FOUND;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
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

/// Ids are integers; anything else cannot name a stored product.
fn parse_id(raw: &str) -> Option<ProductId> {
    raw.parse().ok()
}

fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(PRODUCT_NOT_FOUND))
}

fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))
}

/// Product catalog API
///
/// Endpoints for listing, creating, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// List products page by page
    ///
    /// `page` and `pageSize` default to 1 and 10 and must be integers >= 1.
    /// A page past the end returns an empty `data` array.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        page: Query<Option<String>>,
        #[oai(name = "pageSize")] page_size: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            page: page.0,
            page_size: page_size.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllProductsResponse::Ok(Json(page.into())),
            Err(err) => match err.into_error_response() {
                ApiErrorResponse::Validation(json) => GetAllProductsResponse::BadRequest(json),
                ApiErrorResponse::Message(_status, json) => {
                    GetAllProductsResponse::InternalError(json)
                }
            },
        }
    }

    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            draft: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => match err.into_error_response() {
                ApiErrorResponse::Validation(json) => CreateProductResponse::BadRequest(json),
                ApiErrorResponse::Message(status, json) => match status.as_u16() {
                    404 => CreateProductResponse::NotFound(json),
                    _ => CreateProductResponse::InternalError(json),
                },
            },
        }
    }

    /// Get a product by ID
    ///
    /// Returns the bare product object, not wrapped in `data`.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Some(id) = parse_id(&id.0) else {
            return GetProductByIdResponse::NotFound(not_found());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => match err.into_error_response() {
                ApiErrorResponse::Message(status, json) => match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                },
                // Lookups by id carry no payload to validate
                ApiErrorResponse::Validation(_) => GetProductByIdResponse::InternalError(internal_error()),
            },
        }
    }

    /// Replace a product
    ///
    /// All four fields are rewritten. Unknown ids yield 404.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateProductResponse::NotFound(not_found());
        };

        let params = UpdateProductParams {
            id,
            draft: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.id.into())),
            Err(err) => match err.into_error_response() {
                ApiErrorResponse::Validation(json) => UpdateProductResponse::BadRequest(json),
                ApiErrorResponse::Message(status, json) => match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                },
            },
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return DeleteProductResponse::NotFound(not_found());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(id) => DeleteProductResponse::Ok(Json(id.into())),
            Err(err) => match err.into_error_response() {
                ApiErrorResponse::Message(status, json) => match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                },
                // Lookups by id carry no payload to validate
                ApiErrorResponse::Validation(_) => DeleteProductResponse::InternalError(internal_error()),
            },
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    /// The new row vanished before it could be read back
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(Json(ValidationErrorResponse::malformed_body(&err)))
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductIdEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(Json(ValidationErrorResponse::malformed_body(&err)))
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductIdEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
