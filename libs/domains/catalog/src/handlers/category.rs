use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    AppError,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::models::{ApiMessage, Category, CategoryInput, Product};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::CatalogService;

/// OpenAPI documentation for the category endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
        list_category_products,
    ),
    components(
        schemas(Category, CategoryInput, Product),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::category::Model::TAG, description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the category router with all HTTP endpoints
pub fn router<C, P>(service: CatalogService<C, P>) -> Router
where
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/{id}/products", get(list_category_products))
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = entity::category::Model::TAG,
    responses(
        (status = 200, description = "All categories", body = ApiMessage<Vec<Category>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
) -> Result<Json<ApiMessage<Vec<Category>>>, AppError> {
    let categories = service.list_categories().await?;
    Ok(Json(ApiMessage::with_data("Categories retrieved", categories)))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = entity::category::Model::TAG,
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category created", body = ApiMessage<Category>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    body: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<Json<ApiMessage<Category>>, AppError> {
    let Json(input) = body?;
    let category = service.create_category(input).await?;
    Ok(Json(ApiMessage::with_data("Category created", category)))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::category::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiMessage<Category>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage<Category>>, AppError> {
    let category = service.get_category(id).await?;
    Ok(Json(ApiMessage::with_data("Category retrieved", category)))
}

/// Replace a category's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::category::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = ApiMessage<Category>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
    body: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<Json<ApiMessage<Category>>, AppError> {
    let Json(input) = body?;
    let category = service.update_category(id, input).await?;
    Ok(Json(ApiMessage::with_data("Category updated", category)))
}

/// Delete a category
///
/// Deletion is rejected with 409 while products still reference the category.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::category::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiMessage<Category>),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage<Category>>, AppError> {
    service.delete_category(id).await?;
    Ok(Json(ApiMessage::message_only("Category deleted")))
}

/// List the products of a category
///
/// A category with no products yields 200 with an empty list.
#[utoipa::path(
    get,
    path = "/{id}/products",
    tag = entity::category::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Products of the category", body = ApiMessage<Vec<Product>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_category_products<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage<Vec<Product>>>, AppError> {
    let (_, products) = service.category_products(id).await?;
    Ok(Json(ApiMessage::with_data("Category products retrieved", products)))
}
