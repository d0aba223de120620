use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    AppError,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::models::{ApiMessage, Product, ProductInput};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::CatalogService;

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        list_products_by_category,
    ),
    components(
        schemas(Product, ProductInput),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::product::Model::TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<C, P>(service: CatalogService<C, P>) -> Router
where
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/category/{id}", get(list_products_by_category))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = entity::product::Model::TAG,
    responses(
        (status = 200, description = "All products", body = ApiMessage<Vec<Product>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
) -> Result<Json<ApiMessage<Vec<Product>>>, AppError> {
    let products = service.list_products().await?;
    Ok(Json(ApiMessage::with_data("Products retrieved", products)))
}

/// Create a new product
///
/// The body is optional at the extractor level so that a missing body can be
/// reported as "no data provided" rather than a generic extractor failure.
#[utoipa::path(
    post,
    path = "",
    tag = entity::product::Model::TAG,
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product created", body = ApiMessage<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    body: Option<Json<ProductInput>>,
) -> Result<Json<ApiMessage<Product>>, AppError> {
    let product = service.create_product(body.map(|Json(b)| b)).await?;
    Ok(Json(ApiMessage::with_data("Product created", product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::product::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiMessage<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage<Product>>, AppError> {
    let product = service.get_product(id).await?;
    Ok(Json(ApiMessage::with_data("Product retrieved", product)))
}

/// Replace a product's fields
///
/// Full-replace semantics: all three fields are required even for a partial
/// change.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::product::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ApiMessage<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
    body: Option<Json<ProductInput>>,
) -> Result<Json<ApiMessage<Product>>, AppError> {
    let product = service.update_product(id, body.map(|Json(b)| b)).await?;
    Ok(Json(ApiMessage::with_data("Product updated", product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::product::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiMessage<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage<Product>>, AppError> {
    service.delete_product(id).await?;
    Ok(Json(ApiMessage::message_only("Product deleted")))
}

/// List products belonging to a category
///
/// The message names the category; an existing category with no products
/// yields 200 with an empty list.
#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = entity::product::Model::TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Products in the category", body = ApiMessage<Vec<Product>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products_by_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CatalogService<C, P>>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiMessage<Vec<Product>>>, AppError> {
    let (category, products) = service.category_products(id).await?;
    Ok(Json(ApiMessage::with_data(
        format!("Products in category: {}", category.name),
        products,
    )))
}
