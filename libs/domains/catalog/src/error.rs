use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Domain errors for the catalog.
///
/// These carry the domain meaning; the HTTP mapping lives in the
/// `From<CatalogError> for AppError` impl below.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No categories found")]
    NoCategories,

    #[error("No products found")]
    NoProducts,

    #[error("Category {0} not found")]
    CategoryNotFound(i32),

    #[error("Product {0} not found")]
    ProductNotFound(i32),

    #[error("No data provided")]
    EmptyBody,

    #[error("Incomplete data: name, price and category are required")]
    MissingFields,

    #[error("Category {0} does not exist")]
    UnknownCategory(i32),

    #[error("Category {id} still has {products} products")]
    CategoryInUse { id: i32, products: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::NoCategories
            | CatalogError::NoProducts
            | CatalogError::CategoryNotFound(_)
            | CatalogError::ProductNotFound(_) => AppError::NotFound(message),
            CatalogError::EmptyBody
            | CatalogError::MissingFields
            | CatalogError::UnknownCategory(_) => AppError::BadRequest(message),
            CatalogError::CategoryInUse { .. } => AppError::Conflict(message),
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
