//! # Catalog Domain
//!
//! Categories and the products that belong to them, exposed as a CRUD HTTP
//! API with a `{"message", "data"?}` response envelope.
//!
//! ## Architecture
//!
//! ```text
//! handlers (axum + utoipa)
//!     │
//! CatalogService (validation, check ordering, restrict policy)
//!     │
//! CategoryRepository / ProductRepository (traits)
//!     │
//! PgCategoryRepository / PgProductRepository (SeaORM)
//! InMemoryCatalog (tests, local development)
//! ```
//!
//! The service layer holds every behavioral rule: empty collections are
//! reported as not found, product writes require all fields present (a zero
//! price is valid), the referenced category must exist, and a category with
//! products cannot be deleted.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use models::{ApiMessage, Category, CategoryInput, Product, ProductData, ProductInput};
pub use postgres::{PgCategoryRepository, PgProductRepository};
pub use repository::{CategoryRepository, InMemoryCatalog, ProductRepository};
pub use service::CatalogService;
