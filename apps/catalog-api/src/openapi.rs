//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Category and product catalog CRUD API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/category", api = domain_catalog::handlers::category::ApiDoc),
        (path = "/api/product", api = domain_catalog::handlers::product::ApiDoc)
    ),
    tags(
        (name = "Category", description = "Category management endpoints"),
        (name = "Product", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;
