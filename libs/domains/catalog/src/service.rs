use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryInput, Product, ProductData, ProductInput};
use crate::repository::{CategoryRepository, ProductRepository};

/// Business logic over the two catalog repositories.
///
/// The service owns all validation: list emptiness, presence of required
/// product fields, category existence for product writes, and the restrict
/// policy for category deletion. Repositories stay thin.
pub struct CatalogService<C, P> {
    categories: Arc<C>,
    products: Arc<P>,
}

// Derived Clone would bound C and P, the Arcs make it unconditional.
impl<C, P> Clone for CatalogService<C, P> {
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
            products: Arc::clone(&self.products),
        }
    }
}

impl<C, P> CatalogService<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    pub fn new(categories: C, products: P) -> Self {
        Self {
            categories: Arc::new(categories),
            products: Arc::new(products),
        }
    }

    /// Lists all categories; an empty catalog is reported as not found.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let categories = self.categories.list().await?;
        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        Ok(categories)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(&self, input: CategoryInput) -> CatalogResult<Category> {
        self.categories.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i32) -> CatalogResult<Category> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn update_category(&self, id: i32, input: CategoryInput) -> CatalogResult<Category> {
        self.categories.update(id, input).await
    }

    /// Deletes a category. Rejected with a conflict while any product still
    /// references it.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> CatalogResult<()> {
        self.get_category(id).await?;

        let products = self.products.count_by_category(id).await?;
        if products > 0 {
            return Err(CatalogError::CategoryInUse { id, products });
        }

        if !self.categories.delete(id).await? {
            return Err(CatalogError::CategoryNotFound(id));
        }
        Ok(())
    }

    /// Returns a category together with its products. An existing category
    /// with no products yields an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn category_products(&self, id: i32) -> CatalogResult<(Category, Vec<Product>)> {
        let category = self.get_category(id).await?;
        let products = self.products.list_by_category(id).await?;
        Ok((category, products))
    }

    /// Lists all products; an empty catalog is reported as not found.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.list().await?;
        if products.is_empty() {
            return Err(CatalogError::NoProducts);
        }
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> CatalogResult<Product> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Creates a product.
    ///
    /// Checks run in a fixed order so the client always gets the most
    /// fundamental failure first: no categories exist at all, then a missing
    /// body, then missing fields, then an unknown category id. Field values
    /// themselves are not judged, a present zero price is valid.
    #[instrument(skip(self, body))]
    pub async fn create_product(&self, body: Option<ProductInput>) -> CatalogResult<Product> {
        if self.categories.list().await?.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        let data = self.validate_body(body).await?;
        self.products.create(data).await
    }

    /// Replaces a product. The same body checks as creation apply, after the
    /// product itself has been found.
    #[instrument(skip(self, body))]
    pub async fn update_product(&self, id: i32, body: Option<ProductInput>) -> CatalogResult<Product> {
        self.get_product(id).await?;
        let data = self.validate_body(body).await?;
        self.products.update(id, data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> CatalogResult<()> {
        if !self.products.delete(id).await? {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(())
    }

    async fn validate_body(&self, body: Option<ProductInput>) -> CatalogResult<ProductData> {
        let input = body.ok_or(CatalogError::EmptyBody)?;
        let data = input.into_data().ok_or(CatalogError::MissingFields)?;
        self.categories
            .get_by_id(data.category_id)
            .await?
            .ok_or(CatalogError::UnknownCategory(data.category_id))?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockCategoryRepository, MockProductRepository};

    fn beverages() -> Category {
        Category {
            id: 1,
            name: "Beverages".to_string(),
        }
    }

    fn cola_input() -> ProductInput {
        ProductInput {
            name: Some("Cola".to_string()),
            price: Some(4.5),
            category: Some(1),
        }
    }

    fn cola() -> Product {
        Product {
            id: 1,
            name: "Cola".to_string(),
            price: 4.5,
            category: beverages(),
        }
    }

    #[tokio::test]
    async fn test_list_categories_empty_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![]));
        let products = MockProductRepository::new();

        let service = CatalogService::new(categories, products);
        let result = service.list_categories().await;
        assert!(matches!(result, Err(CatalogError::NoCategories)));
    }

    #[tokio::test]
    async fn test_create_product_requires_some_category_first() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![]));
        let products = MockProductRepository::new();

        let service = CatalogService::new(categories, products);
        // The catalog being empty wins over the missing body
        let result = service.create_product(None).await;
        assert!(matches!(result, Err(CatalogError::NoCategories)));
    }

    #[tokio::test]
    async fn test_create_product_missing_body() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![beverages()]));
        let products = MockProductRepository::new();

        let service = CatalogService::new(categories, products);
        let result = service.create_product(None).await;
        assert!(matches!(result, Err(CatalogError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_create_product_missing_fields() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![beverages()]));
        let products = MockProductRepository::new();

        let service = CatalogService::new(categories, products);
        let body = ProductInput {
            name: Some("Cola".to_string()),
            price: None,
            category: Some(1),
        };
        let result = service.create_product(Some(body)).await;
        assert!(matches!(result, Err(CatalogError::MissingFields)));
    }

    #[tokio::test]
    async fn test_create_product_unknown_category() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![beverages()]));
        categories
            .expect_get_by_id()
            .withf(|id| *id == 99)
            .returning(|_| Ok(None));
        let products = MockProductRepository::new();

        let service = CatalogService::new(categories, products);
        let body = ProductInput {
            category: Some(99),
            ..cola_input()
        };
        let result = service.create_product(Some(body)).await;
        assert!(matches!(result, Err(CatalogError::UnknownCategory(99))));
    }

    #[tokio::test]
    async fn test_create_product_accepts_zero_price() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![beverages()]));
        categories
            .expect_get_by_id()
            .returning(|_| Ok(Some(beverages())));
        let mut products = MockProductRepository::new();
        products.expect_create().returning(|data| {
            Ok(Product {
                id: 1,
                name: data.name,
                price: data.price,
                category: beverages(),
            })
        });

        let service = CatalogService::new(categories, products);
        let body = ProductInput {
            price: Some(0.0),
            ..cola_input()
        };
        let product = service.create_product(Some(body)).await.unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[tokio::test]
    async fn test_update_product_checks_existence_before_body() {
        let categories = MockCategoryRepository::new();
        let mut products = MockProductRepository::new();
        products.expect_get_by_id().returning(|_| Ok(None));

        let service = CatalogService::new(categories, products);
        // Missing body, but the unknown product id is reported first
        let result = service.update_product(42, None).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_category_in_use_is_conflict() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_get_by_id()
            .returning(|_| Ok(Some(beverages())));
        let mut products = MockProductRepository::new();
        products.expect_count_by_category().returning(|_| Ok(3));

        let service = CatalogService::new(categories, products);
        let result = service.delete_category(1).await;
        assert!(matches!(
            result,
            Err(CatalogError::CategoryInUse { id: 1, products: 3 })
        ));
    }

    #[tokio::test]
    async fn test_delete_category_without_products() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_get_by_id()
            .returning(|_| Ok(Some(beverages())));
        categories.expect_delete().returning(|_| Ok(true));
        let mut products = MockProductRepository::new();
        products.expect_count_by_category().returning(|_| Ok(0));

        let service = CatalogService::new(categories, products);
        assert!(service.delete_category(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_category_products_empty_list_is_ok() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_get_by_id()
            .returning(|_| Ok(Some(beverages())));
        let mut products = MockProductRepository::new();
        products.expect_list_by_category().returning(|_| Ok(vec![]));

        let service = CatalogService::new(categories, products);
        let (category, products) = service.category_products(1).await.unwrap();
        assert_eq!(category.name, "Beverages");
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_product() {
        let categories = MockCategoryRepository::new();
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .returning(|_| Ok(Some(cola())));

        let service = CatalogService::new(categories, products);
        let product = service.get_product(1).await.unwrap();
        assert_eq!(product.name, "Cola");
        assert_eq!(product.category.id, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let categories = MockCategoryRepository::new();
        let mut products = MockProductRepository::new();
        products.expect_delete().returning(|_| Ok(false));

        let service = CatalogService::new(categories, products);
        let result = service.delete_product(42).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(42))));
    }
}
