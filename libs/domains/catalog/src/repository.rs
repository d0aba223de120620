use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryInput, Product, ProductData};

/// Persistence operations for categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> CatalogResult<Vec<Category>>;
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>>;
    async fn create(&self, input: CategoryInput) -> CatalogResult<Category>;
    /// Replaces the category's fields. Errors with `CategoryNotFound` when
    /// the id does not exist.
    async fn update(&self, id: i32, input: CategoryInput) -> CatalogResult<Category>;
    /// Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> CatalogResult<bool>;
}

/// Persistence operations for products.
///
/// Reads return products with their category embedded, so implementations
/// resolve the category row as part of the query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> CatalogResult<Vec<Product>>;
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>>;
    async fn list_by_category(&self, category_id: i32) -> CatalogResult<Vec<Product>>;
    async fn count_by_category(&self, category_id: i32) -> CatalogResult<u64>;
    async fn create(&self, data: ProductData) -> CatalogResult<Product>;
    /// Replaces the product's fields. Errors with `ProductNotFound` when
    /// the id does not exist.
    async fn update(&self, id: i32, data: ProductData) -> CatalogResult<Product>;
    /// Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> CatalogResult<bool>;
}

/// A product row as stored: the category is kept as a foreign id and joined
/// back to its current name on every read.
#[derive(Debug, Clone)]
struct ProductRow {
    id: i32,
    name: String,
    price: f64,
    category_id: i32,
}

#[derive(Debug, Default)]
struct Store {
    categories: HashMap<i32, Category>,
    products: HashMap<i32, ProductRow>,
    next_category_id: i32,
    next_product_id: i32,
}

impl Store {
    fn materialize(&self, row: &ProductRow) -> CatalogResult<Product> {
        let category = self
            .categories
            .get(&row.category_id)
            .cloned()
            .ok_or_else(|| {
                CatalogError::Internal(format!(
                    "product {} references missing category {}",
                    row.id, row.category_id
                ))
            })?;
        Ok(Product {
            id: row.id,
            name: row.name.clone(),
            price: row.price,
            category,
        })
    }
}

/// In-memory implementation of both repositories, used by handler tests
/// and local development without a database.
///
/// Both traits share a single store behind one lock so product reads can
/// join against the live category table, matching the relational backend.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list(&self) -> CatalogResult<Vec<Category>> {
        let store = self.store.read().await;
        let mut categories: Vec<Category> = store.categories.values().cloned().collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.get(&id).cloned())
    }

    async fn create(&self, input: CategoryInput) -> CatalogResult<Category> {
        let mut store = self.store.write().await;
        store.next_category_id += 1;
        let category = Category {
            id: store.next_category_id,
            name: input.name,
        };
        store.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: i32, input: CategoryInput) -> CatalogResult<Category> {
        let mut store = self.store.write().await;
        let category = store
            .categories
            .get_mut(&id)
            .ok_or(CatalogError::CategoryNotFound(id))?;
        category.name = input.name;
        Ok(category.clone())
    }

    async fn delete(&self, id: i32) -> CatalogResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.categories.remove(&id).is_some())
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut rows: Vec<&ProductRow> = store.products.values().collect();
        rows.sort_by_key(|r| r.id);
        rows.into_iter().map(|r| store.materialize(r)).collect()
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let store = self.store.read().await;
        store
            .products
            .get(&id)
            .map(|r| store.materialize(r))
            .transpose()
    }

    async fn list_by_category(&self, category_id: i32) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut rows: Vec<&ProductRow> = store
            .products
            .values()
            .filter(|r| r.category_id == category_id)
            .collect();
        rows.sort_by_key(|r| r.id);
        rows.into_iter().map(|r| store.materialize(r)).collect()
    }

    async fn count_by_category(&self, category_id: i32) -> CatalogResult<u64> {
        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .filter(|r| r.category_id == category_id)
            .count() as u64)
    }

    async fn create(&self, data: ProductData) -> CatalogResult<Product> {
        let mut store = self.store.write().await;
        if !store.categories.contains_key(&data.category_id) {
            return Err(CatalogError::UnknownCategory(data.category_id));
        }
        store.next_product_id += 1;
        let row = ProductRow {
            id: store.next_product_id,
            name: data.name,
            price: data.price,
            category_id: data.category_id,
        };
        let product = store.materialize(&row)?;
        store.products.insert(row.id, row);
        Ok(product)
    }

    async fn update(&self, id: i32, data: ProductData) -> CatalogResult<Product> {
        let mut store = self.store.write().await;
        if !store.categories.contains_key(&data.category_id) {
            return Err(CatalogError::UnknownCategory(data.category_id));
        }
        let row = store
            .products
            .get_mut(&id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        row.name = data.name;
        row.price = data.price;
        row.category_id = data.category_id;
        let row = row.clone();
        store.materialize(&row)
    }

    async fn delete(&self, id: i32) -> CatalogResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> InMemoryCatalog {
        let repo = InMemoryCatalog::new();
        CategoryRepository::create(
            &repo,
            CategoryInput {
                name: "Beverages".to_string(),
            },
        )
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_category_ids_are_sequential() {
        let repo = seeded().await;
        let second = CategoryRepository::create(
            &repo,
            CategoryInput {
                name: "Snacks".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_product_embeds_current_category_name() {
        let repo = seeded().await;
        let product = ProductRepository::create(
            &repo,
            ProductData {
                name: "Cola".to_string(),
                price: 4.5,
                category_id: 1,
            },
        )
        .await
        .unwrap();
        assert_eq!(product.category.name, "Beverages");

        // A category rename is visible through the product join
        CategoryRepository::update(
            &repo,
            1,
            CategoryInput {
                name: "Drinks".to_string(),
            },
        )
        .await
        .unwrap();
        let product = ProductRepository::get_by_id(&repo, product.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.category.name, "Drinks");
    }

    #[tokio::test]
    async fn test_create_product_rejects_unknown_category() {
        let repo = seeded().await;
        let result = ProductRepository::create(
            &repo,
            ProductData {
                name: "Cola".to_string(),
                price: 4.5,
                category_id: 99,
            },
        )
        .await;
        assert!(matches!(result, Err(CatalogError::UnknownCategory(99))));
    }

    #[tokio::test]
    async fn test_count_by_category() {
        let repo = seeded().await;
        for name in ["Cola", "Juice"] {
            ProductRepository::create(
                &repo,
                ProductData {
                    name: name.to_string(),
                    price: 2.0,
                    category_id: 1,
                },
            )
            .await
            .unwrap();
        }
        assert_eq!(ProductRepository::count_by_category(&repo, 1).await.unwrap(), 2);
        assert_eq!(ProductRepository::count_by_category(&repo, 2).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_category_returns_false() {
        let repo = seeded().await;
        assert!(!CategoryRepository::delete(&repo, 42).await.unwrap());
        assert!(CategoryRepository::delete(&repo, 1).await.unwrap());
    }
}
