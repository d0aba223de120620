//! Integration tests for the catalog domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Queries and the category join work correctly
//! - The restrict foreign key is enforced at the schema level
//! - Ids are assigned sequentially by the database

use domain_catalog::*;
use test_utils::{assertions::*, TestDatabase, TestDataBuilder};

#[tokio::test]
async fn test_create_and_get_category() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get_category");

    let name = builder.name("category", "main");
    let created = repo
        .create(CategoryInput { name: name.clone() })
        .await
        .unwrap();
    assert_eq!(created.name, name);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "category should exist");
    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, name);
}

#[tokio::test]
async fn test_get_missing_category_is_none() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    assert!(repo.get_by_id(424242).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_category_persists() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_category");

    let created = repo
        .create(CategoryInput {
            name: builder.name("category", "before"),
        })
        .await
        .unwrap();

    let renamed = builder.name("category", "after");
    let updated = repo
        .update(created.id, CategoryInput {
            name: renamed.clone(),
        })
        .await
        .unwrap();
    assert_eq!(updated.name, renamed);

    let retrieved = assert_some(repo.get_by_id(created.id).await.unwrap(), "category");
    assert_eq!(retrieved.name, renamed);
}

#[tokio::test]
async fn test_update_missing_category_errors() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    let result = repo
        .update(424242, CategoryInput {
            name: "nope".to_string(),
        })
        .await;
    assert!(matches!(result, Err(CatalogError::CategoryNotFound(424242))));
}

#[tokio::test]
async fn test_product_round_trip_with_category_join() {
    let db = TestDatabase::new().await;
    let categories = PgCategoryRepository::new(db.connection());
    let products = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("product_round_trip");

    let category = categories
        .create(CategoryInput {
            name: builder.name("category", "main"),
        })
        .await
        .unwrap();

    let created = products
        .create(ProductData {
            name: builder.name("product", "cola"),
            price: 2.5,
            category_id: category.id,
        })
        .await
        .unwrap();
    assert_eq!(created.category.id, category.id);
    assert_eq!(created.category.name, category.name);

    let retrieved = assert_some(products.get_by_id(created.id).await.unwrap(), "product");
    assert_eq!(retrieved.name, created.name);
    assert_eq!(retrieved.price, 2.5);
    assert_eq!(retrieved.category.name, category.name);
}

#[tokio::test]
async fn test_list_by_category_filters() {
    let db = TestDatabase::new().await;
    let categories = PgCategoryRepository::new(db.connection());
    let products = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_by_category");

    let beverages = categories
        .create(CategoryInput {
            name: builder.name("category", "beverages"),
        })
        .await
        .unwrap();
    let snacks = categories
        .create(CategoryInput {
            name: builder.name("category", "snacks"),
        })
        .await
        .unwrap();

    for (name, category_id) in [
        (builder.name("product", "cola"), beverages.id),
        (builder.name("product", "juice"), beverages.id),
        (builder.name("product", "chips"), snacks.id),
    ] {
        products
            .create(ProductData {
                name,
                price: 1.0,
                category_id,
            })
            .await
            .unwrap();
    }

    let in_beverages = products.list_by_category(beverages.id).await.unwrap();
    assert_eq!(in_beverages.len(), 2);
    assert!(in_beverages.iter().all(|p| p.category.id == beverages.id));

    assert_eq!(products.count_by_category(beverages.id).await.unwrap(), 2);
    assert_eq!(products.count_by_category(snacks.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_foreign_key_is_enforced_by_schema() {
    let db = TestDatabase::new().await;
    let products = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fk_enforced");

    // Bypasses the service-level existence check; the schema still rejects it
    let result = products
        .create(ProductData {
            name: builder.name("product", "orphan"),
            price: 1.0,
            category_id: 424242,
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_restrict_prevents_category_delete() {
    let db = TestDatabase::new().await;
    let categories = PgCategoryRepository::new(db.connection());
    let products = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("restrict_delete");

    let category = categories
        .create(CategoryInput {
            name: builder.name("category", "main"),
        })
        .await
        .unwrap();
    let product = products
        .create(ProductData {
            name: builder.name("product", "cola"),
            price: 2.5,
            category_id: category.id,
        })
        .await
        .unwrap();

    // Raw delete against the referenced row fails on the ON DELETE RESTRICT
    let result = categories.delete(category.id).await;
    assert!(result.is_err());

    // Once the product is gone the delete goes through
    assert!(products.delete(product.id).await.unwrap());
    assert!(categories.delete(category.id).await.unwrap());
}

#[tokio::test]
async fn test_service_delete_category_conflict_over_postgres() {
    let db = TestDatabase::new().await;
    let service = CatalogService::new(
        PgCategoryRepository::new(db.connection()),
        PgProductRepository::new(db.connection()),
    );
    let builder = TestDataBuilder::from_test_name("service_delete_conflict");

    let category = service
        .create_category(CategoryInput {
            name: builder.name("category", "main"),
        })
        .await
        .unwrap();
    service
        .create_product(Some(ProductInput {
            name: Some(builder.name("product", "cola")),
            price: Some(2.5),
            category: Some(category.id),
        }))
        .await
        .unwrap();

    let result = service.delete_category(category.id).await;
    assert!(matches!(result, Err(CatalogError::CategoryInUse { .. })));
}
