use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entity::{category, product};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryInput, Product, ProductData};
use crate::repository::{CategoryRepository, ProductRepository};

fn db_err(e: sea_orm::DbErr) -> CatalogError {
    CatalogError::Internal(format!("Database error: {}", e))
}

/// SeaORM-backed category repository.
#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> CatalogResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let model = category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(Category::from))
    }

    async fn create(&self, input: CategoryInput) -> CatalogResult<Category> {
        let active = category::ActiveModel {
            name: Set(input.name),
            ..Default::default()
        };
        let model = active.insert(&self.db).await.map_err(db_err)?;
        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: CategoryInput) -> CatalogResult<Category> {
        let model = category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(CatalogError::CategoryNotFound(id))?;

        let mut active: category::ActiveModel = model.into();
        active.name = Set(input.name);
        let model = active.update(&self.db).await.map_err(db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> CatalogResult<bool> {
        let result = category::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

/// SeaORM-backed product repository.
///
/// Reads use `find_also_related` so every returned product carries its
/// category without a second round trip.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn materialize(
        (model, category): (product::Model, Option<category::Model>),
    ) -> CatalogResult<Product> {
        let category = category.ok_or_else(|| {
            CatalogError::Internal(format!(
                "product {} references missing category {}",
                model.id, model.category_id
            ))
        })?;
        Ok(Product {
            id: model.id,
            name: model.name,
            price: model.price,
            category: category.into(),
        })
    }

    async fn fetch(&self, id: i32) -> CatalogResult<Option<Product>> {
        let row = product::Entity::find_by_id(id)
            .find_also_related(category::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        row.map(Self::materialize).transpose()
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let rows = product::Entity::find()
            .find_also_related(category::Entity)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(Self::materialize).collect()
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        self.fetch(id).await
    }

    async fn list_by_category(&self, category_id: i32) -> CatalogResult<Vec<Product>> {
        let rows = product::Entity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .find_also_related(category::Entity)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(Self::materialize).collect()
    }

    async fn count_by_category(&self, category_id: i32) -> CatalogResult<u64> {
        product::Entity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn create(&self, data: ProductData) -> CatalogResult<Product> {
        let active = product::ActiveModel {
            name: Set(data.name),
            price: Set(data.price),
            category_id: Set(data.category_id),
            ..Default::default()
        };
        let model = active.insert(&self.db).await.map_err(db_err)?;
        tracing::info!(product_id = model.id, "Created product");

        self.fetch(model.id)
            .await?
            .ok_or(CatalogError::ProductNotFound(model.id))
    }

    async fn update(&self, id: i32, data: ProductData) -> CatalogResult<Product> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(CatalogError::ProductNotFound(id))?;

        let mut active: product::ActiveModel = model.into();
        active.name = Set(data.name);
        active.price = Set(data.price);
        active.category_id = Set(data.category_id);
        let model = active.update(&self.db).await.map_err(db_err)?;

        self.fetch(model.id)
            .await?
            .ok_or(CatalogError::ProductNotFound(model.id))
    }

    async fn delete(&self, id: i32) -> CatalogResult<bool> {
        let result = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
