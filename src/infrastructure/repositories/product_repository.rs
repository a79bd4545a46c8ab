//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, NewProduct, Product, ProductRepository};
use crate::models::product::{ActiveModel, Column, Entity as ProductEntity};

/// SeaORM-based implementation of ProductRepository
///
/// Only live rows (`deleted_at IS NULL`) are visible to reads.
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, product: NewProduct) -> Result<Product, DomainError> {
        product.validate()?;

        let now = chrono::Utc::now().to_rfc3339();

        let model = ActiveModel {
            name: Set(product.name),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        tracing::debug!(id = result.id, "Product inserted");

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = ProductEntity::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let product = ProductEntity::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await?;

        Ok(product.map(Product::from))
    }
}
