use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositorySqlite {
    pool: SqlitePool,
}

impl ProductRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositorySqlite {
    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Product>, i64), RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, stock FROM products ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?;

        let (total_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok((
            entities.into_iter().map(|e| e.into_domain()).collect(),
            total_count,
        ))
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, stock FROM products WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO products (name, description, price, stock) VALUES (?, ?, ?, ?)",
        )
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.price())
        .bind(fields.stock())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?;

        self.get_by_id(ProductId::new(result.last_insert_rowid()))
            .await
    }

    async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET name = ?, description = ?, price = ?, stock = ? WHERE id = ?",
        )
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.price())
        .bind(fields.stock())
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
