use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductFields};
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Rows ordered by id starting at `offset`, plus the row count of the whole table.
    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Product>, i64), RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn create(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
