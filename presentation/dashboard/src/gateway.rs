use async_trait::async_trait;
use serde::Deserialize;

use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::ProductId;

use crate::error::ClientError;

/// One page of products as returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(rename = "data")]
    pub products: Vec<Product>,
    pub current_page: u32,
    pub total_count: i64,
    pub total_pages: i64,
}

/// Result of deleting one id during a mass delete.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub id: ProductId,
    pub result: Result<ProductId, ClientError>,
}

/// Everything the dashboard needs from the product API.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self, page: u32, page_size: u32) -> Result<ProductPage, ClientError>;
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ClientError>;
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<ProductId, ClientError>;
    async fn delete(&self, id: ProductId) -> Result<ProductId, ClientError>;
    /// Deletes concurrently. One outcome per requested id, in request order.
    async fn delete_many(&self, ids: Vec<ProductId>) -> Vec<DeleteOutcome>;
}

/// Yes/no prompt shown before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}
