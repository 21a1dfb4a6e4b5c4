use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::Page;

/// Raw query-string values; validation happens inside the use case.
#[derive(Default)]
pub struct GetAllProductsParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError>;
}
