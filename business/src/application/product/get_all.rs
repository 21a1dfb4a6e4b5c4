use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        let request = PageRequest::from_query(params.page.as_deref(), params.page_size.as_deref())
            .map_err(ProductError::Validation)?;

        self.logger.info(&format!(
            "Fetching products page {} (size {})",
            request.page(),
            request.page_size()
        ));

        let (products, total_count) = self
            .repository
            .list(request.offset(), request.limit())
            .await
            .inspect_err(|err| {
                self.logger
                    .error(&format!("Failed to list products: {err}"));
            })?;

        self.logger.info(&format!(
            "Found {} products ({} in total)",
            products.len(),
            total_count
        ));
        Ok(Page::new(products, request, total_count))
    }
}
