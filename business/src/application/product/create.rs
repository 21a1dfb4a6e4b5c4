use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {}",
            params.draft.name.as_deref().unwrap_or_default()
        ));

        let fields = ProductFields::new(params.draft).inspect_err(|err| {
            self.logger.warn(&format!("Rejected product payload: {err}"));
        })?;

        // Insert and re-read are separate statements; a concurrent delete in
        // between shows up as NotFound.
        let product = self.repository.create(&fields).await.map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => {
                self.logger
                    .error(&format!("Failed to create product: {other}"));
                ProductError::Repository(other)
            }
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
