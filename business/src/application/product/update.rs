use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let fields = ProductFields::new(params.draft).inspect_err(|err| {
            self.logger
                .warn(&format!("Rejected update for product {}: {err}", params.id));
        })?;

        // Full replace; zero affected rows is reported as NotFound by the store.
        let product = self
            .repository
            .update(params.id, &fields)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .info(&format!("Product not found for update: {}", params.id));
                    ProductError::NotFound
                }
                other => {
                    self.logger
                        .error(&format!("Failed to update product {}: {other}", params.id));
                    ProductError::Repository(other)
                }
            })?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductDraft;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Product>, i64), RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn create(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn updated_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Updated Product".to_string()),
            description: Some("Updated Description".to_string()),
            price: Some(29.99),
            stock: Some(20),
        }
    }

    #[tokio::test]
    async fn should_replace_all_fields_when_product_exists() {
        let product_id = ProductId::new(3);
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(move |id, fields| {
                *id == product_id
                    && fields.name() == "Updated Product"
                    && fields.description() == "Updated Description"
                    && fields.price() == 29.99
                    && fields.stock() == 20
            })
            .times(1)
            .returning(|id, fields| Ok(Product::from_fields(id, fields.clone())));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: product_id,
                draft: updated_draft(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Updated Product");
        assert_eq!(product.stock, 20);
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_row_was_updated() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(9999),
                draft: updated_draft(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_update_before_touching_the_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                draft: ProductDraft {
                    name: Some("".to_string()),
                    description: Some("Updated Description".to_string()),
                    price: Some(-10.0),
                    stock: Some(-5),
                },
            })
            .await;

        match result {
            Err(ProductError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
