use crate::domain::errors::RepositoryError;
use crate::domain::shared::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid: {0}")]
    Validation(ValidationErrors),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
