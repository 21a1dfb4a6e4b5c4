use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::validation::validate_product;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

/// Unvalidated create/update payload as it arrives from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// The mutable fields of a product after validation.
/// Repositories only accept this type for writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    name: String,
    description: String,
    price: f64,
    stock: i64,
}

impl ProductFields {
    pub fn new(draft: ProductDraft) -> Result<Self, ProductError> {
        let errors = validate_product(&draft);
        if !errors.is_empty() {
            return Err(ProductError::Validation(errors));
        }

        let (Some(name), Some(price), Some(stock)) = (draft.name, draft.price, draft.stock) else {
            return Err(ProductError::Validation(errors));
        };

        Ok(Self {
            name,
            description: draft.description.unwrap_or_default(),
            price,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }
}

impl Product {
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            stock: fields.stock,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
        }
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            price: Some(self.price),
            stock: Some(self.stock),
        }
    }
}
