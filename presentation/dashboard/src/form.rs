use std::str::FromStr;

use business::domain::product::model::{Product, ProductDraft};

use crate::error::UnknownField;

/// Editable fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Stock,
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "description" => Ok(FormField::Description),
            "price" => Ok(FormField::Price),
            "stock" => Ok(FormField::Stock),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Form state as typed by the user. Numbers stay text until submit so that
/// half-typed values never get lost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::Stock => self.stock = value,
        }
    }

    /// Unparsable numbers are sent as absent and rejected by the server
    /// with its usual message.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            price: self.price.trim().parse::<f64>().ok(),
            stock: self.stock.trim().parse::<i64>().ok(),
        }
    }
}
