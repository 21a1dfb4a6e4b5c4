use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::ProductId;
use business::domain::shared::pagination::Page;

/// Create and full-replace payload.
///
/// Fields are taken as raw JSON so that a missing or wrong-typed value is
/// reported by validation together with the other failed rules.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name, must not be empty
    pub name: Option<Value>,
    /// Free text, stored as an empty string when omitted
    pub description: Option<Value>,
    /// Unit price, strictly positive
    pub price: Option<Value>,
    /// Units on hand, an integer of zero or more
    pub stock: Option<Value>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            name: text(request.name),
            description: request.description.and_then(free_text),
            price: number(request.price),
            stock: integer(request.stock),
        }
    }
}

fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        _ => None,
    }
}

fn free_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// JSON numbers and numeric strings
fn number(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Whole numbers only; `5.0` counts, `2.5` does not.
fn integer(value: Option<Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// `{ "data": Product }`
#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub data: ProductResponse,
}

impl From<Product> for ProductEnvelope {
    fn from(product: Product) -> Self {
        Self {
            data: product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductIdResponse {
    pub id: i64,
}

/// `{ "data": { "id": ... } }`
#[derive(Debug, Clone, Object)]
pub struct ProductIdEnvelope {
    pub data: ProductIdResponse,
}

impl From<ProductId> for ProductIdEnvelope {
    fn from(id: ProductId) -> Self {
        Self {
            data: ProductIdResponse { id: id.value() },
        }
    }
}

/// One page of the catalog plus the totals the dashboard needs
#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub data: Vec<ProductResponse>,
    #[oai(rename = "currentPage")]
    pub current_page: u32,
    #[oai(rename = "totalCount")]
    pub total_count: i64,
    #[oai(rename = "totalPages")]
    pub total_pages: i64,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let page = page.map(ProductResponse::from);
        Self {
            data: page.items,
            current_page: page.current_page,
            total_count: page.total_count,
            total_pages: page.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(name: Value, description: Value, price: Value, stock: Value) -> ProductRequest {
        ProductRequest {
            name: Some(name),
            description: Some(description),
            price: Some(price),
            stock: Some(stock),
        }
    }

    #[test]
    fn should_keep_well_typed_fields() {
        let draft: ProductDraft =
            request(json!("Lamp"), json!("Desk lamp"), json!(24.99), json!(50)).into();

        assert_eq!(draft.name.as_deref(), Some("Lamp"));
        assert_eq!(draft.description.as_deref(), Some("Desk lamp"));
        assert_eq!(draft.price, Some(24.99));
        assert_eq!(draft.stock, Some(50));
    }

    #[test]
    fn should_read_numeric_strings_and_whole_floats() {
        let draft: ProductDraft =
            request(json!("Lamp"), json!(null), json!("19.99"), json!(5.0)).into();

        assert_eq!(draft.description, None);
        assert_eq!(draft.price, Some(19.99));
        assert_eq!(draft.stock, Some(5));
    }

    #[test]
    fn should_drop_values_of_the_wrong_type() {
        let draft: ProductDraft =
            request(json!(42), json!(""), json!("abc"), json!(2.5)).into();

        assert_eq!(draft.name, None);
        assert_eq!(draft.price, None);
        assert_eq!(draft.stock, None);
    }

    #[test]
    fn should_leave_absent_fields_absent() {
        let draft: ProductDraft = ProductRequest {
            name: None,
            description: None,
            price: None,
            stock: None,
        }
        .into();

        assert_eq!(draft, ProductDraft::default());
    }
}
