use crate::domain::shared::validation::ValidationErrors;

use super::model::ProductDraft;

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be a positive number";
pub const STOCK_NEGATIVE: &str = "Stock must be a non-negative integer";

/// Runs every product rule against a draft and returns all failures in
/// field order (name, price, stock). An empty list means the draft is valid.
pub fn validate_product(draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.name.as_deref().is_none_or(str::is_empty) {
        errors.push("name", NAME_REQUIRED);
    }

    if !draft.price.is_some_and(|price| price.is_finite() && price > 0.0) {
        errors.push("price", PRICE_NOT_POSITIVE);
    }

    if !draft.stock.is_some_and(|stock| stock >= 0) {
        errors.push("stock", STOCK_NEGATIVE);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Desk Lamp".to_string()),
            description: Some("Warm white LED".to_string()),
            price: Some(24.5),
            stock: Some(3),
        }
    }

    #[test]
    fn should_accept_valid_draft() {
        assert!(validate_product(&valid_draft()).is_empty());
    }

    #[test]
    fn should_accept_missing_description_and_zero_stock() {
        let draft = ProductDraft {
            description: None,
            stock: Some(0),
            ..valid_draft()
        };
        assert!(validate_product(&draft).is_empty());
    }

    #[test]
    fn should_reject_empty_name() {
        let draft = ProductDraft {
            name: Some("".to_string()),
            ..valid_draft()
        };
        assert_eq!(validate_product(&draft).messages(), vec![NAME_REQUIRED]);
    }

    #[test]
    fn should_accept_whitespace_name_when_not_empty() {
        let draft = ProductDraft {
            name: Some("   ".to_string()),
            ..valid_draft()
        };
        assert!(validate_product(&draft).is_empty());
    }

    #[test]
    fn should_reject_zero_and_non_finite_price() {
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let draft = ProductDraft {
                price: Some(price),
                ..valid_draft()
            };
            assert_eq!(validate_product(&draft).messages(), vec![PRICE_NOT_POSITIVE]);
        }
    }

    #[test]
    fn should_reject_negative_stock() {
        let draft = ProductDraft {
            stock: Some(-5),
            ..valid_draft()
        };
        assert_eq!(validate_product(&draft).messages(), vec![STOCK_NEGATIVE]);
    }

    #[test]
    fn should_collect_every_failure_when_all_fields_invalid() {
        let draft = ProductDraft {
            name: Some("".to_string()),
            description: Some("Test Description".to_string()),
            price: Some(-10.0),
            stock: Some(-5),
        };

        let errors = validate_product(&draft);

        assert_eq!(
            errors.messages(),
            vec![NAME_REQUIRED, PRICE_NOT_POSITIVE, STOCK_NEGATIVE]
        );
    }

    #[test]
    fn should_treat_missing_fields_as_failures() {
        let errors = validate_product(&ProductDraft::default());
        assert_eq!(errors.len(), 3);
    }
}
