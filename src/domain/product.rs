//! Product entity and its field validation
//!
//! Validation is a pure function of the entity's fields; there is no shared
//! validator state.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Minimum number of characters in a product name
pub const NAME_MIN_LEN: usize = 3;
/// Maximum number of characters in a product name
pub const NAME_MAX_LEN: usize = 50;

/// A stored product.
///
/// `id` and the audit timestamps are assigned by the storage layer. The
/// in-memory store does not track timestamps, so they are left out of the
/// JSON in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// Caller-supplied data for a product that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every field constraint an entity violates, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns true if any violation concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationError {}

/// Collects violations without stopping at the first one
#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn check_length(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            self.0.push(FieldViolation {
                field,
                message: format!("field '{}' must be at least {} characters long.", field, min),
            });
        } else if len > max {
            self.0.push(FieldViolation {
                field,
                message: format!("field '{}' must be at most {} characters long.", field, max),
            });
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations: self.0 })
        }
    }
}

/// Checks a product name against the length bounds (in characters, not bytes)
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let mut violations = Violations::default();
    violations.check_length("name", name, NAME_MIN_LEN, NAME_MAX_LEN);
    violations.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_within_bounds_is_valid() {
        for len in NAME_MIN_LEN..=NAME_MAX_LEN {
            let product = NewProduct::new("x".repeat(len));
            assert!(product.validate().is_ok(), "length {} should be valid", len);
        }
    }

    #[test]
    fn test_name_outside_bounds_is_rejected() {
        for len in [0, 1, 2, 51, 80] {
            let err = NewProduct::new("x".repeat(len))
                .validate()
                .expect_err("name should be rejected");
            assert!(err.has_field("name"));
            assert_eq!(err.violations().len(), 1);
        }
    }

    #[test]
    fn test_short_name_message_mentions_minimum() {
        let err = NewProduct::new("ab").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'name' must be at least 3 characters long."
        );
    }

    #[test]
    fn test_long_name_message_mentions_maximum() {
        let err = NewProduct::new("a".repeat(51)).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'name' must be at most 50 characters long."
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 3 characters, 6 bytes
        assert!(validate_name("éàü").is_ok());
        // 50 characters, 100 bytes
        assert!(validate_name(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_stored_product_validates_its_name() {
        let product = Product {
            id: 1,
            name: "ab".to_string(),
            created_at: None,
            updated_at: None,
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_display_joins_every_violation() {
        let err = ValidationError {
            violations: vec![
                FieldViolation {
                    field: "name",
                    message: "field 'name' must be at least 3 characters long.".to_string(),
                },
                FieldViolation {
                    field: "sku",
                    message: "field 'sku' must be at most 12 characters long.".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "field 'name' must be at least 3 characters long. field 'sku' must be at most 12 characters long."
        );
    }
}
