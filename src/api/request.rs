//! # Request Types
//!
//! Deserialized request bodies and query parameters, with field-level
//! validation. The partial update re-validates every supplied field
//! against the same constraints as creation; there is no permissive
//! untyped variant.

use serde::Deserialize;

use super::errors::{ApiError, FieldViolation};
use crate::store::{AdvertisementPatch, NewAdvertisement, SearchFilter};

/// Maximum title length, in Unicode characters
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length, in Unicode characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// Maximum author length, in Unicode characters
pub const AUTHOR_MAX_CHARS: usize = 50;

/// Body of `POST /advertisement`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvertisement {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub author: String,
}

impl CreateAdvertisement {
    /// Validate every field, collecting all violations.
    pub fn validate(self) -> Result<NewAdvertisement, ApiError> {
        let mut violations = Vec::new();
        check_text("title", &self.title, TITLE_MAX_CHARS, &mut violations);
        check_text(
            "description",
            &self.description,
            DESCRIPTION_MAX_CHARS,
            &mut violations,
        );
        check_price("price", self.price, &mut violations);
        check_text("author", &self.author, AUTHOR_MAX_CHARS, &mut violations);

        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        Ok(NewAdvertisement {
            title: self.title,
            description: self.description,
            price: self.price,
            author: self.author,
        })
    }
}

/// Body of `PATCH /advertisement/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdvertisement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub author: Option<String>,
}

impl UpdateAdvertisement {
    /// Validate the supplied subset of fields.
    pub fn validate(self) -> Result<AdvertisementPatch, ApiError> {
        let mut violations = Vec::new();
        if let Some(title) = &self.title {
            check_text("title", title, TITLE_MAX_CHARS, &mut violations);
        }
        if let Some(description) = &self.description {
            check_text(
                "description",
                description,
                DESCRIPTION_MAX_CHARS,
                &mut violations,
            );
        }
        if let Some(price) = self.price {
            check_price("price", price, &mut violations);
        }
        if let Some(author) = &self.author {
            check_text("author", author, AUTHOR_MAX_CHARS, &mut violations);
        }

        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        Ok(AdvertisementPatch {
            title: self.title,
            description: self.description,
            price: self.price,
            author: self.author,
        })
    }
}

/// Query parameters of `GET /advertisement`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchQuery {
    /// Validate the price bounds. Empty text parameters do not narrow the
    /// result set.
    pub fn validate(self) -> Result<SearchFilter, ApiError> {
        let mut violations = Vec::new();
        if let Some(min) = self.min_price {
            check_price("min_price", min, &mut violations);
        }
        if let Some(max) = self.max_price {
            check_price("max_price", max, &mut violations);
        }

        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        Ok(SearchFilter {
            title: self.title.filter(|t| !t.is_empty()),
            author: self.author.filter(|a| !a.is_empty()),
            min_price: self.min_price,
            max_price: self.max_price,
        })
    }
}

fn check_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) {
    let chars = value.chars().count();
    if chars == 0 {
        violations.push(FieldViolation::new(field, "must not be empty"));
    } else if chars > max_chars {
        violations.push(FieldViolation::new(
            field,
            format!("must be at most {} characters", max_chars),
        ));
    }
}

fn check_price(field: &'static str, value: f64, violations: &mut Vec<FieldViolation>) {
    // Also rejects NaN
    if !(value > 0.0) {
        violations.push(FieldViolation::new(field, "must be greater than 0"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateAdvertisement {
        CreateAdvertisement {
            title: "Bike".to_string(),
            description: "Red bike".to_string(),
            price: 100.0,
            author: "Alice".to_string(),
        }
    }

    fn violation_fields(err: ApiError) -> Vec<&'static str> {
        match err {
            ApiError::Validation(violations) => violations.into_iter().map(|v| v.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_create_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut payload = valid_create();
        payload.title = String::new();
        assert_eq!(violation_fields(payload.validate().unwrap_err()), ["title"]);
    }

    #[test]
    fn test_title_at_limit_passes() {
        let mut payload = valid_create();
        payload.title = "x".repeat(TITLE_MAX_CHARS);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_title_over_limit_rejected() {
        let mut payload = valid_create();
        payload.title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(violation_fields(payload.validate().unwrap_err()), ["title"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut payload = valid_create();
        // 100 two-byte characters; 200 bytes, but within the char limit
        payload.title = "é".repeat(TITLE_MAX_CHARS);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [0.0, -1.0] {
            let mut payload = valid_create();
            payload.price = price;
            assert_eq!(violation_fields(payload.validate().unwrap_err()), ["price"]);
        }
    }

    #[test]
    fn test_all_violations_collected() {
        let payload = CreateAdvertisement {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            author: String::new(),
        };
        let fields = violation_fields(payload.validate().unwrap_err());
        assert_eq!(fields, ["title", "description", "price", "author"]);
    }

    #[test]
    fn test_empty_patch_passes() {
        let patch = UpdateAdvertisement::default().validate().unwrap();
        assert!(patch.title.is_none() && patch.price.is_none());
    }

    #[test]
    fn test_patch_validates_supplied_fields_only() {
        let payload = UpdateAdvertisement {
            price: Some(-5.0),
            ..Default::default()
        };
        assert_eq!(violation_fields(payload.validate().unwrap_err()), ["price"]);
    }

    #[test]
    fn test_search_rejects_non_positive_bounds() {
        let query = SearchQuery {
            min_price: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            violation_fields(query.validate().unwrap_err()),
            ["min_price"]
        );
    }

    #[test]
    fn test_search_empty_text_params_do_not_filter() {
        let query = SearchQuery {
            title: Some(String::new()),
            author: Some(String::new()),
            ..Default::default()
        };
        let filter = query.validate().unwrap();
        assert!(filter.title.is_none());
        assert!(filter.author.is_none());
    }
}
