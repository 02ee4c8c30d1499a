//! Field-level validation of incoming records.
//!
//! Validators collect every problem instead of stopping at the first, so a
//! form can highlight all offending fields at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Field must be present and not blank
    pub fn require(&mut self, field: &str, value: Option<&str>) {
        if value.map_or(true, |v| v.trim().is_empty()) {
            self.add(field, format!("{} is required", field));
        }
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) {
        if !value.trim().is_empty() && value.trim().chars().count() < min {
            self.add(field, format!("{} must be at least {} characters", field, min));
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !value.trim().is_empty() && !looks_like_email(value.trim()) {
            self.add(field, "Invalid email address");
        }
    }

    pub fn non_negative(&mut self, field: &str, value: Option<Decimal>) {
        if value.is_some_and(|v| v < Decimal::ZERO) {
            self.add(field, format!("{} cannot be negative", field));
        }
    }

    /// `end` must not precede `start` when both are given
    pub fn date_order(&mut self, field: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                self.add(field, "End date must be on or after the start date");
            }
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_errors() {
        let mut errors = ValidationErrors::new();
        errors.require("name", Some("  "));
        errors.require("category", None);
        errors.email("email", "not-an-email");
        errors.non_negative("purchaseCost", Some(Decimal::new(-1, 0)));

        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "category", "email", "purchaseCost"]);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_valid_values_pass() {
        let mut errors = ValidationErrors::new();
        errors.require("name", Some("Dell Latitude"));
        errors.min_len("name", "Dell Latitude", 2);
        errors.email("email", "priya@example.com");
        errors.non_negative("purchaseCost", Some(Decimal::ZERO));
        errors.date_order(
            "warrantyEnd",
            NaiveDate::from_ymd_opt(2026, 1, 1),
            NaiveDate::from_ymd_opt(2026, 1, 1),
        );
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_min_length_and_date_order() {
        let mut errors = ValidationErrors::new();
        errors.min_len("name", "A", 2);
        errors.date_order(
            "warrantyEnd",
            NaiveDate::from_ymd_opt(2026, 5, 1),
            NaiveDate::from_ymd_opt(2026, 4, 30),
        );
        assert_eq!(errors.fields().len(), 2);
        assert_eq!(errors.fields()[0].message, "name must be at least 2 characters");
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@@b.co"));
    }
}
