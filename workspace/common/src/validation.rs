//! Field-level validation rules composed by the resource validators.
//!
//! The backend revalidates every request; these checks exist to reject
//! obviously invalid input before a network round trip. Rules other than
//! `required` skip empty values, so optional fields validate only when
//! present — the same contract the backend applies.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// A single failed rule, addressed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Accumulated outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First error recorded for `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All errors joined into one human-readable line, for toast display.
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Chainable rule builder over a [`ValidationResult`].
#[derive(Debug, Default)]
pub struct Validator {
    result: ValidationResult,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(field, "is required");
        }
        self
    }

    pub fn min_length(mut self, field: &str, value: &str, min: usize) -> Self {
        if !value.is_empty() && value.trim().chars().count() < min {
            self.result
                .add_error(field, format!("must be at least {min} characters"));
        }
        self
    }

    pub fn max_length(mut self, field: &str, value: &str, max: usize) -> Self {
        if value.chars().count() > max {
            self.result
                .add_error(field, format!("must not exceed {max} characters"));
        }
        self
    }

    pub fn min_value(mut self, field: &str, value: f64, min: f64) -> Self {
        if value < min {
            self.result
                .add_error(field, format!("must be at least {min}"));
        }
        self
    }

    pub fn max_value(mut self, field: &str, value: f64, max: f64) -> Self {
        if value > max {
            self.result
                .add_error(field, format!("must not exceed {max}"));
        }
        self
    }

    pub fn pattern(mut self, field: &str, value: &str, pattern: &Regex, message: &str) -> Self {
        if !value.is_empty() && !pattern.is_match(value) {
            self.result.add_error(field, message);
        }
        self
    }

    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !value.is_empty() && !allowed.contains(&value) {
            self.result
                .add_error(field, format!("must be one of: {}", allowed.join(", ")));
        }
        self
    }

    /// Accepts absolute http(s) URLs and site-relative paths.
    pub fn url(mut self, field: &str, value: &str) -> Self {
        if !value.trim().is_empty()
            && !value.starts_with("http://")
            && !value.starts_with("https://")
            && !value.starts_with('/')
        {
            self.result.add_error(field, "must be a valid URL");
        }
        self
    }

    pub fn email(mut self, field: &str, value: &str) -> Self {
        if !value.trim().is_empty() && !EMAIL_PATTERN.is_match(value) {
            self.result.add_error(field, "must be a valid email address");
        }
        self
    }

    pub fn color_hex(mut self, field: &str, value: &str) -> Self {
        if !value.trim().is_empty() && !HEX_COLOR_PATTERN.is_match(value) {
            self.result
                .add_error(field, "must be a valid hex color (e.g. #FF0000)");
        }
        self
    }

    /// Records an ad hoc error outside the rule set.
    pub fn error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.result.add_error(field, message);
        self
    }

    pub fn finish(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_whitespace() {
        let result = Validator::new().required("name", "").finish();
        assert!(result.has_errors());
        assert!(result.field_error("name").is_some());

        let result = Validator::new().required("name", "   ").finish();
        assert!(result.has_errors());
    }

    #[test]
    fn required_accepts_non_empty() {
        let result = Validator::new().required("name", "Leon").finish();
        assert!(!result.has_errors());
        assert!(result.field_error("name").is_none());
    }

    #[test]
    fn length_bounds() {
        let result = Validator::new()
            .min_length("code", "ab", 3)
            .max_length("code", "abcdef", 4)
            .finish();
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn length_rules_skip_empty_values() {
        let result = Validator::new().min_length("code", "", 3).finish();
        assert!(!result.has_errors());
    }

    #[test]
    fn numeric_bounds() {
        let result = Validator::new()
            .min_value("price", -1.0, 0.0)
            .max_value("quantity", 11.0, 10.0)
            .finish();
        assert!(result.field_error("price").is_some());
        assert!(result.field_error("quantity").is_some());
    }

    #[test]
    fn color_hex_accepts_six_digit_form() {
        for value in ["#FF0000", "#00ff00", "#AbCdEf"] {
            let result = Validator::new().color_hex("color", value).finish();
            assert!(!result.has_errors(), "{value} should be accepted");
        }
    }

    #[test]
    fn color_hex_rejects_everything_else() {
        for value in ["FF0000", "#FFF", "#GG0000", "#FF00001", "red"] {
            let result = Validator::new().color_hex("color", value).finish();
            assert_eq!(result.errors().len(), 1, "{value} should be rejected");
            assert!(result.field_error("color").is_some());
        }
    }

    #[test]
    fn color_hex_skips_empty() {
        let result = Validator::new().color_hex("color", "").finish();
        assert!(!result.has_errors());
    }

    #[test]
    fn url_accepts_absolute_and_relative() {
        let result = Validator::new()
            .url("a", "https://example.com/x.png")
            .url("b", "http://example.com")
            .url("c", "/uploads/x.png")
            .finish();
        assert!(!result.has_errors());
    }

    #[test]
    fn url_rejects_other_schemes() {
        let result = Validator::new().url("icon", "ftp://example.com").finish();
        assert!(result.has_errors());
    }

    #[test]
    fn email_shape() {
        assert!(!Validator::new()
            .email("email", "user@example.com")
            .finish()
            .has_errors());
        assert!(Validator::new()
            .email("email", "not-an-email")
            .finish()
            .has_errors());
    }

    #[test]
    fn one_of_membership() {
        assert!(!Validator::new()
            .one_of("status", "draft", &["draft", "published"])
            .finish()
            .has_errors());
        assert!(Validator::new()
            .one_of("status", "deleted", &["draft", "published"])
            .finish()
            .has_errors());
    }

    #[test]
    fn message_joins_all_errors() {
        let result = Validator::new()
            .required("name", "")
            .required("slug", "")
            .finish();
        assert_eq!(result.message(), "name: is required; slug: is required");
    }
}
