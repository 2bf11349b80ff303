// Common validation types and traits

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult::Invalid(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Error message, if the field failed
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(message) => Some(message),
        }
    }
}

/// Field name -> error message, populated only for fields that failed.
///
/// Serializes as a flat JSON object, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    /// Records `result` under `field` when it is `Invalid`; `Valid` leaves the map untouched.
    pub fn record(&mut self, field: &str, result: ValidationResult) {
        if let ValidationResult::Invalid(message) = result {
            self.0.insert(field.to_string(), message);
        }
    }

    pub fn merge(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ErrorMap;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_keeps_invalid_results() {
        let mut errors = ErrorMap::new();
        errors.record("name", ValidationResult::Valid);
        errors.record("email", ValidationResult::invalid("Invalid email address"));

        assert!(!errors.is_valid());
        assert_eq!(errors.len(), 1);
        assert!(!errors.contains("name"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_merge_and_serialize_in_field_order() {
        let mut errors = ErrorMap::new();
        errors.add_error("phone", "Invalid phone number");

        let mut other = ErrorMap::new();
        other.add_error("confirm", "Passwords do not match");
        errors.merge(other);

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["confirm", "phone"]);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["confirm"], "Passwords do not match");
        assert_eq!(json["phone"], "Invalid phone number");
    }

    #[test]
    fn test_validation_result_accessors() {
        assert!(ValidationResult::Valid.is_valid());
        assert_eq!(ValidationResult::Valid.message(), None);

        let invalid = ValidationResult::invalid("Invalid postal code");
        assert!(!invalid.is_valid());
        assert_eq!(invalid.message(), Some("Invalid postal code"));
    }
}
