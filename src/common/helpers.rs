// Helper functions for safe logging

use serde_json::Value;

/// Field names whose values never reach the logs
const REDACTED_FIELDS: &[&str] = &["password", "confirm"];

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use storefront_onboarding::common::safe_email_log;
/// assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        match email.split_once('@') {
            Some((local, domain)) if !domain.contains('@') => {
                let first: String = local.chars().take(1).collect();
                format!("{}***@{}", first, domain)
            }
            _ => "***@***.***".to_string(),
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Replaces password-like values anywhere in a JSON document with `"***"`
pub fn redact_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if REDACTED_FIELDS.contains(&key.as_str()) {
                    *inner = Value::String("***".to_string());
                } else {
                    redact_secrets(inner);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_secrets),
        _ => {}
    }
}
