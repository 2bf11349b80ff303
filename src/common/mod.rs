// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{ApiError, ParseError};
pub use helpers::{redact_secrets, safe_email_log};
pub use state::AppState;
pub use validation::{ErrorMap, ValidationResult, Validator};
