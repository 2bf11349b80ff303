//! Storefront onboarding validation.
//!
//! [`fields`] holds one pure rule per [`fields::FieldKind`]; [`onboarding`]
//! composes them into role-aware signup and login checks and exposes them
//! over HTTP.

pub mod common;
pub mod fields;
pub mod logging_middleware;
pub mod onboarding;
