//! # Onboarding Module
//!
//! This module handles the signup and login forms of the storefront:
//! - Role-aware signup validation (customer / shopkeeper)
//! - Login form pre-submit checks
//! - Building the accepted signup payload
//! - HTTP routes exposing the validators

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use models::*;
pub use routes::onboarding_routes;
pub use validators::{validate_form, validate_form_on, LoginValidator, SignupValidator};
