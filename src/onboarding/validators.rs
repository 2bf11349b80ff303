// src/onboarding/validators.rs

use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use super::models::*;
use crate::common::{ErrorMap, ValidationResult, Validator};
use crate::fields::FieldKind;

// ============================================================================
// Field Tables
// ============================================================================

/// Validated for every role
pub const ACCOUNT_FIELDS: [(&str, FieldKind); 4] = [
    ("name", FieldKind::Name),
    ("email", FieldKind::Email),
    ("phone", FieldKind::Phone),
    ("password", FieldKind::Password),
];

/// Component suffixes shared by the shipping, billing and shop addresses
pub const ADDRESS_COMPONENTS: [(&str, FieldKind); 5] = [
    ("Street", FieldKind::AddressLine),
    ("City", FieldKind::City),
    ("State", FieldKind::State),
    ("Postal", FieldKind::PostalCode),
    ("Country", FieldKind::Country),
];

pub const CONFIRM_FIELD: &str = "confirm";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Every `(field key, kind)` pair validated for `role` under `flags`.
/// The password confirmation is not listed; it is an equality check.
pub fn field_plan(role: Role, flags: FormFlags) -> Vec<(String, FieldKind)> {
    let mut plan: Vec<(String, FieldKind)> = ACCOUNT_FIELDS
        .iter()
        .map(|(key, kind)| (key.to_string(), *kind))
        .collect();

    let scopes: &[AddressScope] = match role {
        Role::Customer => {
            plan.push(("dob".to_string(), FieldKind::DateOfBirth));
            if flags.same_as_shipping {
                &[AddressScope::Shipping]
            } else {
                &[AddressScope::Shipping, AddressScope::Billing]
            }
        }
        Role::Shopkeeper => {
            plan.push(("shopName".to_string(), FieldKind::ShopName));
            &[AddressScope::Shop]
        }
    };

    for scope in scopes {
        plan.extend(
            ADDRESS_COMPONENTS
                .iter()
                .map(|(component, kind)| (scope.key(component), *kind)),
        );
    }

    plan
}

/// Validates a signup form as of the local calendar date
pub fn validate_form(role: Role, values: &FormValues, flags: FormFlags) -> ErrorMap {
    validate_form_on(role, values, flags, Local::now().date_naive())
}

/// Validates a signup form, evaluating age checks as of `today`.
///
/// Collects every failure for the active role; a field appears in the
/// result iff its rule returned `Invalid`.
pub fn validate_form_on(
    role: Role,
    values: &FormValues,
    flags: FormFlags,
    today: NaiveDate,
) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for (key, kind) in field_plan(role, flags) {
        errors.record(&key, kind.validate_on(values.get(&key), today));
    }

    if values.get(CONFIRM_FIELD) != values.get("password") {
        errors.add_error(CONFIRM_FIELD, PASSWORD_MISMATCH);
    }

    errors
}

// ============================================================================
// Signup
// ============================================================================

pub struct SignupValidator {
    today: NaiveDate,
}

impl SignupValidator {
    pub fn new() -> Self {
        Self::as_of(Local::now().date_naive())
    }

    pub fn as_of(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Default for SignupValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<SignupRequest> for SignupValidator {
    fn validate(&self, data: &SignupRequest) -> ErrorMap {
        validate_form_on(data.role, &data.values, data.flags(), self.today)
    }
}

// ============================================================================
// Login
// ============================================================================

static LOOSE_EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

/// Pre-submit checks for the login form. Credentials are not verified here.
pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ErrorMap {
        let mut errors = ErrorMap::new();

        // Validate email
        let email = if data.email.is_empty() {
            ValidationResult::invalid("Email is required")
        } else if !LOOSE_EMAIL.is_match(&data.email) {
            ValidationResult::invalid("Enter a valid email")
        } else {
            ValidationResult::Valid
        };
        errors.record("email", email);

        // Validate password
        let password = if data.password.is_empty() {
            ValidationResult::invalid("Password is required")
        } else if data.password.chars().count() < MIN_LOGIN_PASSWORD_LENGTH {
            ValidationResult::invalid("Password must be at least 6 characters")
        } else {
            ValidationResult::Valid
        };
        errors.record("password", password);

        errors
    }
}
