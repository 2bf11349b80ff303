// src/fields/validators.rs

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::common::ValidationResult;

// ============================================================================
// Patterns
// ============================================================================

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());

static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,12}$").unwrap());

/// Names, cities, states and countries share one shape.
static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{2,50}$").unwrap());

static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{6,}$").unwrap());

static DOB_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-(19|20)[0-9]{2}$").unwrap()
});

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s-]{4,10}$").unwrap());

static SHOP_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s&-]+$").unwrap());

// ============================================================================
// Constants
// ============================================================================

pub const MINIMUM_AGE: i32 = 13;
pub const MIN_ADDRESS_LENGTH: usize = 5;
pub const MIN_SHOP_NAME_LENGTH: usize = 3;

// ============================================================================
// Contact & Identity
// ============================================================================

pub fn validate_email(email: &str) -> ValidationResult {
    if EMAIL.is_match(&email.to_lowercase()) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Invalid email address")
    }
}

pub fn validate_phone(phone: &str) -> ValidationResult {
    if PHONE.is_match(phone) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Invalid phone number")
    }
}

pub fn validate_name(name: &str) -> ValidationResult {
    letters_only(name, "Name should be 2–50 letters only")
}

/// At least 6 characters drawn from letters, digits and `@$!%*?&`,
/// with at least one letter and one digit.
pub fn validate_password(password: &str) -> ValidationResult {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_letter && has_digit && PASSWORD_CHARSET.is_match(password) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(
            "Password must be at least 6 characters, include a letter & number",
        )
    }
}

// ============================================================================
// Date of Birth
// ============================================================================

/// Validates a `dd-mm-yyyy` date of birth against the local calendar date.
pub fn validate_dob(dob: &str) -> ValidationResult {
    validate_dob_on(dob, Local::now().date_naive())
}

/// Validates a `dd-mm-yyyy` date of birth as of `today`.
pub fn validate_dob_on(dob: &str, today: NaiveDate) -> ValidationResult {
    if dob.is_empty() {
        return ValidationResult::invalid("Date of Birth is required");
    }

    let Some(caps) = DOB_FORMAT.captures(dob) else {
        return ValidationResult::invalid("DOB must be in dd-mm-yyyy format");
    };

    // The pattern guarantees the digit groups, so these parses cannot fail.
    let day: u32 = caps[1].parse().unwrap_or_default();
    let month: u32 = caps[2].parse().unwrap_or_default();
    let year: i32 = dob[6..].parse().unwrap_or_default();

    let Some(birth_date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return ValidationResult::invalid("Invalid Date of Birth");
    };

    if age_on(birth_date, today) >= MINIMUM_AGE {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("You must be at least 13 years old")
    }
}

/// Whole years between `birth_date` and `today`, counting a year only once
/// this year's birthday has been reached.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

// ============================================================================
// Address
// ============================================================================

pub fn validate_address_line(address: &str) -> ValidationResult {
    if address.trim().chars().count() >= MIN_ADDRESS_LENGTH {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Address must be at least 5 characters")
    }
}

pub fn validate_city(city: &str) -> ValidationResult {
    letters_only(city, "City should be 2–50 letters only")
}

pub fn validate_state(state: &str) -> ValidationResult {
    letters_only(state, "State should be 2–50 letters only")
}

pub fn validate_postal_code(postal_code: &str) -> ValidationResult {
    if POSTAL_CODE.is_match(postal_code.trim()) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Invalid postal code")
    }
}

pub fn validate_country(country: &str) -> ValidationResult {
    letters_only(country, "Country should be 2–50 letters only")
}

// ============================================================================
// Shop
// ============================================================================

pub fn validate_shop_name(shop_name: &str) -> ValidationResult {
    if shop_name.trim().chars().count() < MIN_SHOP_NAME_LENGTH {
        return ValidationResult::invalid("Shop name must be at least 3 characters long");
    }

    if SHOP_NAME.is_match(shop_name) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Shop name can only contain letters, numbers, spaces, & and -")
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn letters_only(value: &str, message: &str) -> ValidationResult {
    if LETTERS_AND_SPACES.is_match(value.trim()) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(message)
    }
}
