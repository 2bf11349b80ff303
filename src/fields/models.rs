//! Field kinds and their validation rules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validators::*;
use crate::common::{ParseError, ValidationResult};

/// Semantic category of an input field. Each kind maps to exactly one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Email,
    Phone,
    Name,
    Password,
    DateOfBirth,
    AddressLine,
    City,
    State,
    PostalCode,
    Country,
    ShopName,
}

type Rule = fn(&str) -> ValidationResult;

impl FieldKind {
    pub const ALL: [FieldKind; 11] = [
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Name,
        FieldKind::Password,
        FieldKind::DateOfBirth,
        FieldKind::AddressLine,
        FieldKind::City,
        FieldKind::State,
        FieldKind::PostalCode,
        FieldKind::Country,
        FieldKind::ShopName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Name => "name",
            FieldKind::Password => "password",
            FieldKind::DateOfBirth => "dateOfBirth",
            FieldKind::AddressLine => "addressLine",
            FieldKind::City => "city",
            FieldKind::State => "state",
            FieldKind::PostalCode => "postalCode",
            FieldKind::Country => "country",
            FieldKind::ShopName => "shopName",
        }
    }

    fn rule(&self) -> Rule {
        match self {
            FieldKind::Email => validate_email,
            FieldKind::Phone => validate_phone,
            FieldKind::Name => validate_name,
            FieldKind::Password => validate_password,
            FieldKind::DateOfBirth => validate_dob,
            FieldKind::AddressLine => validate_address_line,
            FieldKind::City => validate_city,
            FieldKind::State => validate_state,
            FieldKind::PostalCode => validate_postal_code,
            FieldKind::Country => validate_country,
            FieldKind::ShopName => validate_shop_name,
        }
    }

    /// Runs this kind's rule. Age checks use the local calendar date.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        (self.rule())(raw)
    }

    /// Runs this kind's rule with age checks evaluated as of `today`.
    pub fn validate_on(&self, raw: &str, today: NaiveDate) -> ValidationResult {
        match self {
            FieldKind::DateOfBirth => validate_dob_on(raw, today),
            other => other.validate(raw),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownFieldKind(s.to_string()))
    }
}
