//! # Fields Module
//!
//! Pure, per-field validation rules keyed by [`FieldKind`]. Every rule is a
//! total function from a raw string to a [`ValidationResult`](crate::common::ValidationResult).

pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::FieldKind;
pub use validators::*;
