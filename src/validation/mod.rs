//! Validation for loaded characters.
//!
//! Parsing never fails, so malformed data shows up here instead: dropped
//! lines, unknown parts, dangling targets, unaddressable layers and
//! composition cycles. Backs `compo validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::character::Character;

/// Run all validation checks against a character.
pub fn validate_character(character: &Character) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_cycles(character));
    result.merge(checks::check_duplicates(character));
    result.merge(checks::check_addressable(character));
    result.merge(checks::check_skipped_lines(character));
    result.merge(checks::check_parts(character));
    result.merge(checks::check_baseline(character));

    result
}
