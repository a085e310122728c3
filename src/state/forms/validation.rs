//! Order form validation schema
//!
//! The schema is a static table mapping each constrained field to an ordered
//! list of rules. Values are trimmed before the rules run and the first
//! failing rule decides the error. Length and membership rules let an absent
//! value through; only the `required` rule rejects it.

use super::field::{Field, PizzaSize};
use super::values::FormValues;
use thiserror::Error;

const FULL_NAME_MIN: usize = 3;
const FULL_NAME_MAX: usize = 20;

/// A failed field constraint, displayed inline under the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("full name must be at most 20 characters")]
    FullNameTooLong,
    #[error("size must be S or M or L")]
    SizeIncorrect,
    #[error("{0} is a required field")]
    Required(Field),
}

/// A single predicate with the error it reports
struct Rule {
    check: fn(Option<&str>) -> bool,
    error: ValidationError,
}

/// Ordered rules for one field
struct FieldRules {
    field: Field,
    trim: bool,
    rules: &'static [Rule],
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

static SCHEMA: &[FieldRules] = &[
    FieldRules {
        field: Field::FullName,
        trim: true,
        rules: &[
            Rule {
                check: |v| v.is_none_or(|v| char_len(v) >= FULL_NAME_MIN),
                error: ValidationError::FullNameTooShort,
            },
            Rule {
                check: |v| v.is_none_or(|v| char_len(v) <= FULL_NAME_MAX),
                error: ValidationError::FullNameTooLong,
            },
            Rule {
                check: |v| v.is_some_and(|v| !v.is_empty()),
                error: ValidationError::Required(Field::FullName),
            },
        ],
    },
    FieldRules {
        field: Field::Size,
        trim: false,
        rules: &[
            Rule {
                check: |v| v.is_none_or(|v| PizzaSize::from_code(v).is_some()),
                error: ValidationError::SizeIncorrect,
            },
            Rule {
                check: |v| v.is_some_and(|v| !v.is_empty()),
                error: ValidationError::Required(Field::Size),
            },
        ],
    },
];

/// Validate a single field value. `None` stands for an absent value.
///
/// Fields without an entry in the schema (toppings) always pass.
pub fn validate_field(field: Field, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(entry) = SCHEMA.iter().find(|entry| entry.field == field) else {
        return Ok(());
    };
    let value = if entry.trim { value.map(str::trim) } else { value };
    match entry.rules.iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(rule.error),
        None => Ok(()),
    }
}

/// Whole-form validity: every constrained field passes its rules
pub fn validate_all(values: &FormValues) -> bool {
    SCHEMA
        .iter()
        .all(|entry| validate_field(entry.field, values.get(entry.field)).is_ok())
}
