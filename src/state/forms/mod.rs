//! Form domain layer
//!
//! This module provides type-safe handling of the order form: field
//! definitions, raw values, the validation schema and the form session.

mod field;
mod form_state;
mod validation;
mod values;

pub use field::{size_display, topping, Field, PizzaSize, Topping, SIZE_CHOICES, TOPPINGS};
pub use form_state::{Form, OrderForm, SUBMIT_ROW};
pub use validation::{validate_all, validate_field, ValidationError};
pub use values::{FieldErrors, FormValues};
