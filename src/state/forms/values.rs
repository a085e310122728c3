//! Raw form values and per-field error messages

use super::field::{topping, Field};
use super::validation::ValidationError;
use std::collections::BTreeSet;

/// Current values of the order form, as typed/selected by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    /// Raw size code; empty until a size is chosen
    pub size: String,
    /// Selected topping ids, kept ordered so payloads are deterministic
    pub toppings: BTreeSet<String>,
}

impl FormValues {
    /// Raw value of a scalar field. Toppings have no scalar value.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Size => Some(&self.size),
            Field::Toppings => None,
        }
    }

    /// Overwrite a scalar field; returns false for fields without a scalar value
    pub fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::FullName => self.full_name = value,
            Field::Size => self.size = value,
            Field::Toppings => return false,
        }
        true
    }

    /// Toggle a topping on or off. Unknown ids are ignored.
    pub fn toggle_topping(&mut self, id: &str) -> bool {
        if topping(id).is_none() {
            return false;
        }
        if !self.toppings.remove(id) {
            self.toppings.insert(id.to_string());
        }
        true
    }

    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.contains(id)
    }

    /// Restore the initial (empty) values
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Latest validation message per field; `None` means no error is shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<ValidationError>,
    pub size: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::FullName => self.full_name.as_ref(),
            Field::Size => self.size.as_ref(),
            Field::Toppings => None,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match field {
            Field::FullName => self.full_name = error,
            Field::Size => self.size = error,
            Field::Toppings => {}
        }
    }

    /// Message to render under a field, empty when valid
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let values = FormValues::default();
        assert_eq!(values.full_name, "");
        assert_eq!(values.size, "");
        assert!(values.toppings.is_empty());
    }

    #[test]
    fn test_set_and_get_scalar_fields() {
        let mut values = FormValues::default();
        assert!(values.set(Field::FullName, "Cherry".to_string()));
        assert!(values.set(Field::Size, "M".to_string()));
        assert!(!values.set(Field::Toppings, "1".to_string()));
        assert_eq!(values.get(Field::FullName), Some("Cherry"));
        assert_eq!(values.get(Field::Size), Some("M"));
        assert_eq!(values.get(Field::Toppings), None);
    }

    #[test]
    fn test_toggle_topping() {
        let mut values = FormValues::default();
        assert!(values.toggle_topping("2"));
        assert!(values.has_topping("2"));
        assert!(values.toggle_topping("2"));
        assert!(!values.has_topping("2"));
    }

    #[test]
    fn test_toggle_unknown_topping_is_ignored() {
        let mut values = FormValues::default();
        assert!(!values.toggle_topping("42"));
        assert!(values.toppings.is_empty());
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut values = FormValues {
            full_name: "Cherry".to_string(),
            size: "L".to_string(),
            ..Default::default()
        };
        values.toggle_topping("1");
        values.reset();
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn test_field_errors_message() {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.message(Field::Size), "");
        errors.set(Field::Size, Some(ValidationError::SizeIncorrect));
        assert_eq!(errors.message(Field::Size), "size must be S or M or L");
        errors.set(Field::Size, None);
        assert!(errors.get(Field::Size).is_none());
    }
}
