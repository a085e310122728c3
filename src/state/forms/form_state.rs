//! Form state management for the order form session

use super::field::{Field, SIZE_CHOICES, TOPPINGS};
use super::validation::{validate_all, validate_field};
use super::values::{FieldErrors, FormValues};
use crate::state::{OrderRequest, SubmissionOutcome};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button row in focus order
pub const SUBMIT_ROW: usize = Field::ALL.len();

/// The order form session: values, inline errors, submit gate and last outcome
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Mirrors `validate_all(&values)`; refreshed after every mutation
    pub submit_enabled: bool,
    pub outcome: Option<SubmissionOutcome>,
    pub active_field_index: usize,
    /// Highlighted row in the toppings checklist
    pub topping_cursor: usize,
}

impl OrderForm {
    pub fn new() -> Self {
        let mut form = Self::default();
        form.refresh_validity();
        form
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn active(&self) -> Option<Field> {
        Field::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Replace a field value, validate it and refresh the submit gate
    pub fn set_field(&mut self, field: Field, value: String) {
        if !self.values.set(field, value) {
            return;
        }
        let error = validate_field(field, self.values.get(field)).err();
        tracing::debug!(field = %field, error = ?error, "field validated");
        self.errors.set(field, error);
        self.refresh_validity();
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if self.active() == Some(Field::FullName) {
            let mut name = self.values.full_name.clone();
            name.push(c);
            self.set_field(Field::FullName, name);
        }
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) {
        if self.active() == Some(Field::FullName) {
            let mut name = self.values.full_name.clone();
            name.pop();
            self.set_field(Field::FullName, name);
        }
    }

    pub fn select_size(&mut self, code: &str) {
        self.set_field(Field::Size, code.to_string());
    }

    /// Cycle forward through the size choices (placeholder included)
    pub fn next_size(&mut self) {
        let next = (self.size_choice_index() + 1) % SIZE_CHOICES.len();
        self.select_size(SIZE_CHOICES[next]);
    }

    /// Cycle backward through the size choices (placeholder included)
    pub fn prev_size(&mut self) {
        let current = self.size_choice_index();
        let prev = if current == 0 {
            SIZE_CHOICES.len() - 1
        } else {
            current - 1
        };
        self.select_size(SIZE_CHOICES[prev]);
    }

    fn size_choice_index(&self) -> usize {
        SIZE_CHOICES
            .iter()
            .position(|c| *c == self.values.size)
            .unwrap_or(0)
    }

    pub fn toggle_topping(&mut self, id: &str) {
        if self.values.toggle_topping(id) {
            self.refresh_validity();
        }
    }

    /// Toggle the topping under the checklist cursor
    pub fn toggle_selected_topping(&mut self) {
        if let Some(topping) = TOPPINGS.get(self.topping_cursor) {
            self.toggle_topping(topping.id);
        }
    }

    pub fn topping_cursor_down(&mut self) {
        if self.topping_cursor + 1 < TOPPINGS.len() {
            self.topping_cursor += 1;
        }
    }

    pub fn topping_cursor_up(&mut self) {
        self.topping_cursor = self.topping_cursor.saturating_sub(1);
    }

    /// Snapshot the payload and reset the form.
    ///
    /// Returns `None` while the submit gate is closed. Values are cleared
    /// immediately, before the submission has any result.
    pub fn begin_submission(&mut self) -> Option<OrderRequest> {
        if !self.submit_enabled {
            return None;
        }
        let request = OrderRequest::from_values(&self.values)?;
        self.values.reset();
        self.refresh_validity();
        Some(request)
    }

    /// Show the result of a submission, replacing any previous one
    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn dismiss_outcome(&mut self) {
        self.outcome = None;
    }

    fn refresh_validity(&mut self) {
        self.submit_enabled = validate_all(&self.values);
    }
}

impl Form for OrderForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
