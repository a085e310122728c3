//! Application state definitions

use super::forms::OrderForm;
use super::order::SubmissionOutcome;
use chrono::{DateTime, Local};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Order,
    /// Static "Hello World" screen
    About,
}

impl View {
    pub fn toggle_about(&self) -> Self {
        match self {
            Self::Order => Self::About,
            Self::About => Self::Order,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Order form session
    pub form: OrderForm,

    // Submissions
    /// Requests sent whose outcome has not arrived yet
    pub in_flight: usize,
    pub last_outcome_at: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: OrderForm::new(),
            ..Default::default()
        }
    }

    pub fn submission_started(&mut self) {
        self.in_flight += 1;
    }

    /// Apply a finished submission to the form and bookkeeping
    pub fn submission_finished(&mut self, outcome: SubmissionOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_outcome_at = Some(Local::now());
        self.form.apply_outcome(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_order() {
        let state = AppState::new();
        assert_eq!(state.current_view, View::Order);
        assert_eq!(state.in_flight, 0);
        assert!(state.last_outcome_at.is_none());
    }

    #[test]
    fn test_toggle_about() {
        assert_eq!(View::Order.toggle_about(), View::About);
        assert_eq!(View::About.toggle_about(), View::Order);
    }

    #[test]
    fn test_submission_bookkeeping() {
        let mut state = AppState::new();
        state.submission_started();
        state.submission_started();
        assert_eq!(state.in_flight, 2);

        state.submission_finished(SubmissionOutcome::Success("Order received".to_string()));
        assert_eq!(state.in_flight, 1);
        assert!(state.last_outcome_at.is_some());
        assert_eq!(
            state.form.outcome,
            Some(SubmissionOutcome::Success("Order received".to_string()))
        );
    }

    #[test]
    fn test_finished_without_start_does_not_underflow() {
        let mut state = AppState::new();
        state.submission_finished(SubmissionOutcome::Failure("x".to_string()));
        assert_eq!(state.in_flight, 0);
    }
}
