//! Application state and core logic

use crate::api::{submit_order, OrderClientTrait};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, Field, Form, SubmissionOutcome, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Order service client shared with submission tasks
    client: Arc<dyn OrderClientTrait>,
    endpoint: String,
    /// Whether the app should quit
    quit: bool,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn OrderClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let endpoint = client.endpoint();
        Self {
            state: AppState::new(),
            client,
            endpoint,
            quit: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// URL orders are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Order => self.handle_order_key(key),
            View::About => self.handle_about_key(key),
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            self.state.current_view = View::Order;
        }
    }

    /// Handle keys in the order form
    fn handle_order_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::F(1) => self.state.current_view = self.state.current_view.toggle_about(),
            KeyCode::Esc => form.dismiss_outcome(),
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(SUBMIT_MODIFIER) =>
            {
                self.submit();
            }
            _ => match form.active() {
                Some(Field::FullName) => match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        form.input_char(c)
                    }
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Enter => form.next_field(),
                    _ => {}
                },
                Some(Field::Size) => match key.code {
                    KeyCode::Left => form.prev_size(),
                    KeyCode::Right => form.next_size(),
                    KeyCode::Char(c @ ('s' | 'S' | 'm' | 'M' | 'l' | 'L')) => {
                        form.select_size(&c.to_ascii_uppercase().to_string())
                    }
                    KeyCode::Backspace | KeyCode::Delete => form.select_size(""),
                    KeyCode::Enter => form.next_field(),
                    _ => {}
                },
                Some(Field::Toppings) => match key.code {
                    KeyCode::Up | KeyCode::Char('k') => form.topping_cursor_up(),
                    KeyCode::Down | KeyCode::Char('j') => form.topping_cursor_down(),
                    KeyCode::Char(' ') | KeyCode::Enter => form.toggle_selected_topping(),
                    _ => {}
                },
                None => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
            },
        }
    }

    /// Start a submission if the form validates.
    ///
    /// The form is reset right away; the outcome arrives later through
    /// [`App::poll_submissions`]. Returns false when the submit gate is closed.
    pub fn submit(&mut self) -> bool {
        let Some(request) = self.state.form.begin_submission() else {
            tracing::debug!("Submit ignored, form is invalid");
            return false;
        };
        self.state.submission_started();

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = submit_order(client.as_ref(), &request).await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(outcome);
        });
        true
    }

    /// Apply every submission outcome that has arrived; returns how many
    pub fn poll_submissions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.submission_finished(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for the next submission outcome and apply it.
    ///
    /// Returns `None` straight away when no submission is in flight.
    pub async fn wait_for_outcome(&mut self) -> Option<SubmissionOutcome> {
        if self.state.in_flight == 0 {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        self.state.submission_finished(outcome.clone());
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockOrderClientTrait, OrderReceipt};
    use crate::state::{FormValues, PizzaSize};
    use mockall::predicate::function;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_s() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    fn mock_client() -> MockOrderClientTrait {
        let mut client = MockOrderClientTrait::new();
        client
            .expect_endpoint()
            .return_const("http://localhost:9009/api/order".to_string());
        client
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Fill in "Cherry" / Medium through key presses
    fn fill_cherry(app: &mut App) {
        type_text(app, "Cherry");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('m')));
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_full_name() {
            let mut app = App::new(Arc::new(mock_client()));
            type_text(&mut app, "Cherry");
            assert_eq!(app.state.form.values.full_name, "Cherry");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.values.full_name, "Cherr");
        }

        #[test]
        fn test_letters_in_size_field_pick_size() {
            let mut app = App::new(Arc::new(mock_client()));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('l')));
            assert_eq!(app.state.form.values.size, "L");
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.state.form.values.size, "");
            app.handle_key(key(KeyCode::Char('x')));
            assert_eq!(app.state.form.values.size, "");
            // Typing outside the name field leaves the name alone
            assert_eq!(app.state.form.values.full_name, "");
        }

        #[test]
        fn test_space_toggles_topping() {
            let mut app = App::new(Arc::new(mock_client()));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Char(' ')));
            assert!(app.state.form.values.has_topping("2"));
        }

        #[test]
        fn test_f1_toggles_about_view() {
            let mut app = App::new(Arc::new(mock_client()));
            app.handle_key(key(KeyCode::F(1)));
            assert_eq!(app.state.current_view, View::About);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.current_view, View::Order);
        }

        #[test]
        fn test_submit_ignored_while_invalid() {
            let mut client = mock_client();
            client.expect_place_order().never();
            let mut app = App::new(Arc::new(client));
            type_text(&mut app, "Ch");
            app.handle_key(ctrl_s());
            assert_eq!(app.state.in_flight, 0);
            assert_eq!(app.state.form.values.full_name, "Ch");
        }

        #[test]
        fn test_request_quit() {
            let mut app = App::new(Arc::new(mock_client()));
            assert!(!app.should_quit());
            app.request_quit();
            assert!(app.should_quit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_shows_message_and_clears_form() {
            let mut client = mock_client();
            client
                .expect_place_order()
                .with(function(|r: &crate::state::OrderRequest| {
                    r.customer == "Cherry" && r.size == PizzaSize::Medium && r.toppings.is_empty()
                }))
                .times(1)
                .returning(|_| {
                    Ok(OrderReceipt {
                        message: "Order received".to_string(),
                    })
                });

            let mut app = App::new(Arc::new(client));
            fill_cherry(&mut app);
            assert!(app.state.form.submit_enabled);

            app.handle_key(ctrl_s());
            // Reset happens before the outcome arrives
            assert_eq!(app.state.form.values, FormValues::default());
            assert!(!app.state.form.submit_enabled);
            assert_eq!(app.state.in_flight, 1);

            let outcome = app.wait_for_outcome().await;
            assert_eq!(
                outcome,
                Some(SubmissionOutcome::Success("Order received".to_string()))
            );
            assert_eq!(app.state.form.outcome, outcome);
            assert_eq!(app.state.in_flight, 0);
        }

        #[tokio::test]
        async fn test_failure_shows_server_message() {
            let mut client = mock_client();
            client.expect_place_order().times(1).returning(|_| {
                Err(ApiError::Rejected {
                    status: 422,
                    message: "Size is required".to_string(),
                })
            });

            let mut app = App::new(Arc::new(client));
            fill_cherry(&mut app);
            app.state.form.set_active_field(crate::state::SUBMIT_ROW);
            app.handle_key(key(KeyCode::Enter));

            app.wait_for_outcome().await;
            assert_eq!(
                app.state.form.outcome,
                Some(SubmissionOutcome::Failure("Size is required".to_string()))
            );
        }

        #[tokio::test]
        async fn test_wait_returns_none_when_idle() {
            let mut client = mock_client();
            client.expect_place_order().never();
            let mut app = App::new(Arc::new(client));

            let outcome = tokio::time::timeout(
                std::time::Duration::from_secs(1),
                app.wait_for_outcome(),
            )
            .await;
            assert_eq!(outcome, Ok(None));
            assert_eq!(app.state.last_outcome_at, None);
        }

        #[tokio::test]
        async fn test_poll_applies_arrived_outcomes() {
            let mut client = mock_client();
            client.expect_place_order().times(1).returning(|_| {
                Ok(OrderReceipt {
                    message: "Order received".to_string(),
                })
            });

            let mut app = App::new(Arc::new(client));
            fill_cherry(&mut app);
            assert!(app.submit());

            let mut applied = 0;
            for _ in 0..100 {
                applied += app.poll_submissions();
                if applied > 0 {
                    break;
                }
                tokio::task::yield_now().await;
            }
            assert_eq!(applied, 1);
            assert!(app.state.form.outcome.as_ref().is_some_and(|o| o.is_success()));
        }
    }
}
