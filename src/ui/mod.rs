//! UI module for rendering the TUI

mod components;
mod forms;
pub mod hello_world;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match &app.state.current_view {
        View::Order => forms::draw_order_form(frame, main_area, app),
        View::About => hello_world::draw(frame, main_area),
    }

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::MockOrderClientTrait;
    use crate::state::SubmissionOutcome;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    /// Flatten a rendered buffer into lines of text
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn test_app() -> App {
        let mut client = MockOrderClientTrait::new();
        client
            .expect_endpoint()
            .return_const("http://localhost:9009/api/order".to_string());
        App::new(Arc::new(client))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_order_form_renders_fields() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("Order Your Pizza"));
        assert!(text.contains("Full Name"));
        assert!(text.contains("----Choose Size----"));
        assert!(text.contains("[ ] Pepperoni"));
        assert!(text.contains("Submit"));
        assert!(text.contains("http://localhost:9009/api/order"));
    }

    #[test]
    fn test_inline_errors_render() {
        let mut app = test_app();
        app.state.form.input_char('C');
        app.state.form.select_size("");
        let text = render(&app);
        assert!(text.contains("full name must be at least 3 characters"));
        assert!(text.contains("size must be S or M or L"));
    }

    #[test]
    fn test_outcome_banner_renders() {
        let mut app = test_app();
        app.state
            .submission_finished(SubmissionOutcome::Failure("Size is required".to_string()));
        let text = render(&app);
        assert!(text.contains("Size is required"));
        assert!(text.contains("last reply"));
    }

    #[test]
    fn test_about_view_renders_fixture() {
        let mut app = test_app();
        app.state.current_view = View::About;
        let text = render(&app);
        assert!(text.contains(hello_world::SECTION_HEADING));
        assert!(!text.contains("Order Your Pizza"));
    }
}
