//! Order form rendering

use super::field_renderer::{draw_choice_field, draw_error, draw_field_with_value, draw_toppings};
use crate::app::App;
use crate::state::{size_display, Field, SubmissionOutcome, TOPPINGS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the order form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Order Your Pizza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                         // Outcome banner
            Constraint::Length(3),                         // Full name
            Constraint::Length(1),                         // Full name error
            Constraint::Length(3),                         // Size
            Constraint::Length(1),                         // Size error
            Constraint::Length(TOPPINGS.len() as u16 + 2), // Toppings
            Constraint::Length(BUTTON_HEIGHT),             // Submit
            Constraint::Min(0),                            // Remaining space
        ])
        .margin(1)
        .split(area);

    if let Some(outcome) = &form.outcome {
        draw_outcome(frame, chunks[0], outcome);
    }

    draw_field_with_value(
        frame,
        chunks[1],
        Field::FullName.label(),
        &form.values.full_name,
        form.active() == Some(Field::FullName),
    );
    draw_error(frame, chunks[2], &form.errors.message(Field::FullName));

    draw_choice_field(
        frame,
        chunks[3],
        Field::Size.label(),
        size_display(&form.values.size),
        form.active() == Some(Field::Size),
    );
    draw_error(frame, chunks[4], &form.errors.message(Field::Size));

    draw_toppings(
        frame,
        chunks[5],
        form,
        form.active() == Some(Field::Toppings),
    );

    let button_area = Rect {
        width: chunks[6].width.min(14),
        ..chunks[6]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_focused(),
        form.submit_enabled,
    );
}

/// Draw the success or failure banner
fn draw_outcome(frame: &mut Frame, area: Rect, outcome: &SubmissionOutcome) {
    let color = if outcome.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    let banner = Paragraph::new(Span::styled(
        outcome.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(banner, area);
}
