//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Order service endpoint
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.endpoint(), Style::default().fg(Color::Blue)));

    if app.state.in_flight > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} pending", app.state.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(at) = app.state.last_outcome_at {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("last reply {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Order => format!("Tab:next  ←/→:size  Space:topping  {SUBMIT_SHORTCUT}:submit  F1:about"),
        View::About => "F1/Esc:back".to_string(),
    }
}
