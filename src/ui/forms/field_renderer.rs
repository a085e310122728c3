//! Field rendering utilities for forms

use crate::state::{OrderForm, TOPPINGS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line form field
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
) {
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, focus_style(is_active)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(content.block(block), area);
}

/// Draw a choice field showing the current option between arrows
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display_value: &str,
    is_active: bool,
) {
    let content = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", focus_style(is_active)),
        Span::styled(display_value, focus_style(is_active)),
        Span::styled(" ▶", focus_style(is_active)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(content.block(block), area);
}

/// Draw an inline validation message; nothing is drawn when empty
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let error = Paragraph::new(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(error, area);
}

/// Draw the toppings checklist
pub fn draw_toppings(frame: &mut Frame, area: Rect, form: &OrderForm, is_active: bool) {
    let lines: Vec<Line> = TOPPINGS
        .iter()
        .enumerate()
        .map(|(idx, topping)| {
            let mark = if form.values.has_topping(topping.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if is_active && idx == form.topping_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{mark} {}", topping.label), style))
        })
        .collect();

    let block = Block::default()
        .title(" Toppings ")
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
