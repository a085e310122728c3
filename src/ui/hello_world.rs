//! Static "Hello World" screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEADING: &str = "Hello World Component";
pub const NAV_LINKS: [&str; 3] = ["Home", "About", "Blog"];
pub const SECTION_HEADING: &str = "The Truth";
pub const BODY: &str = "JavaScript is pretty awesome";

/// Draw the fixed heading, navigation and section
pub fn draw(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let link = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);

    let mut nav = Vec::new();
    for (idx, label) in NAV_LINKS.iter().enumerate() {
        if idx > 0 {
            nav.push(Span::raw("  "));
        }
        nav.push(Span::styled(*label, link));
    }

    let lines = vec![
        Line::from(Span::styled(HEADING, bold)),
        Line::from(""),
        Line::from(nav),
        Line::from(""),
        Line::from(Span::styled(SECTION_HEADING, bold)),
        Line::from(BODY),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" About ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
