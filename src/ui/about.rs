//! About screen rendering
//!
//! Renders the biography with headline figures below it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{About, Section, SectionContent};

/// Renders the about view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let lines = match app.section_data(Section::About).map(|d| &d.content) {
        Some(SectionContent::About(about)) => build_lines(about),
        _ => vec![Line::from("No biography available")],
    };

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_height = area.height.saturating_sub(2);
    let offset = super::clamp_scroll(&mut app.scroll_offset, lines.len() as u16, inner_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Builds the biography lines: name, title, paragraphs, then highlights
fn build_lines(about: &About) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            about.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            about.title.clone(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    for paragraph in about.description.split("\n\n") {
        lines.push(Line::from(paragraph.trim().to_string()));
        lines.push(Line::from(""));
    }

    for highlight in &about.highlights {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>4}  ", highlight.number),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(highlight.label.clone(), Style::default().fg(Color::Gray)),
        ]));
    }

    lines
}
