//! Resume screen rendering
//!
//! Renders work history, education, and certifications as one scrollable
//! document.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{Resume, Section, SectionContent};

/// Renders the resume view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let lines = match app.section_data(Section::Resume).map(|d| &d.content) {
        Some(SectionContent::Resume(resume)) => build_lines(resume),
        _ => vec![Line::from("No resume available")],
    };

    let block = Block::default()
        .title(" Resume ")
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

/// Section header line ("EXPERIENCE", "EDUCATION", ...)
fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Builds the resume document lines
fn build_lines(resume: &Resume) -> Vec<Line<'static>> {
    let mut lines = vec![heading("EXPERIENCE"), Line::from("")];

    for job in &resume.experience {
        lines.push(Line::from(vec![
            Span::styled(
                job.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", job.company),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", job.period),
            Style::default().fg(Color::DarkGray),
        )));
        for point in &job.description {
            lines.push(Line::from(format!("  \u{2022} {}", point))); // •
        }
        lines.push(Line::from(""));
    }

    lines.push(heading("EDUCATION"));
    lines.push(Line::from(""));
    for entry in &resume.education {
        lines.push(Line::from(vec![
            Span::styled(
                entry.degree.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.school),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.period),
            Style::default().fg(Color::DarkGray),
        )));
        if !entry.description.is_empty() {
            lines.push(Line::from(format!("  {}", entry.description)));
        }
        lines.push(Line::from(""));
    }

    if !resume.certifications.is_empty() {
        lines.push(heading("CERTIFICATIONS"));
        lines.push(Line::from(""));
        for certification in &resume.certifications {
            lines.push(Line::from(format!("  \u{2022} {}", certification)));
        }
    }

    lines
}
