//! Projects screen rendering
//!
//! Renders the project list with descriptions, technology tags, and links.
//! Link lines are omitted when a project has no URL to show.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{Project, Section, SectionContent};

/// Renders the projects view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let (lines, count) = match app.section_data(Section::Projects).map(|d| &d.content) {
        Some(SectionContent::Projects(projects)) => (build_lines(projects), projects.len()),
        _ => (vec![Line::from("No projects available")], 0),
    };

    let block = Block::default()
        .title(format!(" Projects ({}) ", count))
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

/// Builds the lines for one project after another
fn build_lines(projects: &[Project]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for project in projects {
        lines.push(Line::from(vec![
            Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", project.category),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(format!("  {}", project.description)));
        lines.push(Line::from(vec![
            Span::styled("  Tech: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                project.technologies.join(", "),
                Style::default().fg(Color::Gray),
            ),
        ]));

        if !project.github_url.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("  GitHub: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    project.github_url.clone(),
                    Style::default().fg(Color::Blue),
                ),
            ]));
        }
        if !project.live_url.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("  Live: ", Style::default().fg(Color::DarkGray)),
                Span::styled(project.live_url.clone(), Style::default().fg(Color::Blue)),
            ]));
        }

        lines.push(Line::from(""));
    }

    lines
}
