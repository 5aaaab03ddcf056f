//! Hero screen rendering
//!
//! Renders the landing banner with the owner's name, tagline, and a short
//! introduction, centered in the content area.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{Section, SectionContent};

/// Renders the hero banner
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let lines = match app.section_data(Section::Hero).map(|d| &d.content) {
        Some(SectionContent::Hero(hero)) => vec![
            Line::from(Span::styled(
                hero.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                hero.subtitle.clone(),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(Span::styled(
                hero.description.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Tab or 1-7 to explore",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        _ => vec![Line::from("No hero content available")],
    };

    // Center the banner vertically
    let banner_height = (lines.len() as u16 + 2).min(area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(banner_height),
            Constraint::Min(0),
        ])
        .split(area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &mut App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_hero_renders_name_and_subtitle() {
        let mut app = App::new();
        let content = render_to_string(&mut app);
        assert!(content.contains("Mayank Rawat"));
        assert!(content.contains("iOS Developer"));
    }

    #[test]
    fn test_hero_shows_navigation_hint() {
        let mut app = App::new();
        let content = render_to_string(&mut app);
        assert!(content.contains("Press Tab"));
    }
}
