//! Skills screen rendering
//!
//! Renders skill categories as blocks of proficiency bars.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::{Section, SectionContent, SkillGroup};

/// Width of the proficiency bar in cells
const BAR_WIDTH: usize = 20;

/// Builds a proficiency bar string for a 0-100 level
fn level_bar(level: u8) -> String {
    let filled = (level.min(100) as usize * BAR_WIDTH) / 100;
    let mut bar = "\u{2588}".repeat(filled); // █
    bar.push_str(&"\u{2591}".repeat(BAR_WIDTH - filled)); // ░
    bar
}

/// Color for a proficiency level (stronger = greener)
fn level_color(level: u8) -> Color {
    if level >= 90 {
        Color::Green
    } else if level >= 80 {
        Color::Cyan
    } else if level >= 65 {
        Color::Yellow
    } else {
        Color::Gray
    }
}

/// Renders the skills view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let lines = match app.section_data(Section::Skills).map(|d| &d.content) {
        Some(SectionContent::Skills(groups)) => build_lines(groups),
        _ => vec![Line::from("No skills available")],
    };

    let block = Block::default()
        .title(" Skills ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_height = area.height.saturating_sub(2);
    let offset = super::clamp_scroll(&mut app.scroll_offset, lines.len() as u16, inner_height);

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Builds one header line per category and one bar line per skill
fn build_lines(groups: &[SkillGroup]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for group in groups {
        lines.push(Line::from(Span::styled(
            format!("{} {}", group.icon, group.category),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for skill in &group.skills {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<28} ", skill.name)),
                Span::styled(
                    level_bar(skill.level),
                    Style::default().fg(level_color(skill.level)),
                ),
                Span::styled(
                    format!(" {:>3}%", skill.level),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }

        lines.push(Line::from(""));
    }

    lines
}
