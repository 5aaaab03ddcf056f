//! UI rendering module for Termfolio
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. The top-level [`render`]
//! function draws the shared chrome (tab bar and footer) and dispatches the
//! content area to the view for the current section.

pub mod about;
pub mod blog;
pub mod contact;
pub mod help_overlay;
pub mod hero;
pub mod projects;
pub mod resume;
pub mod skills;

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::content::Section;
use crate::provider::{DataSource, SectionData};

/// Renders the whole interface for the current application state
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state; scroll offsets may be clamped during render
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: tab bar, content area, help text at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar with separator
            Constraint::Min(3),    // Section content
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_tab_bar(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Dispatches the content area to the renderer for the current view
fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.view {
        View::Section(Section::Hero) => hero::render(frame, app, area),
        View::Section(Section::About) => about::render(frame, app, area),
        View::Section(Section::Skills) => skills::render(frame, app, area),
        View::Section(Section::Projects) => projects::render(frame, app, area),
        View::Section(Section::Contact) => contact::render(frame, app, area),
        View::Section(Section::Blog) => blog::render_list(frame, app, area),
        View::Section(Section::Resume) => resume::render(frame, app, area),
        View::BlogPost(id) => blog::render_post(frame, app, id, area),
    }
}

/// Renders the brand, the numbered section tabs, and a separator line
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(11), Constraint::Min(0)])
        .split(rows[0]);

    let brand = Paragraph::new(Span::styled(
        "TERMFOLIO",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, columns[0]);

    let current = app.current_section();
    let selected = Section::all()
        .iter()
        .position(|&s| s == current)
        .unwrap_or(0);

    let titles: Vec<Line> = Section::all()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(section.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, columns[1]);

    let separator = "─".repeat(rows[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )),
        rows[1],
    );
}

/// Renders the help text at the bottom of the screen with data provenance
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Tab/1-7", Style::default().fg(Color::Yellow)),
        Span::raw(" Sections  "),
    ];

    match app.view {
        View::Section(Section::Blog) => {
            spans.push(Span::styled("j/k", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Select  "));
            spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Open  "));
        }
        View::BlogPost(_) => {
            spans.push(Span::styled("j/k", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Scroll  "));
            spans.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Back  "));
        }
        View::Section(_) => {
            spans.push(Span::styled("j/k", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" Scroll  "));
        }
    }

    spans.push(Span::styled("r", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Refresh  "));
    spans.push(Span::styled("R", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Reload  "));
    spans.push(Span::styled("?", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Help  "));
    spans.push(Span::styled("q", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Quit"));

    if let Some(data) = app.section_data(app.current_section()) {
        spans.push(source_span(data));
    }

    // Data freshness indicator
    if let Some(last_refresh) = app.last_refresh {
        let elapsed = Local::now() - last_refresh;
        let mins_ago = elapsed.num_minutes();
        let freshness_text = if mins_ago < 1 {
            " │ Data: just now".to_string()
        } else if mins_ago < 60 {
            format!(" │ Data: {}m ago", mins_ago)
        } else {
            format!(" │ Data: {}h ago", elapsed.num_hours())
        };
        spans.push(Span::styled(
            freshness_text,
            Style::default().fg(Color::DarkGray),
        ));
    }

    if app.is_loading() {
        spans.push(Span::styled(
            " │ fetching...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Footer label describing where the current section's content came from
fn source_span(data: &SectionData) -> Span<'static> {
    match (data.source, data.source_error.is_some()) {
        (DataSource::Api, false) => Span::styled(" │ live", Style::default().fg(Color::Green)),
        (DataSource::Api, true) => Span::styled(
            " │ live (refresh failed)",
            Style::default().fg(Color::Yellow),
        ),
        (DataSource::Bundled, true) => Span::styled(
            " │ offline copy (API unreachable)",
            Style::default().fg(Color::Yellow),
        ),
        (DataSource::Bundled, false) => {
            Span::styled(" │ offline copy", Style::default().fg(Color::DarkGray))
        }
    }
}

/// Clamps a scroll offset to the drawable range and returns it.
///
/// `content_height` counts logical lines before wrapping, so the bound is an
/// estimate for heavily wrapped content, same as the rest of the scrolling
/// behavior here.
fn clamp_scroll(offset: &mut u16, content_height: u16, viewport_height: u16) -> u16 {
    let max_scroll = content_height.saturating_sub(viewport_height);
    if *offset > max_scroll {
        *offset = max_scroll;
    }
    *offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::DataMessage;
    use ratatui::{backend::TestBackend, Terminal};

    /// Renders the full interface into a test buffer and returns its text
    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_produces_non_empty_buffer() {
        let mut app = App::new();
        let content = render_to_string(&mut app, 80, 24);
        assert!(content.chars().any(|c| c != ' '));
    }

    #[test]
    fn test_tab_bar_shows_all_section_titles() {
        let mut app = App::new();
        let content = render_to_string(&mut app, 120, 24);
        for section in Section::all() {
            assert!(
                content.contains(section.title()),
                "tab bar should list {}",
                section.title()
            );
        }
    }

    #[test]
    fn test_footer_shows_key_hints_and_offline_source() {
        let mut app = App::new();
        let content = render_to_string(&mut app, 120, 24);
        assert!(content.contains("Quit"));
        assert!(content.contains("offline copy"));
    }

    #[test]
    fn test_footer_marks_live_content() {
        let mut app = App::new();
        app.apply_message(DataMessage::SectionLoaded {
            section: Section::Hero,
            content: crate::content::fallback::for_section(Section::Hero),
        });
        let content = render_to_string(&mut app, 120, 24);
        assert!(content.contains("live"));
        assert!(content.contains("Data: just now"));
    }

    #[test]
    fn test_footer_marks_failed_fetch() {
        let mut app = App::new();
        app.apply_message(DataMessage::SectionFailed {
            section: Section::Hero,
            error: "connection refused".to_string(),
        });
        let content = render_to_string(&mut app, 120, 24);
        assert!(content.contains("API unreachable"));
    }

    #[test]
    fn test_help_overlay_draws_on_top() {
        let mut app = App::new();
        app.show_help = true;
        let content = render_to_string(&mut app, 80, 24);
        assert!(content.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_every_section_view_renders() {
        for &section in Section::all() {
            let mut app = App::new();
            app.view = View::Section(section);
            let content = render_to_string(&mut app, 100, 30);
            assert!(
                content.chars().any(|c| c != ' '),
                "{} view should render",
                section.title()
            );
        }
    }

    #[test]
    fn test_clamp_scroll_limits_offset() {
        let mut offset = 50;
        let clamped = clamp_scroll(&mut offset, 30, 10);
        assert_eq!(clamped, 20);
        assert_eq!(offset, 20);

        let mut small = 3;
        assert_eq!(clamp_scroll(&mut small, 30, 10), 3);

        let mut short_content = 5;
        assert_eq!(clamp_scroll(&mut short_content, 4, 10), 0);
    }
}
