//! Contact screen rendering
//!
//! Renders the contact channels as labelled rows. Channels the content does
//! not provide are left out entirely.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::{Contact, Section, SectionContent};

/// Renders the contact view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let lines = match app.section_data(Section::Contact).map(|d| &d.content) {
        Some(SectionContent::Contact(contact)) => build_lines(contact),
        _ => vec![Line::from("No contact details available")],
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_height = area.height.saturating_sub(2);
    let offset = super::clamp_scroll(&mut app.scroll_offset, lines.len() as u16, inner_height);

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// One labelled row per available channel
fn build_lines(contact: &Contact) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Let's build something together.",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        channel_line("Email", &contact.email),
    ];

    if let Some(github) = &contact.github {
        lines.push(channel_line("GitHub", github));
    }
    if let Some(linkedin) = &contact.linkedin {
        lines.push(channel_line("LinkedIn", linkedin));
    }
    if let Some(instagram) = &contact.instagram {
        lines.push(channel_line("Instagram", instagram));
    }
    if let Some(whatsapp) = &contact.whatsapp {
        lines.push(channel_line("WhatsApp", whatsapp));
    }
    if let Some(phone) = &contact.phone {
        lines.push(channel_line("Phone", phone));
    }

    lines
}

/// Formats a single "label: value" row
fn channel_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<11}", label),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(value.to_string()),
    ])
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

    fn lines_to_text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_contact_renders_email_and_handles() {
        let mut app = App::new();
        let content = render_to_string(&mut app);
        assert!(content.contains("rawat.mayank1234@gmail.com"));
        assert!(content.contains("GitHub"));
        assert!(content.contains("WhatsApp"));
    }

    #[test]
    fn test_missing_channels_are_omitted() {
        let contact = Contact {
            email: "a@b.c".to_string(),
            linkedin: None,
            github: None,
            instagram: None,
            whatsapp: None,
            phone: None,
            linkedin_url: None,
            github_url: None,
            instagram_url: None,
            whatsapp_url: None,
        };
        let text = lines_to_text(&build_lines(&contact));
        assert!(text.contains("a@b.c"));
        assert!(!text.contains("GitHub"));
        assert!(!text.contains("Phone"));
    }
}
