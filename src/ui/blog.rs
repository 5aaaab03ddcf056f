//! Blog screens rendering
//!
//! Two views share this module: the post list with a selection cursor, and
//! the reading view for a single opened post.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::BlogPost;

/// Renders the blog post list with the current selection highlighted
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let posts = app.blog_posts();
    let mut lines: Vec<Line> = Vec::with_capacity(posts.len() * 3);

    if posts.is_empty() {
        lines.push(Line::from("No posts yet"));
    }

    for (index, post) in posts.iter().enumerate() {
        let is_selected = index == app.selected_post;
        let cursor = if is_selected { "\u{25B8} " } else { "  " }; // ▸ or space

        let title_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(cursor.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(post.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", meta_line(post)),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(format!(" Blog ({} posts) ", posts.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_height = area.height.saturating_sub(2);
    let selected_row = (app.selected_post * 3) as u16;
    let offset = follow_selection(
        &mut app.scroll_offset,
        selected_row,
        lines.len() as u16,
        inner_height,
    );

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Clamps the list offset and nudges it so the selected entry stays visible.
///
/// The window only moves when the selection leaves it, so the list holds
/// still while the cursor walks entries that are already on screen. Each
/// entry is three rows; the title and metadata rows are kept inside the
/// viewport when it is tall enough for both.
fn follow_selection(
    offset: &mut u16,
    selected_row: u16,
    content_height: u16,
    viewport_height: u16,
) -> u16 {
    let max_scroll = content_height.saturating_sub(viewport_height);
    if *offset > max_scroll {
        *offset = max_scroll;
    }
    if viewport_height == 0 {
        return *offset;
    }

    let entry_rows = 2u16.min(viewport_height);
    if selected_row < *offset {
        *offset = selected_row;
    } else if selected_row + entry_rows > *offset + viewport_height {
        *offset = selected_row + entry_rows - viewport_height;
    }
    *offset
}

/// Renders a single opened post with scrolling
pub fn render_post(frame: &mut Frame, app: &mut App, id: i64, area: Rect) {
    let lines = match app.find_post(id) {
        Some(post) => build_post_lines(post),
        None => vec![Line::from("Post not found")],
    };

    let block = Block::default()
        .title(" Blog ")
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

/// Formats the metadata shown under a title: date, read time, tags
fn meta_line(post: &BlogPost) -> String {
    let mut parts = Vec::new();
    if !post.date.is_empty() {
        parts.push(post.date.clone());
    }
    parts.push(format!("{} min read", post.read_time_minutes));
    if !post.tags.is_empty() {
        parts.push(post.tags.join(", "));
    }
    parts.join(" \u{00B7} ") // ·
}

/// Builds the reading view: header, metadata, then the post body
fn build_post_lines(post: &BlogPost) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            meta_line(post),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for raw_line in post.content.lines() {
        lines.push(Line::from(raw_line.to_string()));
    }

    lines
}
