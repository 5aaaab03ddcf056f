//! Application state management for Termfolio
//!
//! This module contains the main application state, handling keyboard input,
//! background load results, and transitions between section views.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;

use crate::cli::StartupConfig;
use crate::content::{BlogPost, Section, SectionContent};
use crate::provider::SectionData;
use crate::refresh::DataMessage;

/// Maximum scroll offset; renderers clamp to actual content height
const MAX_SCROLL: u16 = 500;

/// The view currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// One of the portfolio sections, chosen via the tab bar
    Section(Section),
    /// A single blog post opened from the blog list
    BlogPost(i64),
}

/// Main application struct managing state and data
pub struct App {
    /// Current view
    pub view: View,
    /// Content for every section, seeded from the bundled fallback
    pub sections: HashMap<Section, SectionData>,
    /// Index of the currently selected post in the blog list
    pub selected_post: usize,
    /// Scroll offset for the current view
    pub scroll_offset: u16,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Number of background loads still in flight
    pub pending_loads: usize,
    /// Timestamp of the last applied live update
    pub last_refresh: Option<DateTime<Local>>,
    /// Flag indicating a refresh of the current section has been requested
    pub refresh_requested: bool,
    /// Flag indicating a full reload of every section has been requested
    pub full_reload_requested: bool,
}

impl App {
    /// Creates a new App with every section showing bundled content
    pub fn new() -> Self {
        let mut sections = HashMap::new();
        for &section in Section::all() {
            sections.insert(section, SectionData::bundled(section));
        }
        Self {
            view: View::Section(Section::Hero),
            sections,
            selected_post: 0,
            scroll_offset: 0,
            should_quit: false,
            show_help: false,
            pending_loads: 0,
            last_refresh: None,
            refresh_requested: false,
            full_reload_requested: false,
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// This is used to apply CLI arguments like --section to pick the
    /// initial view.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();
        if let Some(section) = config.initial_section {
            app.view = View::Section(section);
        }
        app
    }

    /// Returns the section the current view belongs to
    pub fn current_section(&self) -> Section {
        match self.view {
            View::Section(section) => section,
            View::BlogPost(_) => Section::Blog,
        }
    }

    /// Gets the data for a specific section
    pub fn section_data(&self, section: Section) -> Option<&SectionData> {
        self.sections.get(&section)
    }

    /// Returns the blog posts currently held for the Blog section
    pub fn blog_posts(&self) -> &[BlogPost] {
        match self.sections.get(&Section::Blog).map(|data| &data.content) {
            Some(SectionContent::Blog(posts)) => posts,
            _ => &[],
        }
    }

    /// Finds a blog post by id in the current blog list
    pub fn find_post(&self, id: i64) -> Option<&BlogPost> {
        self.blog_posts().iter().find(|post| post.id == id)
    }

    /// Returns true while background loads are in flight
    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    /// Applies a background load result to the section it belongs to.
    ///
    /// Successful loads replace the section content wholesale; failures are
    /// recorded next to whatever the section already shows.
    pub fn apply_message(&mut self, message: DataMessage) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        match message {
            DataMessage::SectionLoaded { section, content } => {
                if let Some(data) = self.sections.get_mut(&section) {
                    data.apply_live(content);
                }
                if section == Section::Blog {
                    self.clamp_post_selection();
                    // The open post may have disappeared from the live list
                    if let View::BlogPost(id) = self.view {
                        if self.find_post(id).is_none() {
                            self.scroll_offset = 0;
                            self.view = View::Section(Section::Blog);
                        }
                    }
                }
                self.last_refresh = Some(Local::now());
            }
            DataMessage::SectionFailed { section, error } => {
                if let Some(data) = self.sections.get_mut(&section) {
                    data.record_failure(error);
                }
            }
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// - `q`: Quit the application
    /// - `Tab`/`l`/`Right`: Next section; `BackTab`/`h`/`Left`: previous
    /// - `1`-`7`: Jump straight to a section
    /// - `j`/`Down`, `k`/`Up`: Scroll, or move the blog list selection
    /// - `g`/`G`: Jump to top/bottom of the current view
    /// - `Enter` (in Blog): Open the selected post
    /// - `Esc`: Close the open post, otherwise quit
    /// - `r`: Refresh the current section; `R`: reload everything
    /// - `?`: Toggle the help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.view {
            View::Section(section) => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                    self.next_section();
                }
                KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                    self.previous_section();
                }
                KeyCode::Char(c @ '1'..='7') => {
                    self.jump_to_section(c);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if section == Section::Blog {
                        self.move_post_selection_down();
                    } else {
                        self.scroll_down();
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if section == Section::Blog {
                        self.move_post_selection_up();
                    } else {
                        self.scroll_up();
                    }
                }
                KeyCode::Char('g') => {
                    self.scroll_to_top();
                }
                KeyCode::Char('G') => {
                    self.scroll_to_bottom();
                }
                KeyCode::Enter => {
                    if section == Section::Blog {
                        self.open_selected_post();
                    }
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('R') => {
                    self.full_reload_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            View::BlogPost(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.scroll_offset = 0;
                    self.view = View::Section(Section::Blog);
                }
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                    self.next_section();
                }
                KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                    self.previous_section();
                }
                KeyCode::Char(c @ '1'..='7') => {
                    self.jump_to_section(c);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_down();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_up();
                }
                KeyCode::Char('g') => {
                    self.scroll_to_top();
                }
                KeyCode::Char('G') => {
                    self.scroll_to_bottom();
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('R') => {
                    self.full_reload_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Switches to the given section, resetting scroll state
    fn change_section(&mut self, section: Section) {
        if self.view == View::Section(section) {
            return;
        }
        self.scroll_offset = 0;
        self.view = View::Section(section);
    }

    /// Moves to the next section in tab order, wrapping at the end
    fn next_section(&mut self) {
        let all = Section::all();
        let current = self.current_section();
        let index = all.iter().position(|&s| s == current).unwrap_or(0);
        self.change_section(all[(index + 1) % all.len()]);
    }

    /// Moves to the previous section in tab order, wrapping at the start
    fn previous_section(&mut self) {
        let all = Section::all();
        let current = self.current_section();
        let index = all.iter().position(|&s| s == current).unwrap_or(0);
        let previous = if index == 0 { all.len() - 1 } else { index - 1 };
        self.change_section(all[previous]);
    }

    /// Jumps to the section bound to a digit key ('1' through '7')
    fn jump_to_section(&mut self, digit: char) {
        let index = digit as usize - '1' as usize;
        if let Some(&section) = Section::all().get(index) {
            self.change_section(section);
        }
    }

    /// Moves the blog list selection up, wrapping to bottom if at top
    fn move_post_selection_up(&mut self) {
        let count = self.blog_posts().len();
        if count == 0 {
            return;
        }
        if self.selected_post == 0 {
            self.selected_post = count - 1;
        } else {
            self.selected_post -= 1;
        }
    }

    /// Moves the blog list selection down, wrapping to top if at bottom
    fn move_post_selection_down(&mut self) {
        let count = self.blog_posts().len();
        if count == 0 {
            return;
        }
        self.selected_post = (self.selected_post + 1) % count;
    }

    /// Opens the currently selected blog post, if any
    fn open_selected_post(&mut self) {
        let Some(id) = self.blog_posts().get(self.selected_post).map(|p| p.id) else {
            return;
        };
        self.scroll_offset = 0;
        self.view = View::BlogPost(id);
    }

    /// Keeps the blog selection inside the current list bounds
    fn clamp_post_selection(&mut self) {
        let count = self.blog_posts().len();
        if count == 0 {
            self.selected_post = 0;
        } else if self.selected_post >= count {
            self.selected_post = count - 1;
        }
    }

    /// Scrolls up in the current view, stopping at 0
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scrolls down in the current view, up to a fixed upper bound
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < MAX_SCROLL {
            self.scroll_offset += 1;
        }
    }

    /// Resets the scroll offset to the top
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Jumps the scroll offset to the bottom; the renderer clamps it
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = MAX_SCROLL;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
