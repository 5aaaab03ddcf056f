//! Termfolio - browse a developer portfolio from the terminal
//!
//! A terminal UI application that shows the portfolio sections instantly from
//! bundled content, then swaps in live API data as background fetches finish.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use termfolio::api::ApiClient;
use termfolio::app::App;
use termfolio::cli::{Cli, StartupConfig};
use termfolio::config::ApiConfig;
use termfolio::content::Section;
use termfolio::provider::SectionProvider;
use termfolio::refresh::{self, LoadHandle};
use termfolio::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so tracing output cannot corrupt the drawn interface
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let startup = match StartupConfig::from_cli(&cli) {
        Ok(startup) => startup,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    };
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    };

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = ApiClient::new(config.base_url.clone(), config.timeout);
    let provider = SectionProvider::new(client);
    let mut app = App::with_startup_config(startup);
    let mut loads = LoadHandle::new(provider);

    // First frame comes straight from the bundled content
    terminal.draw(|f| ui::render(f, &mut app))?;

    // Live data streams in behind it
    loads.load_sections(Section::all());
    app.pending_loads += Section::all().len();

    // Main event loop
    loop {
        // Apply any finished background loads
        while let Some(message) = refresh::try_recv(&mut loads) {
            app.apply_message(message);
        }

        terminal.draw(|f| ui::render(f, &mut app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.refresh_requested {
            app.refresh_requested = false;
            loads.refresh_section(app.current_section());
            app.pending_loads += 1;
        }

        if app.full_reload_requested {
            app.full_reload_requested = false;
            loads.full_reload();
            app.pending_loads += Section::all().len();
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
