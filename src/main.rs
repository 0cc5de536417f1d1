//! # Hexa CLI Entry Point
//!
//! Hexa is a terminal browser for a curated collection of script snippets.
//! The catalog is compiled into the binary; the TUI presents it through
//! three views (home, category list, script detail) with a
//! copy-to-clipboard action on the detail view.
//!
//! ## Usage
//!
//! ```bash
//! # Browse the catalog
//! hexa
//!
//! # Open directly on a category's script list
//! hexa --category rgt
//!
//! # Use a different theme for this session (and persist the choice)
//! hexa --theme "Tokyo Night"
//!
//! # Print the catalog and exit
//! hexa --catalog
//! hexa --catalog --json
//! ```
//!
//! ## Key Bindings
//!
//! - `j` / `Down`, `k` / `Up` - move the selection (scroll on the detail view)
//! - `Enter` / `l` - open the highlighted category or script
//! - `Esc` / `h` / `Backspace` - go back one view
//! - `y` / `c` - copy the script source to the clipboard (detail view)
//! - `?` - toggle the help overlay
//! - `q` / `Q` - quit

use hexa::catalog::Catalog;
use hexa::ui;
use hexa::ui::app::App;
use hexa::ui::config::Config;
use hexa::ui::navigator::Page;
use hexa::ui::theme::Theme;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Hexa - browse and copy curated script snippets from your terminal
#[derive(Parser, Debug)]
#[command(name = "hexa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and copy curated script snippets", long_about = None)]
struct Args {
    /// Theme to use (persisted for future sessions)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Open directly on a category's script list
    #[arg(short, long, value_name = "KEY")]
    category: Option<String>,

    /// Print the catalog and exit
    #[arg(long)]
    catalog: bool,

    /// With --catalog, print as JSON instead of text
    #[arg(long, requires = "catalog")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let catalog = Catalog::builtin();

    if args.catalog {
        print_catalog(&catalog, args.json)?;
        return Ok(());
    }

    // Resolve the theme: --theme overrides the configured one, and a valid
    // override is persisted for future sessions.
    let mut config = Config::load();
    let theme = match &args.theme {
        Some(name) => match Theme::by_name(name) {
            Some(theme) => {
                if config.theme != theme.name {
                    config.theme = theme.name.to_string();
                    if let Err(e) = config.save() {
                        eprintln!("Warning: Could not save config: {e}");
                    }
                }
                theme
            }
            None => {
                eprintln!(
                    "Warning: Unknown theme '{name}', using {}",
                    Theme::default_theme().name
                );
                eprintln!(
                    "Available themes: {}",
                    Theme::all()
                        .iter()
                        .map(|t| t.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                Theme::default_theme()
            }
        },
        None => Theme::by_name(&config.theme).unwrap_or_else(Theme::default_theme),
    };

    let mut app = App::new(catalog, theme.clone());

    // An unknown key opens an empty list view rather than failing.
    if let Some(key) = &args.category {
        app.navigator.select_category(key);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Print the catalog to stdout (`--catalog`).
fn print_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(catalog.categories())
            .context("Failed to serialize catalog")?;
        println!("{rendered}");
        return Ok(());
    }

    for category in catalog.categories() {
        println!("{} ({})", category.info.title, category.info.key);
        for script in &category.scripts {
            println!(
                "  {} [{}] - {}",
                script.name,
                script.difficulty.as_str(),
                script.description
            );
        }
        println!();
    }
    println!(
        "Total: {} categories, {} scripts",
        catalog.categories().len(),
        catalog.script_count()
    );

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        // Deliver queued copy notifications and expire the toast
        app.tick();

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Poll faster while a toast is visible so it dismisses on time
        let poll_timeout = if app.toast.is_some() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        let event = event_reader.read_event(poll_timeout)?;

        // If no event, continue the loop (re-render for toast expiry)
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            // Handle help overlay close first
            if app.show_help {
                match key.code {
                    KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                        app.toggle_help();
                    }
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    app.should_quit = true;
                }
                KeyCode::Char('?') => {
                    app.toggle_help();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if app.navigator.page() == Page::Detail {
                        app.scroll_detail_down();
                    } else {
                        app.next();
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if app.navigator.page() == Page::Detail {
                        app.scroll_detail_up();
                    } else {
                        app.previous();
                    }
                }
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                    app.open_selected();
                }
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                    app.go_back();
                }
                KeyCode::Char('y') | KeyCode::Char('c') => {
                    app.copy_selected();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
