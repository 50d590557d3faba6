//! # Split Bill CLI Entry Point
//!
//! Starts the terminal UI for tracking shared expenses with friends.
//!
//! ## Usage
//!
//! ```bash
//! # Start with the sample friends
//! splitbill
//!
//! # Start with an empty friend list
//! splitbill --empty
//!
//! # Print what the assistant sees (context + action schemas) and exit
//! splitbill --dump-context
//! ```
//!
//! ## Key Bindings
//!
//! ### Friend list
//! - `j` / `Down`, `k` / `Up` - Move the cursor
//! - `Enter` / `Space` - Select the friend to split a bill with (again to close)
//! - `a` - Open / close the add-friend form
//! - `:` - Assistant prompt (`splitBill friendId=933372 amount=15`)
//! - `Tab` - Switch between open panes
//! - `t` - Next theme (saved to the config file)
//! - `i` - Show/hide help
//! - `q` / `Q` - Quit
//!
//! ### Forms
//! - `Up` / `Down` - Move between fields
//! - `Left` / `Right` / `Space` - Switch who is paying
//! - `Enter` - Submit
//! - `Esc` - Return focus to the friend list

use splitbill::assistant::{register_default_actions, LocalBridge};
use splitbill::ledger::{Directory, RandomIds};
use splitbill::logging;
use splitbill::ui::{self, config::Config, theme::Theme, App, KeyOutcome};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

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

/// Split Bill - track shared expenses with your friends
#[derive(Parser, Debug)]
#[command(name = "splitbill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track who owes whom, with an assistant that can add friends and split bills", long_about = None)]
struct Args {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme to start with, overriding the config file
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Credential for the assistant service
    #[arg(long, value_name = "KEY", env = "SPLITBILL_ASSISTANT_KEY", hide_env_values = true)]
    assistant_key: Option<String>,

    /// Start with an empty friend list instead of the sample friends
    #[arg(long)]
    empty: bool,

    /// Write logs to this file instead of the platform data directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,

    /// Print the assistant context and action schemas as JSON and exit
    #[arg(long)]
    dump_context: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn init_logging(args: &Args) {
    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => match logging::default_log_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Warning: Could not determine log location: {}", e);
                return;
            }
        },
    };

    if let Err(e) = logging::init(&path, args.debug) {
        eprintln!("Warning: Logging disabled: {:#}", e);
    }
}

/// Load the config file named on the command line, or the default one.
fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>)> {
    match &args.config {
        Some(path) => Ok((Config::load_from(path)?, Some(path.clone()))),
        None => Ok((Config::load(), Config::default_path().ok())),
    }
}

fn build_app(args: &Args, config: &Config) -> App {
    let theme = args
        .theme
        .as_deref()
        .or(Some(config.theme.as_str()))
        .and_then(Theme::by_name)
        .unwrap_or_else(Theme::default_theme)
        .clone();

    let directory = if args.empty {
        Directory::new()
    } else {
        Directory::sample()
    };

    let mut bridge = LocalBridge::new();
    register_default_actions(&mut bridge);

    App::new(
        directory,
        Box::new(RandomIds),
        bridge,
        config.avatar_base_url.clone(),
        theme,
    )
}

async fn run_application(args: Args) -> Result<()> {
    init_logging(&args);

    let (mut config, config_path) = load_config(&args)?;

    // The credential is only handed over once; nothing else reads it
    let has_assistant_key = args
        .assistant_key
        .as_deref()
        .or(config.assistant_key.as_deref())
        .is_some_and(|k| !k.is_empty());
    info!(has_assistant_key, "Starting splitbill");

    let mut app = build_app(&args, &config);

    if args.dump_context {
        let dump = serde_json::json!({
            "readable": app.assistant().context(),
            "actions": app.assistant().manifest(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).context("Failed to serialize assistant context")?
        );
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, |theme| {
        config.theme = theme.to_string();
        let saved = match &config_path {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        if let Err(e) = saved {
            warn!(error = %e, "Failed to save theme");
        }
    })
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    info!("Exiting");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Feed events from `event_reader` into `app` until it asks to quit.
///
/// `on_theme_change` is called with the new theme name whenever the user
/// switches themes.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    mut on_theme_change: impl FnMut(&str),
) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        // The assistant reads the friend list as of the latest frame
        app.publish_context();

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let Some(event) = event_reader.read_event(Duration::from_millis(250))? else {
            continue;
        };

        if let Event::Key(key) = event {
            if let KeyOutcome::ThemeChanged(name) = app.handle_key(key) {
                info!(theme = name, "Theme changed");
                on_theme_change(name);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
