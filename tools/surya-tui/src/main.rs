//! Surya: terminal console for SuryaOptiAI solar monitoring.
//!
//! ## Usage
//!
//! ```bash
//! # Start at the system selector
//! surya
//!
//! # Preselect a private installation on the devices tab
//! surya --system private --tab devices
//!
//! # Print the resolved navigation state as JSON and exit
//! surya --system shared-grid --tab devices --dump-state
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use surya_core::{Navigator, SystemType, TabId};
use surya_telemetry::{init_logging, TelemetryConfig};
use surya_tui::{ui, App};

/// SuryaOptiAI terminal console
#[derive(Parser, Debug)]
#[command(name = "surya")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preselect a system type (shared-grid, private)
    #[arg(long)]
    system: Option<SystemType>,

    /// Initial tab; unknown ids fall back to the dashboard
    #[arg(long)]
    tab: Option<String>,

    /// UI poll interval in milliseconds
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Log file (overrides SURYA_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level filter (overrides SURYA_LOG_LEVEL / RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the resolved navigation state as JSON and exit
    #[arg(long)]
    dump_state: bool,
}

impl Args {
    fn navigator(&self) -> Navigator {
        let tab = match self.tab.as_deref() {
            Some(raw) => raw.parse::<TabId>().unwrap_or_else(|err| {
                warn!(error = %err, "unknown tab, starting on dashboard");
                TabId::default()
            }),
            None => TabId::default(),
        };
        Navigator::with_state(self.system, tab)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_state {
        let app = App::with_navigator(args.navigator());
        println!("{}", serde_json::to_string_pretty(&app.snapshot())?);
        return Ok(());
    }

    let config = TelemetryConfig::from_env().with_overrides(args.log_level.clone(), args.log_file.clone());
    let _telemetry = init_logging(&config).context("failed to initialize logging")?;

    let mut app = App::with_navigator(args.navigator());
    info!(
        system = ?app.navigator.system_type(),
        tab = %app.navigator.active_tab(),
        "console starting"
    );

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, Duration::from_millis(args.tick_ms.max(10)));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "console exited with error");
    }
    info!("console stopped");

    result
}

/// Main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
