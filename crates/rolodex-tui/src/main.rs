mod actions;
mod app;
mod error;
mod photo;
mod ui;
mod util;

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use rolodex_config::AppConfig;
use rolodex_core::Directory;
use tracing::{debug, info};

use crate::actions::{execute_action, Action};
use crate::app::App;
use crate::error::{exit_code_for, report_error};
use crate::photo::PhotoLoader;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "In-memory contact rolodex")]
struct Args {
    /// Config file (defaults to $XDG_CONFIG_HOME/rolodex/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start with an empty directory instead of the demo contacts.
    #[arg(long)]
    no_seed: bool,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let verbose = args.verbose;
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let Args {
        config: config_path,
        no_seed,
        log_file,
        verbose,
    } = args;

    let config = rolodex_config::load(config_path).with_context(|| "load config")?;
    let log_file = log_file.or_else(|| config.logging.file.clone());
    if let Some(path) = &log_file {
        init_logging(path, &config, verbose)?;
    }

    let directory = build_directory(&config, no_seed);
    info!(contacts = directory.len(), "directory ready");

    let mut app = App::new(directory);
    let photos = PhotoLoader::new();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    let mut terminal = TerminalGuard::new()?;
    run_app(&mut terminal, &mut app, &photos, tick_rate)
}

fn build_directory(config: &AppConfig, no_seed: bool) -> Directory {
    if config.seed_demo_contacts && !no_seed {
        Directory::seeded(&config.placeholder_picture)
    } else {
        Directory::new(&config.placeholder_picture)
    }
}

fn init_logging(path: &Path, config: &AppConfig, verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};
    let file = open_log_file(path)?;
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    debug!(path = %path.display(), "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn run_app(
    terminal: &mut TerminalGuard,
    app: &mut App,
    photos: &PhotoLoader,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        while let Some(read) = photos.poll() {
            app.enqueue(Action::PhotoLoaded(read));
        }
        while let Some(action) = app.next_action() {
            if let Err(err) = execute_action(app, photos, action) {
                app.set_error(err.to_string());
            }
        }
        app.sync_mode();

        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
