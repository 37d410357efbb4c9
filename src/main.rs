use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use technova::app::AppState;
use technova::async_tasks::AsyncTaskRunner;
use technova::cli::{Cli, ThemeChoice};
use technova::constants::{FRAME_DURATION_MS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use technova::error::{AppError, Result};
use technova::persistence::PersistenceManager;
use technova::scheduler::TimerFired;
use technova::types::Theme;
use technova::ui;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// How long to wait for the terminal to answer a background color query
const THEME_PROBE_TIMEOUT_MS: u64 = 100;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate().map_err(AppError::Other)?;

    // Initialize logging if requested; the guard flushes on drop
    let _log_guard = match &cli.log_file {
        Some(log_file) => {
            let guard = init_logging(log_file)?;
            tracing::info!("=== TechNova landing page starting ===");
            tracing::info!("Log file: {}", log_file);
            tracing::info!(
                "Carousel timing: autoplay={}ms resume={}ms",
                cli.autoplay_ms,
                cli.resume_ms
            );
            Some(guard)
        }
        None => None,
    };

    // Check terminal size
    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        tracing::error!(
            "Terminal too small: {}x{} (minimum: {}x{})",
            width,
            height,
            MIN_TERMINAL_WIDTH,
            MIN_TERMINAL_HEIGHT
        );
        return Err(AppError::TerminalTooSmall);
    }
    tracing::debug!("Terminal size: {}x{}", width, height);

    // Resolve theme before the terminal is in raw mode; the probe talks to it
    let persistence = match PersistenceManager::new() {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!("Preferences unavailable, dark mode will not be saved: {}", e);
            None
        }
    };
    let theme = resolve_theme(cli.theme, persistence.as_ref());
    tracing::debug!("Initial theme: {:?}", theme);

    // Setup terminal
    setup_terminal()?;
    tracing::debug!("Terminal setup completed");

    // Setup Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        tracing::info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    // Run the application
    let result = run_app(cli, theme, persistence, running).await;

    // Cleanup terminal
    cleanup_terminal()?;
    tracing::debug!("Terminal cleanup completed");

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn init_logging(log_file: &str) -> Result<WorkerGuard> {
    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Other(format!("Invalid log file path: {}", log_file)))?;

    // Truncate any previous run's log
    std::fs::File::create(path)
        .map_err(|e| AppError::Other(format!("Failed to open log file: {}", e)))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Only log from our crate unless TECHNOVA_LOG says otherwise
    let filter = EnvFilter::try_from_env("TECHNOVA_LOG")
        .unwrap_or_else(|_| EnvFilter::new("technova=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(guard)
}

fn resolve_theme(choice: ThemeChoice, persistence: Option<&PersistenceManager>) -> Theme {
    let saved = match persistence.map(|p| p.load_dark_mode()) {
        Some(Ok(saved)) => saved,
        Some(Err(e)) => {
            tracing::warn!("Failed to load dark mode preference: {}", e);
            None
        }
        None => None,
    };

    Theme::resolve(choice, saved, probe_terminal_theme)
}

fn probe_terminal_theme() -> Option<Theme> {
    match termbg::theme(Duration::from_millis(THEME_PROBE_TIMEOUT_MS)) {
        Ok(termbg::Theme::Dark) => Some(Theme::Dark),
        Ok(termbg::Theme::Light) => Some(Theme::Light),
        Err(e) => {
            tracing::debug!("Terminal background detection failed: {:?}", e);
            None
        }
    }
}

async fn run_app(
    cli: Cli,
    theme: Theme,
    persistence: Option<PersistenceManager>,
    running: Arc<AtomicBool>,
) -> Result<()> {
    // Create backend and terminal
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Create timer channel
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let task_runner = AsyncTaskRunner::new(timer_tx);

    // Initialize app state
    let mut app = AppState::new(task_runner, cli.carousel_config()?, theme, persistence);
    let (width, height) = crossterm::terminal::size()?;
    app.update_viewport_size(width, height);
    app.begin(cli.skip_intro)?;

    // Run main event loop
    run_event_loop(&mut terminal, &mut app, &mut timer_rx, running).await?;

    tracing::info!("TechNova landing page shutting down");
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    timer_rx: &mut mpsc::UnboundedReceiver<TimerFired>,
    running: Arc<AtomicBool>,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);

    while running.load(Ordering::SeqCst) && !app.should_quit {
        let frame_start = Instant::now();

        // Process all pending timer notices (non-blocking)
        while let Ok(fired) = timer_rx.try_recv() {
            if let Err(e) = app.handle_timer(fired) {
                tracing::error!("Timer {:?} handler failed: {}", fired.kind, e);
            }
        }

        // Render UI
        terminal.draw(|f| {
            ui::layout::render(f, app);
        })?;

        // Poll for input events (non-blocking)
        if event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            handle_event(app, ev);
        }

        // Sleep to maintain frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            tokio::time::sleep(frame_duration - elapsed).await;
        }
    }

    Ok(())
}

fn handle_event(app: &mut AppState, ev: Event) {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if let Err(e) = ui::handle_key_event(app, key) {
                tracing::error!("Key handler failed: {}", e);
            }
        }
        Event::Resize(width, height) => {
            app.update_viewport_size(width, height);
        }
        _ => {}
    }
}
