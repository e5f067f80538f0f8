use anyhow::{Context, Result};
use assimox::app::App;
use assimox::cli::Cli;
use assimox::config::{self, Config};
use assimox::styles::{init_theme, ThemeType};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

/// Subcommands log warnings and errors to stderr so stdout stays scriptable.
fn init_cli_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        init_cli_logging();
        return cli.execute();
    }

    setup_panic_hook();

    let log_dir = config::cache_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("assimox.log");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "assimox.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let mut config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    if cli.no_colors {
        config.theme = ThemeType::NoColor;
    }
    init_theme(config.effective_theme());

    let route = cli.start_route().unwrap_or_else(|| config.start_route());
    info!(version = env!("CARGO_PKG_VERSION"), route = %route, config = ?config_path, "Starting assimox");

    let mut app = App::new(config, config_path, route)?;
    let result = app.run();

    // Flush buffered log lines before exiting
    drop(guard);

    result
}
