#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use evreg::config::Config;
use evreg::logging;
use evreg::tui::App;

#[derive(Parser)]
#[command(name = "evreg")]
#[command(about = "Multi-step event registration in the terminal")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Make every submission fail with a server error
    #[arg(long)]
    simulate_failure: bool,

    /// Simulated backend latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.simulate_failure {
        config.backend.simulate_failure = true;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.backend.delay_ms = delay_ms;
    }

    let logging_handle = logging::init_logging(&config, cli.debug)?;
    if let Some(path) = &logging_handle.log_file_path {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config.backend(), runtime.handle().clone())
        .with_tick_rate(config.tick_rate())
        .with_toast_duration(config.toast_duration());
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    runtime.shutdown_background();
    tracing::info!("exiting");
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
