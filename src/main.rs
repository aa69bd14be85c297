//! Pomo - A command-line Pomodoro countdown timer
//!
//! This is the main entry point for the pomo binary.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use pomo::{
    config::Config,
    render::Display,
    services::notify_completion,
    tasks::{countdown_task, spawn_input_reader, CountdownOutcome},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they do not tear the countdown line on stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomo={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    debug!("Configuration: {:?}", config);

    let timer = config.timer()?;
    info!(
        "Timer configured: mode={}, total={}s, width={}",
        timer.mode(),
        timer.total_seconds(),
        config.bar_width()
    );

    let shutdown = shutdown_signal().context("Failed to register signal handlers")?;

    let (control_tx, control_rx) = mpsc::channel(8);
    if let Err(e) = spawn_input_reader(control_tx) {
        warn!("Keyboard controls unavailable: {}", e);
    }

    let input_echo = io::stdin().is_terminal();
    let mut display = Display::new(io::stdout(), config.bar_width()).with_input_echo(input_echo);
    display
        .start(&timer)
        .context("Failed to write to terminal")?;

    let outcome = countdown_task(timer, &mut display, control_rx, shutdown)
        .await
        .context("Failed to write to terminal")?;

    match outcome {
        CountdownOutcome::Completed(timer) => notify_completion(timer.mode()).await,
        CountdownOutcome::Cancelled(timer) => {
            info!("Countdown cancelled with {}s remaining", timer.remaining_seconds())
        }
    }

    Ok(())
}
