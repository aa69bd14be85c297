//! Countdown loop driving a single timer to completion

use std::{future::Future, io, io::Write, time::Duration};

use chrono::Local;
use tokio::{
    sync::mpsc,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    render::Display,
    state::{TickOutcome, Timer},
};

use super::input::Control;

pub const TICK: Duration = Duration::from_secs(1);

/// How a countdown ended. The timer is handed back either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// The timer reached zero
    Completed(Timer),
    /// Quit was requested or a shutdown signal arrived first
    Cancelled(Timer),
}

impl CountdownOutcome {
    pub fn timer(&self) -> &Timer {
        match self {
            CountdownOutcome::Completed(timer) | CountdownOutcome::Cancelled(timer) => timer,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CountdownOutcome::Completed(_))
    }
}

/// Run `timer` down to zero, one tick per second, redrawing `display` as it goes.
///
/// The loop stops early on `Control::Quit` or when `shutdown` resolves. A
/// closed control channel only disables keyboard handling.
pub async fn countdown_task<W, S>(
    mut timer: Timer,
    display: &mut Display<W>,
    mut controls: mpsc::Receiver<Control>,
    shutdown: S,
) -> io::Result<CountdownOutcome>
where
    W: Write,
    S: Future<Output = ()>,
{
    let ends_at = chrono::Duration::try_seconds(timer.remaining_seconds())
        .and_then(|remaining| Local::now().checked_add_signed(remaining));
    match ends_at {
        Some(ends_at) => info!(
            "Starting {} countdown for {}s, ends at {}",
            timer.mode(),
            timer.total_seconds(),
            ends_at.format("%H:%M:%S")
        ),
        None => info!("Starting {} countdown for {}s", timer.mode(), timer.total_seconds()),
    }

    if timer.is_completed() {
        info!("Timer has nothing to count down");
        display.finish(&timer)?;
        return Ok(CountdownOutcome::Completed(timer));
    }

    display.draw(&timer)?;

    tokio::pin!(shutdown);

    // First firing one full second after start, not immediately
    let mut interval = interval_at(Instant::now() + TICK, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut controls_open = true;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!("Shutdown requested, stopping countdown");
                display.cancel(&timer)?;
                return Ok(CountdownOutcome::Cancelled(timer));
            }

            control = controls.recv(), if controls_open => {
                if control.is_some() {
                    display.input_received()?;
                }
                match control {
                    Some(Control::Quit) => {
                        info!("Quit requested with {}s remaining", timer.remaining_seconds());
                        display.cancel(&timer)?;
                        return Ok(CountdownOutcome::Cancelled(timer));
                    }
                    Some(Control::TogglePause) => {
                        let paused = timer.toggle_pause();
                        info!("Countdown {}", if paused { "paused" } else { "resumed" });
                        display.draw(&timer)?;
                    }
                    None => {
                        debug!("Control channel closed, keyboard controls disabled");
                        controls_open = false;
                    }
                }
            }

            _ = interval.tick() => {
                match timer.tick() {
                    TickOutcome::Completed => {
                        info!("{} countdown completed", timer.mode());
                        display.finish(&timer)?;
                        return Ok(CountdownOutcome::Completed(timer));
                    }
                    TickOutcome::Ticked => {
                        debug!("Tick: {}s remaining", timer.remaining_seconds());
                        display.draw(&timer)?;
                    }
                    TickOutcome::Paused => {}
                }
            }
        }
    }
}
