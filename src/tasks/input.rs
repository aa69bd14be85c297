//! Keyboard controls read from stdin

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A command typed by the user while the countdown runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TogglePause,
    Quit,
}

/// Map one line of input to a control. Unknown input is ignored.
pub fn parse_control(line: &str) -> Option<Control> {
    match line.trim().to_lowercase().as_str() {
        "" | "p" | "pause" => Some(Control::TogglePause),
        "q" | "quit" | "exit" => Some(Control::Quit),
        _ => None,
    }
}

/// Read stdin on a dedicated OS thread and forward controls to the countdown.
///
/// The thread ends on EOF, on a read error, or once the receiver is dropped.
pub fn spawn_input_reader(tx: mpsc::Sender<Control>) -> io::Result<()> {
    thread::Builder::new()
        .name("pomo-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Failed to read from stdin: {}", e);
                        break;
                    }
                };

                match parse_control(&line) {
                    Some(control) => {
                        debug!("Received control: {:?}", control);
                        if tx.blocking_send(control).is_err() {
                            // Countdown finished, nobody is listening
                            break;
                        }
                    }
                    None => debug!("Ignoring input: {:?}", line),
                }
            }
            debug!("Input reader stopped");
        })?;

    Ok(())
}
