//! Desktop notification dispatch through the platform's notifier binary

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::state::Mode;

/// Title and body of the completion notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Notification sent when a session of `mode` finishes
    pub fn completed(mode: Mode) -> Self {
        let message = match mode {
            Mode::Work => "Your Pomodoro session is complete!",
            Mode::Rest => "Your break is complete!",
        };

        Self {
            title: format!("{} {}", mode.emoji(), mode.title()),
            message: message.to_string(),
        }
    }

    /// Program and arguments used to show this notification on the current OS
    pub fn command(&self) -> (&'static str, Vec<String>) {
        if cfg!(target_os = "macos") {
            (
                "terminal-notifier",
                vec![
                    "-title".to_string(),
                    self.title.clone(),
                    "-message".to_string(),
                    self.message.clone(),
                    "-sound".to_string(),
                    "default".to_string(),
                ],
            )
        } else {
            ("notify-send", vec![self.title.clone(), self.message.clone()])
        }
    }
}

/// Show a desktop notification by running the platform notifier
pub async fn send_notification(notification: &Notification) -> Result<(), String> {
    let (program, args) = notification.command();
    run_notifier(program, &args).await?;

    info!("Notification sent: {}", notification.title);
    Ok(())
}

/// Run `program` with `args` and report failure as a message
pub async fn run_notifier(program: &str, args: &[String]) -> Result<(), String> {
    debug!("Running {} {:?}", program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| {
            if program == "terminal-notifier" {
                format!(
                    "Failed to execute {}: {}. Install it with: brew install terminal-notifier",
                    program, e
                )
            } else {
                format!("Failed to execute {}: {}", program, e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed: {}", program, stderr.trim()));
    }

    Ok(())
}

/// Best-effort completion notification; failures are only logged
pub async fn notify_completion(mode: Mode) {
    let notification = Notification::completed(mode);
    log_failure(send_notification(&notification).await);
}

fn log_failure(result: Result<(), String>) {
    if let Err(e) = result {
        warn!("Could not send notification: {}", e);
    }
}
