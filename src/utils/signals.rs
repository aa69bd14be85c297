//! Signal handling for cancelling the countdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Register for SIGTERM and SIGINT.
///
/// Registration happens eagerly so a failure surfaces before the countdown
/// starts; the returned future resolves on the first signal.
pub fn shutdown_signal() -> std::io::Result<impl std::future::Future<Output = ()>> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])?;

    Ok(async move {
        if let Some(signal) = signals.next().await {
            info!("Received signal: {}", signal);
        }
    })
}
