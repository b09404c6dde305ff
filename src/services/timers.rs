//! Timer service
//!
//! Runs the sequencer's delays off the UI thread. The UI loop sends
//! [`TimerRequest`]s in and drains [`TimerFired`] notifications each frame.
//! The service never cancels anything; stale deliveries are filtered by token
//! on the receiving side.

use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::logic::sequencer::{TimerKind, TimerRequest, TimerToken};

/// A delay that elapsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFired {
    pub token: TimerToken,
    pub kind: TimerKind,
}

/// Spawn the timer service worker
///
/// Must be called from inside a tokio runtime.
pub fn spawn_timer_service() -> (
    mpsc::UnboundedSender<TimerRequest>,
    mpsc::UnboundedReceiver<TimerFired>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<TimerRequest>();
    let (fired_tx, fired_rx) = mpsc::unbounded_channel::<TimerFired>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let fired_tx = fired_tx.clone();
            tokio::spawn(async move {
                sleep(request.delay).await;
                // Receiver gone means the UI is shutting down
                let _ = fired_tx.send(TimerFired {
                    token: request.token,
                    kind: request.kind,
                });
            });
        }
        log::debug!("Timer service stopped");
    });

    (request_tx, fired_rx)
}
