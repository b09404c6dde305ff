//! Feed orchestration methods
//!
//! Swipes hand their timers to the background timer service.

use foodmatch::logic::sequencer::{SwipeDirection, TimerRequest};

use crate::App;

impl App {
    pub(crate) fn swipe(&mut self, direction: SwipeDirection) {
        if let Some(timer) = self.model.swipe(direction) {
            self.schedule_timer(timer);
        }
    }

    pub(crate) fn schedule_timer(&mut self, timer: TimerRequest) {
        if self.timer_tx.send(timer).is_err() {
            // Service gone: the card would stay in flight forever
            log::warn!("Timer service unavailable, dropping {:?}", timer.token);
            self.model.show_toast("Error: timer service stopped".to_string());
        }
    }
}
