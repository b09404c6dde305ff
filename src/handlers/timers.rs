//! Timer Handler
//!
//! Feeds elapsed timers back into the match sequencer and schedules the
//! follow-up banner timer when a like settles.

use foodmatch::services::TimerFired;

use crate::App;

pub fn handle_timer_fired(app: &mut App, fired: TimerFired) {
    log::debug!("Timer {:?} ({:?}) fired", fired.token, fired.kind);
    if let Some(next) = app.model.deliver_timer(fired.token) {
        app.schedule_timer(next);
    }
}
