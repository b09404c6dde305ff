//! Chat screen orchestration methods

use chrono::Local;
use foodmatch::logic::composer::SendOutcome;

use crate::App;

impl App {
    /// Send the composer buffer to the open thread, stamped with local time
    pub(crate) fn send_chat_message(&mut self) {
        match self.model.send_message(&Local::now()) {
            SendOutcome::Sent { thread, message } => {
                log::info!("Message {:?} sent to thread {:?}", message.0, thread.0);
            }
            SendOutcome::EmptyText => log::debug!("Empty message not sent"),
            SendOutcome::NoThreadSelected => log::debug!("No thread selected, message not sent"),
        }
    }
}
