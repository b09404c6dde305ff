//! Chat composer
//!
//! Appends a locally authored message to the selected thread.

use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use std::fmt;

use crate::model::types::{ChatThread, Message, MessageId, Sender, ThreadId};

/// What sending does to the thread's unread counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreadOnSend {
    /// Leave the counter alone (unread only tracks incoming messages)
    #[default]
    Keep,
    /// Replying marks the thread as read
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { thread: ThreadId, message: MessageId },
    EmptyText,
    NoThreadSelected,
}

/// Hands out message ids from the wall clock
///
/// Ids are the send time in milliseconds, bumped when two sends land in the
/// same millisecond (or the clock steps back) so they stay strictly increasing.
#[derive(Clone, Debug, Default)]
pub struct MessageIdGenerator {
    last: u64,
}

impl MessageIdGenerator {
    pub fn next(&mut self, now_millis: u64) -> MessageId {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        MessageId(id)
    }
}

/// Render a send time the way the thread shows it
pub fn format_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    now.format("%H:%M").to_string()
}

/// Append `text` to the selected thread
///
/// The text is stored as typed. Nothing changes when the trimmed text is
/// empty or when `selected` does not name a thread.
pub fn send_message<Tz: TimeZone>(
    threads: &mut [ChatThread],
    selected: Option<ThreadId>,
    text: &str,
    now: &DateTime<Tz>,
    ids: &mut MessageIdGenerator,
    unread_on_send: UnreadOnSend,
) -> SendOutcome
where
    Tz::Offset: fmt::Display,
{
    if text.trim().is_empty() {
        return SendOutcome::EmptyText;
    }

    let Some(thread) = selected.and_then(|id| threads.iter_mut().find(|t| t.id == id)) else {
        return SendOutcome::NoThreadSelected;
    };

    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let message = Message {
        id: ids.next(millis),
        text: text.to_string(),
        sender: Sender::Me,
        timestamp: format_timestamp(now),
        image: None,
    };
    let id = message.id;

    thread.last_message = message.text.clone();
    thread.messages.push(message);
    if unread_on_send == UnreadOnSend::Reset {
        thread.unread = 0;
    }

    SendOutcome::Sent {
        thread: thread.id,
        message: id,
    }
}
