//! Chat Screen Model
//!
//! Thread list, the open thread and the composer buffer.

use chrono::{DateTime, TimeZone};
use std::fmt;

use crate::catalog;
use crate::logic::composer::{self, MessageIdGenerator, SendOutcome, UnreadOnSend};
use crate::logic::navigation;

use super::types::{ChatThread, TextInput, ThreadId};

/// Which pane receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatFocus {
    List,
    Composer,
}

#[derive(Clone, Debug)]
pub struct ChatModel {
    pub threads: Vec<ChatThread>,
    /// Thread open in the message pane
    pub selected: Option<ThreadId>,
    /// Highlighted row in the thread list
    pub cursor: usize,
    pub input: TextInput,
    pub focus: ChatFocus,
    ids: MessageIdGenerator,
}

impl Default for ChatModel {
    fn default() -> Self {
        Self::with_threads(catalog::chat_threads())
    }
}

impl ChatModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(threads: Vec<ChatThread>) -> Self {
        Self {
            threads,
            selected: None,
            cursor: 0,
            input: TextInput::default(),
            focus: ChatFocus::List,
            ids: MessageIdGenerator::default(),
        }
    }

    pub fn current_thread(&self) -> Option<&ChatThread> {
        self.selected
            .and_then(|id| self.threads.iter().find(|t| t.id == id))
    }

    pub fn cursor_down(&mut self) {
        self.cursor = navigation::next_index(self.cursor, self.threads.len());
    }

    pub fn cursor_up(&mut self) {
        self.cursor = navigation::prev_index(self.cursor, self.threads.len());
    }

    /// Open the highlighted thread and move focus to the composer
    pub fn open_highlighted(&mut self) -> Option<ThreadId> {
        let id = self.threads.get(self.cursor)?.id;
        self.select(id);
        Some(id)
    }

    pub fn select(&mut self, id: ThreadId) {
        if self.selected != Some(id) {
            self.input.clear();
        }
        self.selected = Some(id);
        self.focus = ChatFocus::Composer;
    }

    pub fn focus_list(&mut self) {
        self.focus = ChatFocus::List;
    }

    /// Send the composer buffer to the open thread
    ///
    /// The buffer is cleared only when a message was actually sent.
    pub fn send<Tz: TimeZone>(&mut self, now: &DateTime<Tz>, unread_on_send: UnreadOnSend) -> SendOutcome
    where
        Tz::Offset: fmt::Display,
    {
        let outcome = composer::send_message(
            &mut self.threads,
            self.selected,
            self.input.as_str(),
            now,
            &mut self.ids,
            unread_on_send,
        );
        if let SendOutcome::Sent { thread, message } = outcome {
            log::debug!("Sent message {:?} to thread {:?}", message, thread);
            self.input.clear();
        }
        outcome
    }

    /// Screen left: close the thread and drop the draft, keep the threads
    pub fn leave(&mut self) {
        self.selected = None;
        self.focus = ChatFocus::List;
        self.input.clear();
    }
}
