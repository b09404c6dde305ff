//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CuisineId(pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u8);

/// A cuisine tag from the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cuisine {
    pub id: CuisineId,
    pub name: &'static str,
}

/// A region tag from the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub name: &'static str,
}

/// A profile shown in the discovery feed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub age: u8,
    pub photos: Vec<String>,
    pub cuisines: Vec<CuisineId>,
    pub description: String,
}

impl Candidate {
    /// "Name, age" heading used on cards and search results
    pub fn heading(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }
}

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Me => "self",
            Sender::Other => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Display timestamp (HH:MM)
    pub timestamp: String,
    pub image: Option<String>,
}

/// Conversation with one counterpart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatThread {
    pub id: ThreadId,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub unread: u32,
    pub messages: Vec<Message>,
}

impl ChatThread {
    /// Timestamp of the newest message, shown in the thread list
    pub fn last_timestamp(&self) -> Option<&str> {
        self.messages.last().map(|m| m.timestamp.as_str())
    }
}

/// Transient reference to a photo attached during this session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRef {
    /// In-session handle (never persisted)
    pub handle: String,
    /// File the photo was attached from
    pub source: PathBuf,
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.handle)
    }
}

/// Single-line text input buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
}

impl TextInput {
    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        assert!(input.is_blank());
        input.push('h');
        input.push('i');
        input.backspace();
        assert_eq!(input.as_str(), "h");
        assert_eq!(input.take(), "h");
        assert!(input.is_blank());
    }

    #[test]
    fn test_whitespace_input_is_blank() {
        let input = TextInput { value: "   \t".to_string() };
        assert!(input.is_blank());
    }

    #[test]
    fn test_sender_tags() {
        assert_eq!(Sender::Me.as_str(), "self");
        assert_eq!(Sender::Other.as_str(), "other");
    }
}
