//! Running log of what was sent and what came back, as a chat box shows it.

use std::fmt;

use crate::outcome::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    User(String),
    Attachment(String),
    Reply(String),
    Notice(String),
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptEntry::User(text) => write!(f, "> {}", text),
            TranscriptEntry::Attachment(name) => write!(f, "> 📎 Attachment sent: {}", name),
            TranscriptEntry::Reply(text) => write!(f, "{}", text),
            TranscriptEntry::Notice(text) => write!(f, "! {}", text),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Appends the entry for a finished attempt. Rejections never reach the
    /// transcript; they are shown as a notice only.
    pub fn record_outcome(&mut self, outcome: &Outcome) -> Option<&TranscriptEntry> {
        let entry = match outcome {
            Outcome::Rejected(_) => return None,
            Outcome::Reply(text) => TranscriptEntry::Reply(text.clone()),
            Outcome::Empty(msg) | Outcome::ServerError(msg) | Outcome::TransportError(msg) => {
                TranscriptEntry::Notice(msg.clone())
            }
        };
        Some(self.push(entry))
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
