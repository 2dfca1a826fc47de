//! Chat form: an optional message plus attachments.

use anyhow::Result;

use super::{unknown_field, FormKind, FormSpec};
use crate::staging::StagingList;

pub const EMPTY_CHAT_NOTICE: &str = "Enter a message or attach at least one file.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatInput {
    pub message: String,
}

impl ChatInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn trimmed(&self) -> &str {
        self.message.trim()
    }
}

impl FormSpec for ChatInput {
    fn kind(&self) -> FormKind {
        FormKind::Chat
    }

    fn validate(&self, staging: &StagingList) -> std::result::Result<(), String> {
        if self.trimmed().is_empty() && staging.is_empty() {
            return Err(EMPTY_CHAT_NOTICE.to_string());
        }
        Ok(())
    }

    fn fields(&self) -> Vec<(String, String)> {
        let message = self.trimmed();
        if message.is_empty() {
            Vec::new()
        } else {
            vec![("message".to_string(), message.to_string())]
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match name {
            "message" => self.message = value,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }

    fn clear_after_submit(&mut self) {
        self.message.clear();
    }

    fn reset(&mut self) {
        self.message.clear();
    }

    fn echo(&self) -> Option<String> {
        let message = self.trimmed();
        (!message.is_empty()).then(|| message.to_string())
    }
}
