//! The generation forms: what each one sends and how its reply is read.

mod chat;
mod choice;
mod congrats;
mod greeting;
mod press;

pub use chat::{ChatInput, EMPTY_CHAT_NOTICE};
pub use choice::{Choice, OTHER_VALUE};
pub use congrats::CongratsForm;
pub use greeting::GreetingForm;
pub use press::PressForm;

use anyhow::Result;
use std::fmt;

use crate::staging::StagingList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Chat,
    Congrats,
    Greeting,
    Press,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Chat,
        FormKind::Congrats,
        FormKind::Greeting,
        FormKind::Press,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormKind::Chat => "chat",
            FormKind::Congrats => "congrats",
            FormKind::Greeting => "greeting",
            FormKind::Press => "press",
        }
    }

    /// JSON keys holding the generated text, in lookup order.
    pub fn reply_keys(self) -> &'static [&'static str] {
        match self {
            FormKind::Chat => &["reply"],
            FormKind::Congrats | FormKind::Greeting => &["result"],
            FormKind::Press => &["reply", "result"],
        }
    }

    pub fn accepts_files(self) -> bool {
        matches!(self, FormKind::Chat | FormKind::Press)
    }

    pub fn pending_notice(self) -> &'static str {
        match self {
            FormKind::Chat => "Waiting for reply...",
            FormKind::Congrats => "Generating congratulatory speech...",
            FormKind::Greeting => "Generating greeting...",
            FormKind::Press => "Generating press release...",
        }
    }

    pub fn empty_notice(self) -> &'static str {
        match self {
            FormKind::Chat => "No reply was returned.",
            FormKind::Congrats => "No speech was generated.",
            FormKind::Greeting => "No greeting was generated.",
            FormKind::Press => "(no generated result)",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field set of one form. Implementors own the user's text input; attachments
/// live in the controller's staging list.
pub trait FormSpec {
    fn kind(&self) -> FormKind;

    /// Presence checks before anything is sent. `Err` carries the notice shown
    /// to the user.
    fn validate(&self, staging: &StagingList) -> std::result::Result<(), String>;

    /// Text parts of the multipart body, in send order.
    fn fields(&self) -> Vec<(String, String)>;

    /// Sets one field by its wire name (e.g. `org-name`).
    fn set_field(&mut self, name: &str, value: String) -> Result<()>;

    /// Resets whatever input the page clears once a submission completes.
    fn clear_after_submit(&mut self);

    /// Resets all input (explicit reset action).
    fn reset(&mut self);

    /// Text echoed into the transcript as the user's own message.
    fn echo(&self) -> Option<String> {
        None
    }
}

/// Returns the first wire name whose value is blank after trimming.
pub(crate) fn first_missing<'a>(required: &[(&'a str, &str)]) -> Option<&'a str> {
    required
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}

pub(crate) fn missing_notice(name: &str) -> String {
    format!("Required field '{}' is empty.", name)
}

pub(crate) fn unknown_field(kind: FormKind, name: &str) -> anyhow::Error {
    anyhow::anyhow!("{} form has no field named {:?}", kind, name)
}
