//! Greeting speech form.

use anyhow::Result;

use super::{first_missing, missing_notice, unknown_field, FormKind, FormSpec};
use crate::staging::StagingList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingForm {
    pub speaker: String,
    pub position: String,
    pub event: String,
    pub date: String,
    pub message: String,
}

impl GreetingForm {
    fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("speaker", self.speaker.as_str()),
            ("position", self.position.as_str()),
            ("event", self.event.as_str()),
            ("date", self.date.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

impl FormSpec for GreetingForm {
    fn kind(&self) -> FormKind {
        FormKind::Greeting
    }

    fn validate(&self, _staging: &StagingList) -> std::result::Result<(), String> {
        match first_missing(&self.pairs()) {
            Some(name) => Err(missing_notice(name)),
            None => Ok(()),
        }
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.pairs()
            .iter()
            .map(|(name, value)| (name.to_string(), value.trim().to_string()))
            .collect()
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        let slot = match name {
            "speaker" => &mut self.speaker,
            "position" => &mut self.position,
            "event" => &mut self.event,
            "date" => &mut self.date,
            "message" => &mut self.message,
            _ => return Err(unknown_field(FormKind::Greeting, name)),
        };
        *slot = value;
        Ok(())
    }

    fn clear_after_submit(&mut self) {}

    fn reset(&mut self) {
        *self = Self::default();
    }
}
