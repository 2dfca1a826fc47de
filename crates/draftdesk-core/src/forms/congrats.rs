//! Congratulatory speech form.

use anyhow::Result;

use super::{first_missing, missing_notice, unknown_field, Choice, FormKind, FormSpec};
use crate::staging::StagingList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CongratsForm {
    pub org_name: String,
    pub org_leader: String,
    pub event_name: String,
    pub event_purpose: String,
    pub audience: Choice,
    pub style: Choice,
    pub length: Choice,
}

impl CongratsForm {
    fn set_choice_value(choice: &mut Choice, value: &str) {
        let custom = match choice {
            Choice::Other(c) => Some(c.clone()),
            Choice::Preset(_) => None,
        };
        *choice = Choice::from_select(value, custom.as_deref());
    }

    fn set_choice_custom(choice: &mut Choice, custom: String) {
        if let Choice::Other(c) = choice {
            *c = custom;
        }
    }
}

impl FormSpec for CongratsForm {
    fn kind(&self) -> FormKind {
        FormKind::Congrats
    }

    fn validate(&self, _staging: &StagingList) -> std::result::Result<(), String> {
        let required = [
            ("org-name", self.org_name.as_str()),
            ("org-leader", self.org_leader.as_str()),
            ("event-name", self.event_name.as_str()),
            ("event-purpose", self.event_purpose.as_str()),
            ("audience", self.audience.value()),
            ("style", self.style.value()),
            ("length", self.length.value()),
        ];
        match first_missing(&required) {
            Some(name) => Err(missing_notice(name)),
            None => Ok(()),
        }
    }

    fn fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("org-name".to_string(), self.org_name.trim().to_string()),
            ("org-leader".to_string(), self.org_leader.trim().to_string()),
            ("event-name".to_string(), self.event_name.trim().to_string()),
            ("event-purpose".to_string(), self.event_purpose.trim().to_string()),
        ];
        fields.extend(self.audience.encode("audience"));
        fields.extend(self.style.encode("style"));
        fields.extend(self.length.encode("length"));
        fields
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        match name {
            "org-name" => self.org_name = value,
            "org-leader" => self.org_leader = value,
            "event-name" => self.event_name = value,
            "event-purpose" => self.event_purpose = value,
            "audience" => Self::set_choice_value(&mut self.audience, &value),
            "style" => Self::set_choice_value(&mut self.style, &value),
            "length" => Self::set_choice_value(&mut self.length, &value),
            "audience-etc" => Self::set_choice_custom(&mut self.audience, value),
            "style-etc" => Self::set_choice_custom(&mut self.style, value),
            "length-etc" => Self::set_choice_custom(&mut self.length, value),
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }

    // The page keeps the filled-in form so a speech can be regenerated.
    fn clear_after_submit(&mut self) {}

    fn reset(&mut self) {
        *self = Self::default();
    }
}
