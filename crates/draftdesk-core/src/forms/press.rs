//! Press release form: release metadata plus source documents.

use anyhow::Result;

use super::{first_missing, missing_notice, unknown_field, FormKind, FormSpec};
use crate::staging::StagingList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressForm {
    pub title: String,
    pub author: String,
    pub contact: String,
    pub content: String,
    /// Issuing ministry; optional.
    pub department: String,
}

impl FormSpec for PressForm {
    fn kind(&self) -> FormKind {
        FormKind::Press
    }

    fn validate(&self, _staging: &StagingList) -> std::result::Result<(), String> {
        let required = [
            ("title", self.title.as_str()),
            ("author", self.author.as_str()),
            ("contact", self.contact.as_str()),
            ("content", self.content.as_str()),
        ];
        match first_missing(&required) {
            Some(name) => Err(missing_notice(name)),
            None => Ok(()),
        }
    }

    fn fields(&self) -> Vec<(String, String)> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("contact", &self.contact),
            ("content", &self.content),
            ("department", &self.department),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.trim().to_string()))
        .collect()
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        let slot = match name {
            "title" => &mut self.title,
            "author" => &mut self.author,
            "contact" => &mut self.contact,
            "content" => &mut self.content,
            "department" | "ministry" => &mut self.department,
            _ => return Err(unknown_field(FormKind::Press, name)),
        };
        *slot = value;
        Ok(())
    }

    // Only the ministry selection is cleared once a release comes back.
    fn clear_after_submit(&mut self) {
        self.department.clear();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
