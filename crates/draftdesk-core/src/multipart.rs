//! Multipart request body: text fields plus one `files` part per attachment.

use crate::forms::FormSpec;
use crate::staging::{StagedFile, StagingList};
use crate::transport::TransportError;

/// Wire name of attachment parts.
pub const FILES_FIELD: &str = "files";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<StagedFile>,
}

impl FormBody {
    /// Snapshot of a form's fields and the currently staged files (in staging order).
    pub fn from_form<F: FormSpec + ?Sized>(form: &F, staging: &StagingList) -> Self {
        let files = if form.kind().accepts_files() {
            staging.files().to_vec()
        } else {
            Vec::new()
        };
        Self {
            fields: form.fields(),
            files,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Builds the libcurl form. Attachment bytes are read by libcurl during the
    /// transfer; each path is checked here so a vanished file fails early.
    pub fn to_curl_form(&self) -> Result<curl::easy::Form, TransportError> {
        let mut form = curl::easy::Form::new();
        for (name, value) in &self.fields {
            form.part(name).contents(value.as_bytes()).add()?;
        }
        for file in &self.files {
            if !file.path().is_file() {
                return Err(TransportError::Attachment {
                    name: file.name().to_string(),
                    path: file.path().to_path_buf(),
                });
            }
            form.part(FILES_FIELD)
                .file(file.path())
                .filename(file.name())
                .add()?;
        }
        Ok(form)
    }
}
