//! Form controller: owns one form's input and staging list and turns UI
//! commands into staging updates and submissions.
//!
//! Commands are handled one at a time through `&mut self`; a submission keeps
//! the controller busy until its outcome is shown, so a second `Submit` only
//! runs after the first one resolved (against the cleared inputs).

use anyhow::Result;
use std::sync::Arc;
use url::Url;

use crate::forms::{FormKind, FormSpec};
use crate::multipart::FormBody;
use crate::outcome::{self, Outcome};
use crate::staging::{FileKey, StagedFile, StagingDisplay, StagingList};
use crate::transcript::{Transcript, TranscriptEntry};
use crate::transport::{Transport, TransportError};

/// Discrete UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetText(String),
    SetField { name: String, value: String },
    Add(Vec<StagedFile>),
    Remove(FileKey),
    RemoveAt(usize),
    Submit,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Where the controller shows its state. All methods default to doing nothing.
pub trait FormView {
    fn show_staging(&mut self, _display: &StagingDisplay) {}
    fn show_pending(&mut self, _notice: &str) {}
    fn show_outcome(&mut self, _outcome: &Outcome) {}
    fn show_transcript_entry(&mut self, _entry: &TranscriptEntry) {}
}

/// View that ignores everything.
#[derive(Debug, Default)]
pub struct NullView;

impl FormView for NullView {}

pub struct FormController<F: FormSpec, T: Transport> {
    form: F,
    staging: StagingList,
    transport: Arc<T>,
    url: Url,
    phase: Phase,
    last_outcome: Option<Outcome>,
    transcript: Transcript,
}

impl<F: FormSpec, T: Transport> FormController<F, T> {
    pub fn new(form: F, url: Url, transport: Arc<T>) -> Self {
        Self {
            form,
            staging: StagingList::new(),
            transport,
            url,
            phase: Phase::Idle,
            last_outcome: None,
            transcript: Transcript::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.form.kind()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn staging(&self) -> &StagingList {
        &self.staging
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Applies one command and updates `view`.
    pub async fn dispatch(&mut self, command: Command, view: &mut dyn FormView) -> Result<()> {
        match command {
            Command::SetText(text) => self.form.set_field("message", text)?,
            Command::SetField { name, value } => self.form.set_field(&name, value)?,
            Command::Add(files) => {
                if !self.kind().accepts_files() {
                    anyhow::bail!("{} form does not take attachments", self.kind());
                }
                self.staging.add(files);
                view.show_staging(self.staging.display());
            }
            Command::Remove(key) => {
                if self.staging.remove(&key).is_none() {
                    tracing::debug!(name = %key.name, "remove: attachment already gone");
                }
                view.show_staging(self.staging.display());
            }
            Command::RemoveAt(index) => {
                self.staging.remove_at(index);
                view.show_staging(self.staging.display());
            }
            Command::Submit => {
                self.submit(view).await;
            }
            Command::Reset => {
                self.form.reset();
                self.staging.clear();
                view.show_staging(self.staging.display());
            }
        }
        Ok(())
    }

    /// Validates, sends exactly one request, shows exactly one outcome, then
    /// clears the input and the staging list (unless validation rejected it).
    pub async fn submit(&mut self, view: &mut dyn FormView) -> &Outcome {
        let kind = self.kind();

        if let Err(notice) = self.form.validate(&self.staging) {
            tracing::debug!(form = %kind, "submission rejected: {}", notice);
            let outcome = Outcome::Rejected(notice);
            view.show_outcome(&outcome);
            return self.last_outcome.insert(outcome);
        }

        if let Some(text) = self.form.echo() {
            view.show_transcript_entry(self.transcript.push(TranscriptEntry::User(text)));
        }
        if kind.accepts_files() {
            for file in self.staging.iter() {
                let entry = self
                    .transcript
                    .push(TranscriptEntry::Attachment(file.name().to_string()));
                view.show_transcript_entry(entry);
            }
        }

        let body = FormBody::from_form(&self.form, &self.staging);
        tracing::info!(
            form = %kind,
            url = %self.url,
            files = body.files.len(),
            "submitting form"
        );
        self.phase = Phase::Submitting;
        view.show_pending(kind.pending_notice());

        let outcome = match self.send(body).await {
            Ok(response) => {
                tracing::info!(form = %kind, status = response.status, "form submission finished");
                outcome::interpret(kind, &response)
            }
            Err(e) => {
                tracing::warn!(form = %kind, "form submission failed: {}", e);
                Outcome::from_transport_error(&e)
            }
        };
        if let Outcome::ServerError(msg) = &outcome {
            tracing::warn!(form = %kind, "server reported an error: {}", msg);
        }

        self.phase = Phase::Idle;
        view.show_outcome(&outcome);
        if let Some(entry) = self.transcript.record_outcome(&outcome) {
            view.show_transcript_entry(entry);
        }

        self.form.clear_after_submit();
        self.staging.clear();
        view.show_staging(self.staging.display());

        self.last_outcome.insert(outcome)
    }

    async fn send(&self, body: FormBody) -> Result<crate::transport::RawResponse, TransportError> {
        let transport = Arc::clone(&self.transport);
        let url = self.url.clone();
        tokio::task::spawn_blocking(move || transport.post_form(&url, &body))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }
}
