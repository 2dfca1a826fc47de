//! One-shot submission shared by the form commands.

use anyhow::Result;
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::controller::{Command, FormController};
use draftdesk_core::export::write_export;
use draftdesk_core::forms::FormSpec;
use draftdesk_core::outcome::Outcome;
use draftdesk_core::staging::StagedFile;
use draftdesk_core::transport::CurlTransport;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::view::TerminalView;
use crate::cli::ExportArgs;

/// Stages `files`, submits `form` once and prints the result. Errors of any
/// kind (rejection, server, transport) end the command with that message.
pub async fn submit_once<F: FormSpec>(
    cfg: &DraftdeskConfig,
    form: F,
    files: &[PathBuf],
    export: &ExportArgs,
) -> Result<()> {
    let url = cfg.form_url(form.kind())?;
    let transport = Arc::new(CurlTransport::from_config(cfg));
    let mut controller = FormController::new(form, url, transport);
    let mut view = TerminalView::one_shot();

    if !files.is_empty() {
        let staged = files
            .iter()
            .map(StagedFile::from_path)
            .collect::<Result<Vec<_>>>()?;
        controller.dispatch(Command::Add(staged), &mut view).await?;
    }

    let outcome = controller.submit(&mut view).await;
    match outcome {
        Outcome::Reply(text) => {
            let dir = match &export.out_dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            for format in &export.formats {
                let path = write_export(&dir, &cfg.export_basename, (*format).into(), text)?;
                eprintln!("Saved {}", path.display());
            }
            Ok(())
        }
        Outcome::Empty(_) => Ok(()),
        Outcome::Rejected(msg) | Outcome::ServerError(msg) | Outcome::TransportError(msg) => {
            anyhow::bail!("{}", msg)
        }
    }
}
