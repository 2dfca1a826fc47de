//! `draftdesk chat` – send a message and/or attachments.

use anyhow::Result;
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::forms::ChatInput;
use std::path::PathBuf;

use super::submit::submit_once;
use crate::cli::ExportArgs;

pub async fn run_chat(
    cfg: &DraftdeskConfig,
    message: Option<String>,
    files: &[PathBuf],
    export: &ExportArgs,
) -> Result<()> {
    let input = ChatInput::new(message.unwrap_or_default());
    submit_once(cfg, input, files, export).await
}
