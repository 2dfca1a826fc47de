//! `draftdesk greeting` – generate a greeting speech.

use anyhow::Result;
use clap::Args;
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::forms::GreetingForm;

use super::submit::submit_once;
use crate::cli::ExportArgs;

#[derive(Debug, Clone, Args)]
pub struct GreetingArgs {
    /// Speaker name.
    #[arg(long)]
    pub speaker: String,
    /// Speaker position.
    #[arg(long)]
    pub position: String,
    /// Event the greeting is read at.
    #[arg(long)]
    pub event: String,
    /// Event date.
    #[arg(long)]
    pub date: String,
    /// Key message to get across.
    #[arg(long)]
    pub message: String,

    #[command(flatten)]
    pub export: ExportArgs,
}

pub async fn run_greeting(cfg: &DraftdeskConfig, args: GreetingArgs) -> Result<()> {
    let form = GreetingForm {
        speaker: args.speaker,
        position: args.position,
        event: args.event,
        date: args.date,
        message: args.message,
    };
    submit_once(cfg, form, &[], &args.export).await
}
