//! `draftdesk press` – generate a press release.

use anyhow::Result;
use clap::Args;
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::forms::PressForm;
use std::path::PathBuf;

use super::submit::submit_once;
use crate::cli::ExportArgs;

#[derive(Debug, Clone, Args)]
pub struct PressArgs {
    /// Release title.
    #[arg(long)]
    pub title: String,
    /// Person in charge.
    #[arg(long)]
    pub author: String,
    /// Contact number or address.
    #[arg(long)]
    pub contact: String,
    /// Key content of the release.
    #[arg(long)]
    pub content: String,
    /// Issuing ministry.
    #[arg(long, alias = "ministry")]
    pub department: Option<String>,
    /// Source document to attach (repeatable).
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub export: ExportArgs,
}

pub async fn run_press(cfg: &DraftdeskConfig, args: PressArgs) -> Result<()> {
    let form = PressForm {
        title: args.title,
        author: args.author,
        contact: args.contact,
        content: args.content,
        department: args.department.unwrap_or_default(),
    };
    submit_once(cfg, form, &args.files, &args.export).await
}
