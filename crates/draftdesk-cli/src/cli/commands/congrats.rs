//! `draftdesk congrats` – generate a congratulatory speech.

use anyhow::Result;
use clap::Args;
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::forms::{Choice, CongratsForm};

use super::submit::submit_once;
use crate::cli::ExportArgs;

#[derive(Debug, Clone, Args)]
pub struct CongratsArgs {
    /// Organization name.
    #[arg(long)]
    pub org_name: String,
    /// Name and title of the organization head.
    #[arg(long)]
    pub org_leader: String,
    /// Event name.
    #[arg(long)]
    pub event_name: String,
    /// Purpose and character of the event.
    #[arg(long)]
    pub event_purpose: String,
    /// Audience; `기타` or `other` uses --audience-etc.
    #[arg(long)]
    pub audience: String,
    #[arg(long)]
    pub audience_etc: Option<String>,
    /// Writing style; `기타` or `other` uses --style-etc.
    #[arg(long)]
    pub style: String,
    #[arg(long)]
    pub style_etc: Option<String>,
    /// Length; `기타` or `other` uses --length-etc.
    #[arg(long)]
    pub length: String,
    #[arg(long)]
    pub length_etc: Option<String>,

    #[command(flatten)]
    pub export: ExportArgs,
}

impl CongratsArgs {
    pub fn to_form(&self) -> CongratsForm {
        CongratsForm {
            org_name: self.org_name.clone(),
            org_leader: self.org_leader.clone(),
            event_name: self.event_name.clone(),
            event_purpose: self.event_purpose.clone(),
            audience: Choice::from_select(&self.audience, self.audience_etc.as_deref()),
            style: Choice::from_select(&self.style, self.style_etc.as_deref()),
            length: Choice::from_select(&self.length, self.length_etc.as_deref()),
        }
    }
}

pub async fn run_congrats(cfg: &DraftdeskConfig, args: CongratsArgs) -> Result<()> {
    submit_once(cfg, args.to_form(), &[], &args.export).await
}
