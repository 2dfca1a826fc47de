//! `draftdesk health` – probe the generation service.

use anyhow::{Context, Result};
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::health;
use draftdesk_core::transport::CurlTransport;

pub async fn run_health(cfg: &DraftdeskConfig) -> Result<()> {
    let url = cfg.health_url()?;
    let transport = CurlTransport::from_config(cfg);
    let report = tokio::task::spawn_blocking({
        let url = url.clone();
        move || health::probe(&transport, &url)
    })
    .await
    .context("health task join")??;
    println!(
        "{} HTTP {} ({})",
        url,
        report.http_status,
        report.status.as_deref().unwrap_or("no status")
    );
    Ok(())
}
