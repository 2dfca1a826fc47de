use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::forms::FormKind;

/// Environment variable that overrides `base_url` from the config file.
pub const BASE_URL_ENV: &str = "DRAFTDESK_BASE_URL";

/// Request paths of the generation service (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub chat: String,
    pub congrats: String,
    pub greeting: String,
    pub press: String,
    pub health: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat: "/api/chat".to_string(),
            congrats: "/generate-congrats".to_string(),
            greeting: "/generate-greeting".to_string(),
            press: "/generate-with-pdf".to_string(),
            health: "/health".to_string(),
        }
    }
}

impl Endpoints {
    pub fn for_form(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::Chat => &self.chat,
            FormKind::Congrats => &self.congrats,
            FormKind::Greeting => &self.greeting,
            FormKind::Press => &self.press,
        }
    }
}

fn default_export_basename() -> String {
    "생성결과".to_string()
}

/// Global configuration loaded from `~/.config/draftdesk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftdeskConfig {
    /// Base URL of the generation service; endpoint paths are resolved against it.
    pub base_url: String,
    /// Seconds allowed for establishing the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Optional overall request timeout in seconds (None = wait until the server answers).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// File name (without extension) used for exported results.
    #[serde(default = "default_export_basename")]
    pub export_basename: String,
    /// Optional endpoint paths; if missing, built-in defaults are used.
    #[serde(default)]
    pub endpoints: Option<Endpoints>,
}

impl Default for DraftdeskConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: None,
            export_basename: default_export_basename(),
            endpoints: None,
        }
    }
}

impl DraftdeskConfig {
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints.clone().unwrap_or_default()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolves an endpoint path against `base_url`.
    ///
    /// A path prefix in `base_url` is kept: `http://host/app` + `/api/chat`
    /// gives `http://host/app/api/chat`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        base.join(path.trim_start_matches('/'))
            .with_context(|| format!("invalid endpoint path {:?}", path))
    }

    pub fn form_url(&self, kind: FormKind) -> Result<Url> {
        self.endpoint_url(self.endpoints().for_form(kind))
    }

    pub fn health_url(&self) -> Result<Url> {
        self.endpoint_url(&self.endpoints().health)
    }

    /// Applies `DRAFTDESK_BASE_URL` if set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var(BASE_URL_ENV) {
            if !v.trim().is_empty() {
                tracing::debug!("base_url overridden from {}", BASE_URL_ENV);
                self.base_url = v.trim().to_string();
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("draftdesk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DraftdeskConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DraftdeskConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DraftdeskConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
