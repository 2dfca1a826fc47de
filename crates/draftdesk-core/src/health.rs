//! Liveness probe against the generation service.

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub http_status: u32,
    /// `status` from the JSON body, when the service reports one.
    pub status: Option<String>,
}

#[derive(Deserialize)]
struct HealthBody {
    status: Option<String>,
}

/// GETs the health endpoint. Fails on transport errors and non-2xx statuses.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn probe<T: Transport + ?Sized>(transport: &T, url: &Url) -> Result<HealthReport> {
    let response = transport
        .get(url)
        .with_context(|| format!("GET {} failed", url))?;
    if !response.is_success() {
        anyhow::bail!("GET {} returned HTTP {}", url, response.status);
    }
    let status = if response.is_structured() {
        serde_json::from_slice::<HealthBody>(&response.body)
            .ok()
            .and_then(|b| b.status)
    } else {
        None
    };
    Ok(HealthReport {
        http_status: response.status,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multipart::FormBody;
    use crate::transport::{RawResponse, TransportError};

    struct Canned(RawResponse);

    impl Transport for Canned {
        fn post_form(&self, _: &Url, _: &FormBody) -> Result<RawResponse, TransportError> {
            Err(TransportError::Task("unused".into()))
        }
        fn get(&self, _: &Url) -> Result<RawResponse, TransportError> {
            Ok(self.0.clone())
        }
    }

    fn url() -> Url {
        Url::parse("http://127.0.0.1:5000/health").unwrap()
    }

    #[test]
    fn running_service() {
        let t = Canned(RawResponse::json(200, r#"{"status":"running"}"#));
        let report = probe(&t, &url()).unwrap();
        assert_eq!(report.status.as_deref(), Some("running"));
    }

    #[test]
    fn non_json_body_has_no_status() {
        let t = Canned(RawResponse::new(200, Some("text/plain"), "ok"));
        assert_eq!(probe(&t, &url()).unwrap().status, None);
    }

    #[test]
    fn error_status_fails() {
        let t = Canned(RawResponse::new(503, None, ""));
        let err = probe(&t, &url()).unwrap_err();
        assert!(err.to_string().contains("503"));
    }
}
