//! libcurl-backed transport.

use std::str;
use std::time::Duration;
use url::Url;

use super::headers::final_content_type;
use super::{RawResponse, Transport, TransportError};
use crate::config::DraftdeskConfig;
use crate::multipart::FormBody;

#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    request_timeout: Option<Duration>,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: None,
        }
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, request_timeout: Option<Duration>) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    pub fn from_config(cfg: &DraftdeskConfig) -> Self {
        Self::new(cfg.connect_timeout(), cfg.request_timeout())
    }

    fn easy(&self, url: &Url) -> Result<curl::easy::Easy, TransportError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(t) = self.request_timeout {
            easy.timeout(t)?;
        }
        Ok(easy)
    }

    /// Runs the transfer, collecting header lines and the body.
    fn perform(mut easy: curl::easy::Easy) -> Result<RawResponse, TransportError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = easy.response_code()?;
        Ok(RawResponse {
            status,
            content_type: final_content_type(&headers),
            body,
        })
    }
}

impl Transport for CurlTransport {
    fn post_form(&self, url: &Url, body: &FormBody) -> Result<RawResponse, TransportError> {
        let mut easy = self.easy(url)?;
        easy.httppost(body.to_curl_form()?)?;
        // Send the body straight away instead of waiting on `100 Continue`.
        let mut list = curl::easy::List::new();
        list.append("Expect:")?;
        easy.http_headers(list)?;

        tracing::debug!(
            url = %url,
            fields = body.fields.len(),
            files = body.files.len(),
            "POST multipart"
        );
        let response = Self::perform(easy)?;
        tracing::debug!(url = %url, status = response.status, bytes = response.body.len(), "response received");
        Ok(response)
    }

    fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let mut easy = self.easy(url)?;
        easy.get(true)?;
        Self::perform(easy)
    }
}
