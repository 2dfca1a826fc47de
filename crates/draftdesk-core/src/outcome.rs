//! Turns a raw response (or a failed request) into the one message shown for
//! a submission.

use serde_json::Value;
use std::fmt;

use crate::forms::FormKind;
use crate::transport::{RawResponse, TransportError};

/// The single displayed result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Presence check failed; nothing was sent.
    Rejected(String),
    /// Generated text, trimmed.
    Reply(String),
    /// The request succeeded but carried no usable text.
    Empty(String),
    /// Non-2xx status; message taken from the body when there is one.
    ServerError(String),
    /// No response was received, or it could not be decoded.
    TransportError(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Rejected(m)
            | Outcome::Reply(m)
            | Outcome::Empty(m)
            | Outcome::ServerError(m)
            | Outcome::TransportError(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Outcome::Rejected(_) | Outcome::ServerError(_) | Outcome::TransportError(_)
        )
    }

    /// The generated text, if the attempt produced one.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Outcome::Reply(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the attempt got as far as the network (inputs are cleared afterwards).
    pub fn completed(&self) -> bool {
        !matches!(self, Outcome::Rejected(_))
    }

    pub fn from_transport_error(err: &TransportError) -> Self {
        Outcome::TransportError(format!("Error: {}", err))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn server_error_fallback(status: u32) -> String {
    format!("Server error: {}", status)
}

/// Interprets a response for `kind`.
pub fn interpret(kind: FormKind, response: &RawResponse) -> Outcome {
    if !response.is_success() {
        return Outcome::ServerError(error_message(kind, response));
    }

    let reply = if response.is_structured() {
        match serde_json::from_slice::<Value>(&response.body) {
            Ok(value) => lookup_text(&value, kind.reply_keys()),
            Err(e) => {
                return Outcome::TransportError(format!("Error: invalid JSON response: {}", e));
            }
        }
    } else {
        Some(response.text())
    };

    match reply.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Outcome::Reply(text.to_string()),
        _ => Outcome::Empty(kind.empty_notice().to_string()),
    }
}

fn error_message(kind: FormKind, response: &RawResponse) -> String {
    let message = if response.is_structured() {
        serde_json::from_slice::<Value>(&response.body)
            .ok()
            .and_then(|v| lookup_text(&v, kind.reply_keys()).or_else(|| detail_text(&v)))
    } else {
        Some(response.text())
    };
    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| server_error_fallback(response.status))
}

/// First string value under any of `keys`.
fn lookup_text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(*k))
        .find_map(|v| v.as_str().map(str::to_string))
}

/// `detail` of an error body: a string, or a list of `{msg}` validation entries.
fn detail_text(value: &Value) -> Option<String> {
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_trimmed() {
        let r = RawResponse::json(200, r#"{"reply": "  Hello\n"}"#);
        assert_eq!(interpret(FormKind::Chat, &r), Outcome::Reply("Hello".into()));
    }

    #[test]
    fn empty_reply_shows_no_content_notice() {
        let r = RawResponse::json(200, r#"{"reply": ""}"#);
        assert_eq!(
            interpret(FormKind::Chat, &r),
            Outcome::Empty(FormKind::Chat.empty_notice().into())
        );
        let missing = RawResponse::json(200, r#"{"other": "x"}"#);
        assert!(matches!(interpret(FormKind::Chat, &missing), Outcome::Empty(_)));
        let null = RawResponse::json(200, r#"{"reply": null}"#);
        assert!(matches!(interpret(FormKind::Chat, &null), Outcome::Empty(_)));
    }

    #[test]
    fn speech_forms_read_result() {
        let r = RawResponse::json(200, r#"{"result": "존경하는 내빈 여러분"}"#);
        assert_eq!(
            interpret(FormKind::Greeting, &r).reply(),
            Some("존경하는 내빈 여러분")
        );
        let wrong_key = RawResponse::json(200, r#"{"reply": "x"}"#);
        assert!(matches!(interpret(FormKind::Congrats, &wrong_key), Outcome::Empty(_)));
    }

    #[test]
    fn press_falls_back_to_result_key() {
        let r = RawResponse::json(200, r#"{"result": "응답을 받지 못했습니다."}"#);
        assert_eq!(
            interpret(FormKind::Press, &r).reply(),
            Some("응답을 받지 못했습니다.")
        );
    }

    #[test]
    fn plain_text_success_is_used_literally() {
        let r = RawResponse::new(200, Some("text/plain; charset=utf-8"), "hi there");
        assert_eq!(interpret(FormKind::Chat, &r), Outcome::Reply("hi there".into()));
        let no_ct = RawResponse::new(200, None, "   ");
        assert!(matches!(interpret(FormKind::Chat, &no_ct), Outcome::Empty(_)));
    }

    #[test]
    fn server_error_uses_reply_from_body() {
        let r = RawResponse::json(500, r#"{"reply": "bad input"}"#);
        assert_eq!(
            interpret(FormKind::Chat, &r),
            Outcome::ServerError("bad input".into())
        );
    }

    #[test]
    fn server_error_with_empty_body_names_status() {
        let r = RawResponse::json(500, "");
        let outcome = interpret(FormKind::Chat, &r);
        assert!(matches!(outcome, Outcome::ServerError(_)));
        assert!(outcome.message().contains("500"));

        let text = RawResponse::new(502, Some("text/plain"), "");
        assert_eq!(
            interpret(FormKind::Chat, &text),
            Outcome::ServerError(server_error_fallback(502))
        );
    }

    #[test]
    fn server_error_plain_text_body() {
        let r = RawResponse::new(413, Some("text/html"), "Request Entity Too Large");
        assert_eq!(
            interpret(FormKind::Press, &r),
            Outcome::ServerError("Request Entity Too Large".into())
        );
    }

    #[test]
    fn server_error_reads_detail() {
        let r = RawResponse::json(502, r#"{"detail": "upstream call failed"}"#);
        assert_eq!(
            interpret(FormKind::Greeting, &r),
            Outcome::ServerError("upstream call failed".into())
        );
        let list = RawResponse::json(
            422,
            r#"{"detail": [{"loc": ["body", "title"], "msg": "field required"}, {"msg": "too long"}]}"#,
        );
        assert_eq!(
            interpret(FormKind::Press, &list),
            Outcome::ServerError("field required; too long".into())
        );
    }

    #[test]
    fn malformed_json_success_is_a_transport_error() {
        let r = RawResponse::json(200, "{not json");
        let outcome = interpret(FormKind::Chat, &r);
        assert!(matches!(outcome, Outcome::TransportError(_)));
        assert!(outcome.message().starts_with("Error: invalid JSON response"));
    }

    #[test]
    fn only_rejection_skips_completion() {
        assert!(!Outcome::Rejected("x".into()).completed());
        assert!(Outcome::ServerError("x".into()).completed());
        assert!(Outcome::Empty("x".into()).completed());
        assert!(!Outcome::Empty("x".into()).is_error());
    }
}
