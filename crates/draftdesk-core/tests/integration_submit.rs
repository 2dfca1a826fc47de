//! End-to-end submissions through libcurl against a local HTTP server.

mod common;

use common::form_server::{self, CannedResponse};
use draftdesk_core::controller::{Command, FormController, NullView};
use draftdesk_core::forms::{ChatInput, FormKind, GreetingForm, PressForm};
use draftdesk_core::health;
use draftdesk_core::outcome::Outcome;
use draftdesk_core::staging::StagedFile;
use draftdesk_core::transport::CurlTransport;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

fn transport() -> Arc<CurlTransport> {
    Arc::new(CurlTransport::new(
        Duration::from_secs(5),
        Some(Duration::from_secs(10)),
    ))
}

fn attachment(dir: &std::path::Path, name: &str, contents: &str) -> StagedFile {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    StagedFile::from_path(&path).unwrap()
}

#[tokio::test]
async fn chat_posts_message_and_files_as_multipart() {
    let server = form_server::start(CannedResponse::json(200, r#"{"reply":"Hello"}"#));
    let dir = tempdir().unwrap();
    let a = attachment(dir.path(), "memo.txt", "first attachment body");
    let b = attachment(dir.path(), "plan.txt", "second attachment body");

    let mut ctl = FormController::new(ChatInput::default(), server.url("/api/chat"), transport());
    let mut view = NullView;
    ctl.dispatch(Command::SetText("  요약해 주세요 ".into()), &mut view)
        .await
        .unwrap();
    ctl.dispatch(Command::Add(vec![a.clone(), b, a]), &mut view)
        .await
        .unwrap();
    assert_eq!(ctl.staging().len(), 2);
    ctl.dispatch(Command::Submit, &mut view).await.unwrap();

    assert_eq!(ctl.last_outcome(), Some(&Outcome::Reply("Hello".into())));
    assert!(ctl.staging().is_empty());
    assert!(ctl.form().message.is_empty());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert!(req.starts_with("POST /api/chat "));
    assert!(req.contains("multipart/form-data"));
    assert!(req.contains("name=\"message\""));
    assert!(req.contains("요약해 주세요"));
    assert!(req.contains("name=\"files\"; filename=\"memo.txt\""));
    assert!(req.contains("name=\"files\"; filename=\"plan.txt\""));
    assert!(req.contains("first attachment body"));
    assert!(req.contains("second attachment body"));
    assert_eq!(req.matches("filename=").count(), 2);
}

#[tokio::test]
async fn chat_without_message_omits_message_part() {
    let server = form_server::start(CannedResponse::json(200, r#"{"reply":"got it"}"#));
    let dir = tempdir().unwrap();
    let a = attachment(dir.path(), "only.txt", "x");

    let mut ctl = FormController::new(ChatInput::default(), server.url("/api/chat"), transport());
    ctl.dispatch(Command::Add(vec![a]), &mut NullView).await.unwrap();
    ctl.dispatch(Command::Submit, &mut NullView).await.unwrap();

    assert_eq!(ctl.last_outcome().and_then(Outcome::reply), Some("got it"));
    let req = &server.requests()[0];
    assert!(!req.contains("name=\"message\""));
}

#[tokio::test]
async fn server_error_with_json_reply_is_shown() {
    let server = form_server::start(CannedResponse::json(500, r#"{"reply":"bad input"}"#));
    let mut ctl = FormController::new(ChatInput::new("hi"), server.url("/api/chat"), transport());
    ctl.submit(&mut NullView).await;
    assert_eq!(ctl.last_outcome(), Some(&Outcome::ServerError("bad input".into())));
    assert!(ctl.form().message.is_empty());
}

#[tokio::test]
async fn server_error_with_empty_body_mentions_status() {
    let server = form_server::start(CannedResponse::text(500, ""));
    let mut ctl = FormController::new(ChatInput::new("hi"), server.url("/api/chat"), transport());
    let outcome = ctl.submit(&mut NullView).await.clone();
    assert!(matches!(outcome, Outcome::ServerError(_)));
    assert!(outcome.message().contains("500"));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let mut ctl = FormController::new(
        ChatInput::new("hi"),
        form_server::closed_port_url(),
        transport(),
    );
    let outcome = ctl.submit(&mut NullView).await.clone();
    assert!(matches!(outcome, Outcome::TransportError(_)));
    assert!(outcome.message().starts_with("Error: "));
    assert!(ctl.form().message.is_empty());
}

#[tokio::test]
async fn vanished_attachment_fails_without_request() {
    let server = form_server::start(CannedResponse::json(200, r#"{"reply":"x"}"#));
    let dir = tempdir().unwrap();
    let a = attachment(dir.path(), "gone.txt", "soon deleted");
    let mut ctl = FormController::new(ChatInput::default(), server.url("/api/chat"), transport());
    ctl.dispatch(Command::Add(vec![a]), &mut NullView).await.unwrap();
    std::fs::remove_file(dir.path().join("gone.txt")).unwrap();

    let outcome = ctl.submit(&mut NullView).await.clone();
    assert!(matches!(outcome, Outcome::TransportError(_)));
    assert!(outcome.message().contains("gone.txt"));
    assert!(server.requests().is_empty());
    assert!(ctl.staging().is_empty());
}

#[tokio::test]
async fn greeting_reads_result_key() {
    let server = form_server::start(CannedResponse::json(200, r#"{"result":"존경하는 여러분"}"#));
    let form = GreetingForm {
        speaker: "김민수".into(),
        position: "원장".into(),
        event: "개원식".into(),
        date: "2026-03-02".into(),
        message: "감사".into(),
    };
    let mut ctl = FormController::new(form, server.url("/generate-greeting"), transport());
    ctl.submit(&mut NullView).await;
    assert_eq!(ctl.last_outcome().and_then(Outcome::reply), Some("존경하는 여러분"));
    let req = &server.requests()[0];
    assert!(req.contains("name=\"speaker\""));
    assert!(req.contains("name=\"date\""));
}

#[tokio::test]
async fn press_empty_reply_shows_placeholder() {
    let server = form_server::start(CannedResponse::json(200, r#"{"reply":"   "}"#));
    let form = PressForm {
        title: "t".into(),
        author: "a".into(),
        contact: "c".into(),
        content: "body".into(),
        department: String::new(),
    };
    let mut ctl = FormController::new(form, server.url("/generate-with-pdf"), transport());
    let outcome = ctl.submit(&mut NullView).await.clone();
    assert_eq!(outcome, Outcome::Empty(FormKind::Press.empty_notice().into()));
}

#[tokio::test]
async fn health_probe_reads_status() {
    let server = form_server::start(CannedResponse::json(200, r#"{"status":"running"}"#));
    let url = server.url("/health");
    let report = tokio::task::spawn_blocking(move || health::probe(&CurlTransport::default(), &url))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.http_status, 200);
    assert_eq!(report.status.as_deref(), Some("running"));
    assert!(server.requests()[0].starts_with("GET /health "));
}
