//! `draftdesk shell <form>` – line-driven form editing and submission.
//!
//! Each input line becomes one controller command, so the attachment list,
//! submissions and resets behave exactly as on the web page.

use anyhow::{Context, Result};
use draftdesk_core::config::DraftdeskConfig;
use draftdesk_core::controller::{Command, FormController};
use draftdesk_core::export::{write_export, ExportFormat};
use draftdesk_core::forms::{ChatInput, CongratsForm, FormKind, FormSpec, GreetingForm, PressForm};
use draftdesk_core::staging::StagedFile;
use draftdesk_core::transport::CurlTransport;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::view::TerminalView;

const HELP: &str = "\
commands:
  add <path>...        attach files (same name and size are skipped)
  rm <n>               remove attachment n as listed by `ls`
  ls                   list attachments
  text <message>       set the chat message
  set <field> <value>  set a form field (e.g. set title 제목)
  submit               send the form
  reset                clear input and attachments
  export <txt|doc>     save the last result in the current directory
  help                 show this help
  quit                 leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    Empty,
    Add(Vec<PathBuf>),
    Remove(usize),
    List,
    Text(String),
    Set { field: String, value: String },
    Submit,
    Reset,
    Export(ExportFormat),
    Help,
    Quit,
}

/// Parses one input line. Paths are whitespace separated.
pub fn parse_line(line: &str) -> Result<ShellLine> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellLine::Empty);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let parsed = match word {
        "add" => {
            if rest.is_empty() {
                anyhow::bail!("usage: add <path>...");
            }
            ShellLine::Add(rest.split_whitespace().map(PathBuf::from).collect())
        }
        "rm" | "remove" => {
            let n = rest
                .parse::<usize>()
                .with_context(|| format!("usage: rm <n> (got {:?})", rest))?;
            ShellLine::Remove(n)
        }
        "ls" | "list" => ShellLine::List,
        "text" | "say" => ShellLine::Text(rest.to_string()),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(f, v)| (f, v.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                anyhow::bail!("usage: set <field> <value>");
            }
            ShellLine::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "submit" | "send" => ShellLine::Submit,
        "reset" => ShellLine::Reset,
        "export" => ShellLine::Export(rest.parse()?),
        "help" | "?" => ShellLine::Help,
        "quit" | "exit" | "q" => ShellLine::Quit,
        other => anyhow::bail!("unknown command {:?}; type `help`", other),
    };
    Ok(parsed)
}

pub async fn run_shell(cfg: &DraftdeskConfig, kind: FormKind) -> Result<()> {
    match kind {
        FormKind::Chat => shell_loop(cfg, ChatInput::default()).await,
        FormKind::Congrats => shell_loop(cfg, CongratsForm::default()).await,
        FormKind::Greeting => shell_loop(cfg, GreetingForm::default()).await,
        FormKind::Press => shell_loop(cfg, PressForm::default()).await,
    }
}

async fn shell_loop<F: FormSpec>(cfg: &DraftdeskConfig, form: F) -> Result<()> {
    let url = cfg.form_url(form.kind())?;
    let transport = Arc::new(CurlTransport::from_config(cfg));
    let mut controller = FormController::new(form, url, transport);
    let mut view = TerminalView::interactive();

    println!("{} form at {} (type `help`)", controller.kind(), controller.url());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{:#}", e);
                continue;
            }
        };
        let command = match parsed {
            ShellLine::Empty => continue,
            ShellLine::Quit => break,
            ShellLine::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellLine::List => {
                println!("{}", controller.staging().display());
                continue;
            }
            ShellLine::Export(format) => {
                if let Err(e) = export_last(cfg, &controller, format) {
                    eprintln!("{:#}", e);
                }
                continue;
            }
            ShellLine::Add(paths) => match stage(&paths) {
                Ok(files) => Command::Add(files),
                Err(e) => {
                    eprintln!("{:#}", e);
                    continue;
                }
            },
            ShellLine::Remove(n) => {
                // Resolve the listed row to its file so a stale number never hits another file.
                match controller.staging().display().rows().get(n) {
                    Some(row) => Command::Remove(row.key.clone()),
                    None => {
                        eprintln!("no attachment {}", n);
                        continue;
                    }
                }
            }
            ShellLine::Text(text) => Command::SetText(text),
            ShellLine::Set { field, value } => Command::SetField { name: field, value },
            ShellLine::Submit => Command::Submit,
            ShellLine::Reset => Command::Reset,
        };
        if let Err(e) = controller.dispatch(command, &mut view).await {
            eprintln!("{:#}", e);
        }
    }
    Ok(())
}

fn stage(paths: &[PathBuf]) -> Result<Vec<StagedFile>> {
    paths.iter().map(StagedFile::from_path).collect()
}

fn export_last<F: FormSpec>(
    cfg: &DraftdeskConfig,
    controller: &FormController<F, CurlTransport>,
    format: ExportFormat,
) -> Result<()> {
    let text = controller
        .last_outcome()
        .and_then(|o| o.reply())
        .context("nothing to export yet")?;
    let path = write_export(&std::env::current_dir()?, &cfg.export_basename, format, text)?;
    println!("Saved {}", path.display());
    Ok(())
}
