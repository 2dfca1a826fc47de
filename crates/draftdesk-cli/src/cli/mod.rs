//! CLI for draftdesk.

mod commands;
mod view;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use draftdesk_core::config;
use draftdesk_core::export::ExportFormat;
use draftdesk_core::forms::FormKind;
use std::path::PathBuf;

use commands::{
    run_chat, run_completions, run_congrats, run_greeting, run_health, run_press, run_shell,
    CongratsArgs, GreetingArgs, PressArgs,
};

/// Top-level CLI for draftdesk.
#[derive(Debug, Parser)]
#[command(name = "draftdesk")]
#[command(about = "draftdesk: chat, speech and press-release drafts from the generation service", long_about = None)]
pub struct Cli {
    /// Service base URL (overrides config.toml and DRAFTDESK_BASE_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Txt,
    Doc,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Txt => ExportFormat::Txt,
            ExportArg::Doc => ExportFormat::Doc,
        }
    }
}

/// Where to save the generated text, if anywhere.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Save the result as txt or doc (repeatable).
    #[arg(long = "export", value_enum, value_name = "FORMAT")]
    pub formats: Vec<ExportArg>,

    /// Directory for exported files (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellForm {
    Chat,
    Congrats,
    Greeting,
    Press,
}

impl From<ShellForm> for FormKind {
    fn from(form: ShellForm) -> Self {
        match form {
            ShellForm::Chat => FormKind::Chat,
            ShellForm::Congrats => FormKind::Congrats,
            ShellForm::Greeting => FormKind::Greeting,
            ShellForm::Press => FormKind::Press,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Send a chat message and/or attachments and print the reply.
    Chat {
        /// Message text.
        #[arg(short, long)]
        message: Option<String>,

        /// File to attach (repeatable; duplicates by name and size are dropped).
        #[arg(short = 'f', long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Generate a congratulatory speech.
    Congrats(CongratsArgs),

    /// Generate a greeting speech.
    Greeting(GreetingArgs),

    /// Generate a press release from release data and source documents.
    Press(PressArgs),

    /// Fill in and submit a form interactively.
    Shell {
        /// Which form to open.
        #[arg(value_enum)]
        form: ShellForm,
    },

    /// Check that the generation service is up.
    Health,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell, &mut Cli::command());
            return Ok(());
        }

        let mut cfg = config::load_or_init()?;
        cfg.apply_env_overrides();
        if let Some(base_url) = cli.base_url {
            cfg.base_url = base_url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Chat {
                message,
                files,
                export,
            } => run_chat(&cfg, message, &files, &export).await?,
            CliCommand::Congrats(args) => run_congrats(&cfg, args).await?,
            CliCommand::Greeting(args) => run_greeting(&cfg, args).await?,
            CliCommand::Press(args) => run_press(&cfg, args).await?,
            CliCommand::Shell { form } => run_shell(&cfg, form.into()).await?,
            CliCommand::Health => run_health(&cfg).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
