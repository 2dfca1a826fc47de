//! `draftdesk completions <shell>` – print a completion script.

use clap_complete::Shell;

pub fn run_completions(shell: Shell, cmd: &mut clap::Command) {
    clap_complete::generate(shell, cmd, "draftdesk", &mut std::io::stdout());
}
