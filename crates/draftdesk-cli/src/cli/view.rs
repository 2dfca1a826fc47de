//! Terminal rendering of controller state.

use draftdesk_core::controller::FormView;
use draftdesk_core::outcome::Outcome;
use draftdesk_core::staging::StagingDisplay;
use draftdesk_core::transcript::TranscriptEntry;

/// Prints results to stdout and progress to stderr.
///
/// One-shot mode prints only the generated text (errors are returned by the
/// command instead). Interactive mode also prints the attachment list after
/// every change and every outcome, errors included.
pub struct TerminalView {
    interactive: bool,
}

impl TerminalView {
    pub fn one_shot() -> Self {
        Self { interactive: false }
    }

    pub fn interactive() -> Self {
        Self { interactive: true }
    }
}

impl FormView for TerminalView {
    fn show_staging(&mut self, display: &StagingDisplay) {
        if self.interactive {
            println!("{}", display);
        }
    }

    fn show_pending(&mut self, notice: &str) {
        eprintln!("{}", notice);
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Reply(text) => println!("{}", text),
            Outcome::Empty(notice) => println!("{}", notice),
            _ if self.interactive => println!("{}", outcome),
            _ => {}
        }
    }

    fn show_transcript_entry(&mut self, entry: &TranscriptEntry) {
        if self.interactive {
            if let TranscriptEntry::Attachment(_) = entry {
                println!("{}", entry);
            }
        }
    }
}
