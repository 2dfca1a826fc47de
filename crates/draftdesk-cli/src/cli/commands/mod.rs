//! CLI command handlers. Each command is in its own file.

mod chat;
mod completions;
mod congrats;
mod greeting;
mod health;
mod press;
mod shell;
mod submit;

pub use chat::run_chat;
pub use completions::run_completions;
pub use congrats::{run_congrats, CongratsArgs};
pub use greeting::{run_greeting, GreetingArgs};
pub use health::run_health;
pub use press::{run_press, PressArgs};
pub use shell::run_shell;
