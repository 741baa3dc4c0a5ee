//! Terminal front end: the numbered main menu and its prompt loops.

mod command;
mod controller;
mod prompt;

pub use command::Command;
pub use controller::Controller;
pub use prompt::Prompter;
