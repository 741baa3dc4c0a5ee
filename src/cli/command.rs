//! Top-level menu commands.

use std::fmt;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Delete,
    Edit,
    ListByDomain,
    ListAll,
    Export,
}

impl Command {
    /// Menu entries in display order.
    pub const ALL: [Command; 6] = [
        Command::Add,
        Command::Delete,
        Command::Edit,
        Command::ListByDomain,
        Command::ListAll,
        Command::Export,
    ];

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: &str) -> Option<Command> {
        let index: usize = choice.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Add => "add contact",
            Command::Delete => "delete contact",
            Command::Edit => "edit contact",
            Command::ListByDomain => "list contacts by domain",
            Command::ListAll => "list all contacts",
            Command::Export => "output contacts to csv",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
