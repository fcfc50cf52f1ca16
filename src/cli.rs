use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clipboard history watcher.
#[derive(Debug, Parser)]
#[command(name = "clipshelf", version, about)]
pub struct Cli {
    /// Config file (defaults to `<config dir>/clipshelf/config.toml`).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Watch the clipboard and serve the history over stdio (default).
    Watch,

    /// Print the clipboard text, or nothing.
    GetText,

    /// Replace the clipboard contents with TEXT.
    SetText {
        text: String,
    },

    /// Write the clipboard image as PNG, or print it as a data URI.
    GetImage {
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Watch)
    }
}
