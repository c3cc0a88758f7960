// Command-line arguments. Everything is optional: running the binary with
// no arguments opens the wizard on `./config.json`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Interactive editor for a JSON list of website links
#[derive(Parser, Debug)]
#[command(name = "links-wizard", author, version, about, long_about = None)]
pub struct Cli {
    /// Links file to edit
    #[arg(short, long, env = "LINKS_FILE", default_value = "config.json")]
    pub file: PathBuf,

    /// Enable verbose output (debug logging)
    #[arg(short, long, env = "LINKS_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive menu (default)
    Wizard,
    /// Print the configured links and exit
    List,
}
