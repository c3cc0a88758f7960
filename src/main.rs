// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, then either print
//   the links or hand the file path to the interactive menu.
// - Returns `anyhow::Result` so load/save failures exit with status 1.

use clap::Parser;
use links_wizard::cli::{Cli, Command};
use links_wizard::{store, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Warnings always, debug with --verbose. Logs go to stderr so they
    // don't interleave with the menu.
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("links_wizard={level}"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Wizard) {
        Command::List => {
            let config = store::load(&cli.file)?;
            ui::print_links(&config);
        }
        Command::Wizard => {
            println!("Welcome to the links configuration wizard!");
            println!("This tool helps you manage the links in {}.\n", cli.file.display());
            if store::ensure_exists(&cli.file)? {
                println!("{} not found. Created a new configuration.", cli.file.display());
            }
            ui::main_menu(&cli.file)?;
        }
    }
    Ok(())
}
