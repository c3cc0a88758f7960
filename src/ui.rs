// UI layer: the interactive menu built on `dialoguer`. Each handler asks
// for input, applies it through `links`, and reports whether the list
// changed so the menu loop can save right away.

use crate::error::LinkError;
use crate::git::{default_commit_message, GitPublisher};
use crate::links::{parse_order, LinkUpdate, LinksConfig};
use crate::store;
use anyhow::{Context, Result};
use chrono::Local;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const RULE: &str = "============================================================";

const MENU: [&str; 8] = [
    "View current links",
    "Add new link",
    "Edit existing link",
    "Remove link",
    "Reorder links",
    "Save configuration",
    "Save and commit to Git",
    "Exit",
];

/// Main interactive menu. Loads `path`, then loops until the user picks
/// "Exit". Every successful edit is written back immediately.
pub fn main_menu(path: &Path) -> Result<()> {
    let mut config = store::load(path)?;

    loop {
        heading("LINKS CONFIGURATION WIZARD");
        println!("Currently managing {} links\n", config.len());

        let selection = Select::new().items(&MENU).default(0).interact()?;
        let changed = match selection {
            0 => {
                print_links(&config);
                false
            }
            1 => handle_add(&mut config)?,
            2 => handle_edit(&mut config)?,
            3 => handle_remove(&mut config)?,
            4 => handle_reorder(&mut config)?,
            5 => true,
            6 => {
                save(path, &config)?;
                if handle_publish(path)? {
                    success("Configuration updated and committed successfully!");
                    println!("Your site will update after it is rebuilt.");
                }
                false
            }
            _ => {
                println!("\nExiting. Goodbye!");
                break;
            }
        };
        if changed {
            save(path, &config)?;
        }
    }
    Ok(())
}

/// Print the numbered list of links with URL and icon.
pub fn print_links(config: &LinksConfig) {
    if config.is_empty() {
        println!("No links currently configured.");
        return;
    }
    heading("CURRENT LINKS");
    for (i, link) in config.links.iter().enumerate() {
        println!("{:2}. {}", i + 1, link.name.as_str().bold());
        println!("    URL: {}", link.url);
        println!("    Icon: {}", link.icon_or_default());
        println!();
    }
}

fn handle_add(config: &mut LinksConfig) -> Result<bool> {
    heading("ADD NEW LINK");
    let name = text("Link name", None)?;
    let url = text("URL (http:// or https:// for web, filename for local)", None)?;

    println!("\nCommon Font Awesome icons:");
    println!("  - Web: fab fa-chrome, fab fa-firefox");
    println!("  - Social: fab fa-twitter, fab fa-linkedin, fab fa-facebook");
    println!("  - Files: fas fa-file-code, fas fa-file-pdf");
    println!("  - General: fas fa-link, fas fa-globe");
    println!("  See all: https://fontawesome.com/icons");
    let icon = text("Font Awesome icon class (e.g. 'fas fa-globe')", None)?;

    Ok(report(
        config
            .add(&name, &url, &icon)
            .map(|link| format!("Added '{}' to configuration.", link.name)),
    ))
}

fn handle_edit(config: &mut LinksConfig) -> Result<bool> {
    let Some(index) = pick(config, "edit")? else {
        return Ok(false);
    };
    let link = &config.links[index];
    println!("\nEditing '{}' (leave blank to keep):", link.name);
    let update = LinkUpdate {
        name: text("New name", Some(link.name.as_str()))?,
        url: text("New URL", Some(link.url.as_str()))?,
        icon: text("New icon", Some(link.icon_or_default()))?,
    };
    Ok(report(
        config
            .edit(index, &update)
            .map(|link| format!("Updated '{}'.", link.name)),
    ))
}

fn handle_remove(config: &mut LinksConfig) -> Result<bool> {
    let Some(index) = pick(config, "remove")? else {
        return Ok(false);
    };
    Ok(report(
        config
            .remove(index)
            .map(|link| format!("Removed '{}' from configuration.", link.name)),
    ))
}

fn handle_reorder(config: &mut LinksConfig) -> Result<bool> {
    if config.is_empty() {
        println!("{}", nothing_to("reorder").red());
        return Ok(false);
    }
    print_links(config);
    println!("REORDER LINKS");
    println!("Enter the current numbers in the new order, separated by commas.");
    let example: Vec<String> = (1..=config.len()).rev().map(|n| n.to_string()).collect();
    println!("Example: {} for {} links", example.join(","), config.len());

    let input = text("New order", None)?;
    Ok(report(
        parse_order(&input, config.len())
            .and_then(|order| config.reorder(&order))
            .map(|()| "Links reordered successfully.".to_string()),
    ))
}

/// Check the repository, ask for a commit message and push the links
/// file. Git failures are shown to the user and yield `false`.
fn handle_publish(path: &Path) -> Result<bool> {
    heading("GIT OPERATIONS");
    let file = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let workdir = file.parent().unwrap_or_else(|| Path::new("."));
    let git = GitPublisher::new(workdir);

    if let Err(e) = git.check_repository() {
        failure(&e);
        return Ok(false);
    }

    let mut message = text("Commit message", None)?;
    if message.trim().is_empty() {
        message = default_commit_message(Local::now().naive_local());
    }
    debug!(%message, "publishing");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Adding, committing and pushing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = git.publish(&file, message.trim());
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            success("Successfully committed and pushed changes!");
            Ok(true)
        }
        Err(e) => {
            failure(&e);
            Ok(false)
        }
    }
}

/// Let the user choose a link by name. `None` when the list is empty or
/// the user cancels with Esc.
fn pick(config: &LinksConfig, action: &str) -> Result<Option<usize>> {
    if config.is_empty() {
        println!("{}", nothing_to(action).red());
        return Ok(None);
    }
    let choice = Select::new()
        .with_prompt(format!("Select the link to {action} (Esc to cancel)"))
        .items(&config.links)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

/// Message shown when an action needs at least one link.
fn nothing_to(action: &str) -> String {
    format!("No links to {action}.")
}

fn text(prompt: &str, current: Option<&str>) -> Result<String> {
    let prompt = match current {
        Some(current) => format!("{prompt} [{current}]"),
        None => prompt.to_string(),
    };
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn save(path: &Path, config: &LinksConfig) -> Result<()> {
    store::save(path, config)?;
    success(&format!("Configuration saved to {}", path.display()));
    Ok(())
}

fn report(result: Result<String, LinkError>) -> bool {
    match result {
        Ok(msg) => {
            success(&msg);
            true
        }
        Err(e) => {
            failure(&e);
            false
        }
    }
}

fn heading(title: &str) {
    println!("\n{RULE}");
    println!("{}", title.bold());
    println!("{RULE}");
}

fn success(msg: &str) {
    println!("{}", msg.green());
}

fn failure(err: &dyn std::error::Error) {
    println!("{}", err.to_string().red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_messages_name_the_action() {
        assert_eq!(nothing_to("reorder"), "No links to reorder.");
        assert_eq!(nothing_to("edit"), "No links to edit.");
        assert_eq!(nothing_to("remove"), "No links to remove.");
    }
}
