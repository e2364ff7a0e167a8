//! Wishlist management commands

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use hub_store::FileStore;
use hub_tools::catalog;
use hub_wishlist::Wishlist;

use crate::error::Result;

fn open_wishlist(state_path: &Path) -> Wishlist {
    Wishlist::load(Box::new(FileStore::open(state_path)))
}

/// Run the wishlist list command
///
/// The count line doubles as the header badge.
pub fn run_wishlist_list(state_path: &Path, json: bool) -> Result<()> {
    let wishlist = open_wishlist(state_path);

    if json {
        let payload: Vec<_> = wishlist
            .entries()
            .iter()
            .map(|entry| {
                json!({
                    "id": entry.id,
                    "name": entry.name,
                    "added_at": entry.added_at.to_rfc3339(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if wishlist.count() == 0 {
        println!("Your wishlist is empty.");
        println!(
            "Save a tool with {}.",
            "toolhub wishlist toggle <id>".cyan()
        );
        return Ok(());
    }

    println!(
        "{} Wishlist ({} saved)",
        "=>".blue().bold(),
        wishlist.count()
    );
    println!();

    for entry in wishlist.entries() {
        println!(
            "  {} {} {} - saved {}",
            "♥".red(),
            entry.name.bold(),
            format!("({})", entry.id).cyan(),
            entry.added_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

/// Run the wishlist toggle command
pub fn run_wishlist_toggle(state_path: &Path, id: &str) -> Result<()> {
    let info = catalog::find(id);
    if info.is_none() {
        eprintln!(
            "{} '{}' is not in the directory. Saving it anyway.",
            "warning:".yellow().bold(),
            id
        );
    }
    let name = info.map(|i| i.name.to_string()).unwrap_or_else(|| id.to_string());

    let mut wishlist = open_wishlist(state_path);
    let saved = wishlist.toggle(id, &name);

    if saved {
        println!("{} Saved {} to your wishlist.", "♥".red(), name.cyan());
    } else {
        println!("Removed {} from your wishlist.", name.cyan());
    }
    println!("{} tool(s) saved.", wishlist.count());

    Ok(())
}

/// Run the wishlist clear command
pub fn run_wishlist_clear(state_path: &Path) -> Result<()> {
    let mut wishlist = open_wishlist(state_path);
    let count = wishlist.count();
    wishlist.clear();

    println!("{} Cleared {} saved tool(s).", "OK".green().bold(), count);
    Ok(())
}
