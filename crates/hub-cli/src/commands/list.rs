//! Directory listing commands

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use hub_store::FileStore;
use hub_tools::{Category, ToolRegistry, catalog};
use hub_wishlist::Wishlist;

use crate::error::Result;

/// Run the list command
///
/// Shows the tool directory with category, badges, and wishlist state.
pub fn run_list(state_path: &Path, category: Option<&str>, json: bool) -> Result<()> {
    let registry = ToolRegistry::with_builtins()?;
    let wishlist = Wishlist::load(Box::new(FileStore::open(state_path)));

    let entries: Vec<_> = match category {
        Some(raw) => {
            let category: Category = raw.parse()?;
            catalog::by_category(category)
        }
        None => catalog::catalog().iter().collect(),
    };

    if json {
        let payload: Vec<_> = entries
            .iter()
            .map(|info| {
                json!({
                    "id": info.id,
                    "name": info.name,
                    "description": info.description,
                    "category": info.category.as_str(),
                    "featured": info.featured,
                    "new": info.is_new,
                    "bound": registry.contains(info.id),
                    "wishlisted": wishlist.is_member(info.id),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "{} ToolHub directory ({} tools)",
        "=>".blue().bold(),
        entries.len()
    );
    println!();

    for info in entries {
        let heart = if wishlist.is_member(info.id) {
            "♥".red().to_string()
        } else {
            " ".to_string()
        };

        let mut badges = String::new();
        if info.is_new {
            badges.push_str(&format!(" {}", "[new]".green()));
        }
        if info.featured {
            badges.push_str(&format!(" {}", "[featured]".yellow()));
        }
        if !registry.contains(info.id) {
            badges.push_str(&format!(" {}", "[coming soon]".dimmed()));
        }

        println!(
            "  {} {} {} - {}{}",
            heart,
            info.name.bold(),
            format!("({})", info.id).cyan(),
            info.description,
            badges
        );
    }

    Ok(())
}

/// Run the categories command
pub fn run_categories() -> Result<()> {
    println!("{} Categories", "=>".blue().bold());
    println!();

    for category in Category::all() {
        let count = catalog::by_category(*category).len();
        println!("  {} ({} tools)", category.as_str().bold(), count);
    }

    Ok(())
}
