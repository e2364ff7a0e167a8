//! Search command over the catalog

use colored::Colorize;

use hub_tools::catalog;

use crate::error::Result;

/// Run the search command
pub fn run_search(term: &str) -> Result<()> {
    let hits = catalog::search(term);

    if hits.is_empty() {
        println!("No tools match '{}'.", term);
        return Ok(());
    }

    println!(
        "{} {} match{} for '{}'",
        "=>".blue().bold(),
        hits.len(),
        if hits.len() == 1 { "" } else { "es" },
        term
    );
    println!();

    for info in hits {
        println!(
            "  {} {} - {}",
            info.name.bold(),
            format!("({})", info.id).cyan(),
            info.description
        );
    }

    Ok(())
}
