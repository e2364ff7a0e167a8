//! ToolHub CLI
//!
//! The command-line shell for the ToolHub tool directory.

mod cli;
mod commands;
mod config;
mod error;
mod toast;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, WishlistAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let shell_config = config::load()?;
    let state_path = config::resolve_state_path(cli.data_dir.as_ref(), &shell_config)?;

    match cli.command {
        Some(Commands::List { category, json }) => {
            commands::run_list(&state_path, category.as_deref(), json)
        }
        Some(Commands::Categories) => commands::run_categories(),
        Some(Commands::Search { term }) => commands::run_search(&term),
        Some(Commands::Open { id, input }) => commands::run_open(&id, &input.join(" ")),
        Some(Commands::Wishlist { action }) => match action {
            None | Some(WishlistAction::List { json: false }) => {
                commands::run_wishlist_list(&state_path, false)
            }
            Some(WishlistAction::List { json: true }) => {
                commands::run_wishlist_list(&state_path, true)
            }
            Some(WishlistAction::Toggle { id }) => {
                commands::run_wishlist_toggle(&state_path, &id)
            }
            Some(WishlistAction::Clear) => commands::run_wishlist_clear(&state_path),
        },
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "toolhub",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        None => {
            // No command provided - show help hint
            println!("{} ToolHub", "toolhub".green().bold());
            println!();
            println!("Run {} for available commands.", "toolhub --help".cyan());
            Ok(())
        }
    }
}
