//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// ToolHub - A directory of small utility tools behind one shell
#[derive(Parser, Debug)]
#[command(name = "toolhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the directory holding ToolHub state
    #[arg(long, global = true, env = "TOOLHUB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the tool directory
    ///
    /// Shows every tool with its category, badges, and wishlist state.
    ///
    /// Examples:
    ///   toolhub list                     # The whole directory
    ///   toolhub list -c calculators      # One category
    ///   toolhub list --json              # For scripting
    List {
        /// Only show tools in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the tool categories
    Categories,

    /// Search tools by name or description
    Search {
        /// Search term
        term: String,
    },

    /// Open a tool by id
    ///
    /// Runs the tool against the given input. Unknown ids render a
    /// "not available yet" notice instead of failing.
    ///
    /// Examples:
    ///   toolhub open calculator "2 + 2 * 3"
    ///   toolhub open text-case-converter upper hello world
    ///   toolhub open json-formatter '{"a":1}'
    Open {
        /// Tool id (see 'toolhub list')
        id: String,

        /// Input handed to the tool, joined with spaces
        #[arg(trailing_var_arg = true)]
        input: Vec<String>,
    },

    /// Manage your saved tools
    Wishlist {
        #[command(subcommand)]
        action: Option<WishlistAction>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Wishlist subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WishlistAction {
    /// Show saved tools (default)
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Save a tool, or remove it if already saved
    Toggle {
        /// Tool id (see 'toolhub list')
        id: String,
    },

    /// Remove all saved tools
    Clear,
}
