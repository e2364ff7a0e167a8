//! Open command: dispatch an id and render the tool or the fallback

use std::sync::Arc;

use colored::Colorize;

use hub_tools::{DispatchResult, ToolDispatcher, ToolRegistry, catalog};

use crate::error::{CliError, Result};
use crate::toast::TerminalToast;

/// Run the open command
///
/// Resolves `id` through the dispatcher. A bound tool runs against the
/// input; an unbound id renders the "not available yet" surface plus the
/// advisory toast and still exits zero, because a missing tool is an
/// expected condition rather than a failure.
pub fn run_open(id: &str, input: &str) -> Result<()> {
    let registry = ToolRegistry::with_builtins()?;
    let mut dispatcher = ToolDispatcher::with_notifier(registry, Arc::new(TerminalToast));

    // Each invocation is one render cycle
    dispatcher.begin_cycle();

    match dispatcher.dispatch(id) {
        DispatchResult::Bound(tool) => {
            let output = tool.run(input).map_err(|e| match e {
                hub_tools::Error::InvalidInput(message) => CliError::user(format!(
                    "{}: {}",
                    tool.id(),
                    message
                )),
                other => CliError::from(other),
            })?;
            println!("{output}");
        }
        DispatchResult::Unimplemented => {
            let name = catalog::find(id).map(|info| info.name).unwrap_or(id);
            println!(
                "{} {} isn't available yet.",
                "!".yellow().bold(),
                name.cyan()
            );
            println!("Run {} to see what's ready today.", "toolhub list".cyan());
        }
    }

    Ok(())
}
