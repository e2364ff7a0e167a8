//! The Tool trait — the seam between the dispatch core and tool leaves

use crate::error::Result;

/// A single utility tool behind a stable string identifier.
///
/// Implementations are stateless with respect to the registry: the registry
/// owns the id-to-implementation binding and nothing else. `run` takes the
/// raw input the shell collected and returns rendered output; how a tool
/// interprets its input is entirely its own concern.
pub trait Tool: Send + Sync {
    /// Stable identifier, unique across the registry (e.g. "calculator").
    ///
    /// Case-sensitive, never reused for a different tool once published.
    fn id(&self) -> &str;

    /// Display name (e.g. "Calculator").
    fn name(&self) -> &str;

    /// One-line description for listing surfaces.
    fn description(&self) -> &str;

    /// Execute the tool against free-form input.
    fn run(&self, input: &str) -> Result<String>;
}
