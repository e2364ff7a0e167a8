//! Tool dispatcher that resolves identifiers to implementations
//!
//! The dispatcher uses ToolRegistry as the single source of truth for tool
//! bindings and applies the fallback policy: an unknown identifier renders
//! the "not available yet" surface and emits one advisory notification,
//! debounced per render cycle.

use std::collections::HashSet;
use std::sync::Arc;

use crate::notify::{Notification, Notifier, NullNotifier};
use crate::registry::ToolRegistry;
use crate::tool::Tool;

/// Title of the fallback notification.
const FALLBACK_TITLE: &str = "Tool in development";

/// Body of the fallback notification.
const FALLBACK_DESCRIPTION: &str =
    "This tool is currently under development and will be available soon.";

/// Outcome of resolving a tool identifier.
///
/// A missing tool is an expected, recoverable condition, so it is modeled as
/// a result variant rather than an error: callers are forced to handle the
/// fallback path and always have a definite state to render.
#[derive(Clone)]
pub enum DispatchResult {
    /// The identifier is bound; render this implementation.
    Bound(Arc<dyn Tool>),
    /// The identifier is not bound; render the fallback surface.
    Unimplemented,
}

impl DispatchResult {
    pub fn is_bound(&self) -> bool {
        matches!(self, DispatchResult::Bound(_))
    }

    pub fn tool(&self) -> Option<&Arc<dyn Tool>> {
        match self {
            DispatchResult::Bound(tool) => Some(tool),
            DispatchResult::Unimplemented => None,
        }
    }
}

impl std::fmt::Debug for DispatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchResult::Bound(tool) => f.debug_tuple("Bound").field(&tool.id()).finish(),
            DispatchResult::Unimplemented => write!(f, "Unimplemented"),
        }
    }
}

/// Resolves identifiers through the registry and applies fallback policy.
///
/// Owns the registry (immutable after construction) plus the advisory
/// notifier and a per-cycle debounce set. Within one render cycle, repeated
/// dispatches of the same unknown id notify once; a fresh cycle (new
/// navigation) notifies again.
pub struct ToolDispatcher {
    registry: ToolRegistry,
    notifier: Arc<dyn Notifier>,
    /// Unknown ids already notified in the current render cycle.
    notified: HashSet<String>,
}

impl ToolDispatcher {
    /// Create a dispatcher with no notification delivery.
    pub fn new(registry: ToolRegistry) -> Self {
        Self::with_notifier(registry, Arc::new(NullNotifier))
    }

    /// Create a dispatcher that hands advisory notifications to `notifier`.
    pub fn with_notifier(registry: ToolRegistry, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            registry,
            notifier,
            notified: HashSet::new(),
        }
    }

    /// Resolve `id` to a bound implementation or the fallback.
    ///
    /// On fallback, an informational notification is emitted at most once
    /// per id per render cycle. The notification is advisory only: it never
    /// blocks the fallback surface and never escalates to an error.
    pub fn dispatch(&mut self, id: &str) -> DispatchResult {
        if let Some(tool) = self.registry.resolve(id) {
            return DispatchResult::Bound(tool);
        }

        tracing::debug!(tool = id, "no implementation bound, falling back");

        if self.notified.insert(id.to_string()) {
            self.notifier
                .notify(&Notification::info(FALLBACK_TITLE, FALLBACK_DESCRIPTION));
        }

        DispatchResult::Unimplemented
    }

    /// Start a new render cycle.
    ///
    /// Clears the debounce set so a fresh navigation to a missing tool
    /// notifies again. Call once per navigation, before dispatching.
    pub fn begin_cycle(&mut self) {
        self.notified.clear();
    }

    /// Get access to the underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}
