//! Tool registry and dispatch engine for ToolHub
//!
//! This crate binds stable string identifiers to tool implementations and
//! resolves them for the shell:
//!
//! 1. **Registry** - the static id-to-implementation mapping, populated once
//!    at startup from the built-in table. Duplicate registration is a
//!    fail-fast error.
//!
//! 2. **Dispatcher** - resolves an identifier through the registry and
//!    applies fallback policy: unknown ids render a "not available yet"
//!    surface and emit one advisory notification per render cycle.
//!
//! 3. **Catalog** - display metadata for every tool the directory lists,
//!    including identifiers not yet bound to an implementation.
//!
//! Tool implementations themselves are independent leaves under
//! [`builtins`]; the core never depends on any particular one.

pub mod builtins;
pub mod catalog;
pub mod dispatcher;
pub mod error;
pub mod notify;
pub mod registry;
pub mod tool;

pub use builtins::{BUILTIN_COUNT, builtin_tools};
pub use catalog::{Category, ToolInfo};
pub use dispatcher::{DispatchResult, ToolDispatcher};
pub use error::{Error, Result};
pub use notify::{Notification, Notifier, NullNotifier, Severity};
pub use registry::ToolRegistry;
pub use tool::Tool;
