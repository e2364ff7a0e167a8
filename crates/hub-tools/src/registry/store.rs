//! Tool registry storage

use std::collections::HashMap;
use std::sync::Arc;

use crate::builtins::builtin_tools;
use crate::error::{Error, Result};
use crate::tool::Tool;

/// Central registry binding tool identifiers to implementations.
///
/// Exactly one implementation may be bound to an identifier at a time;
/// registering a duplicate is an error rather than a silent override, since
/// an override would mask accidental collisions between independently
/// authored tools. Lookup is a total function: unknown ids resolve to `None`
/// so callers apply their own fallback policy.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    /// Ids in registration order, for stable listing surfaces.
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry populated with all built-in tools.
    ///
    /// This is the production path, run once at shell startup. A duplicate
    /// id in the built-in table is a programmer error and aborts
    /// initialization.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for tool in builtin_tools() {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Bind a tool to its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if the id is already bound.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let id = tool.id().to_string();
        if self.tools.contains_key(&id) {
            return Err(Error::duplicate_id(id));
        }
        self.order.push(id.clone());
        self.tools.insert(id, tool);
        Ok(())
    }

    /// Resolve an identifier to its bound implementation.
    ///
    /// Pure lookup with no side effects; unknown ids (including the empty
    /// string) return `None`.
    pub fn resolve(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(id).cloned()
    }

    /// Check if a tool is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::BUILTIN_COUNT;

    struct FakeTool {
        id: &'static str,
    }

    impl Tool for FakeTool {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            "Fake"
        }

        fn description(&self) -> &str {
            "fake tool"
        }

        fn run(&self, input: &str) -> Result<String> {
            Ok(input.to_string())
        }
    }

    fn fake(id: &'static str) -> Arc<dyn Tool> {
        Arc::new(FakeTool { id })
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.resolve("calculator").is_none());
    }

    #[test]
    fn register_and_resolve() {
        let mut registry = ToolRegistry::new();
        registry.register(fake("calculator")).unwrap();

        assert!(registry.contains("calculator"));
        let resolved = registry.resolve("calculator").unwrap();
        assert_eq!(resolved.id(), "calculator");
        assert!(!registry.contains("unknown"));
    }

    #[test]
    fn resolve_returns_exact_registration() {
        let mut registry = ToolRegistry::new();
        let tool = fake("calculator");
        registry.register(Arc::clone(&tool)).unwrap();

        let resolved = registry.resolve("calculator").unwrap();
        assert!(Arc::ptr_eq(&resolved, &tool));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(fake("calculator")).unwrap();

        let err = registry.register(fake("calculator")).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { ref id } if id == "calculator"));
        // The original binding survives
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ids_are_registration_ordered() {
        let mut registry = ToolRegistry::new();
        registry.register(fake("zulu")).unwrap();
        registry.register(fake("alpha")).unwrap();
        registry.register(fake("mike")).unwrap();

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn ids_iterator_is_restartable() {
        let mut registry = ToolRegistry::new();
        registry.register(fake("a")).unwrap();
        registry.register(fake("b")).unwrap();

        let first: Vec<_> = registry.ids().collect();
        let second: Vec<_> = registry.ids().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut registry = ToolRegistry::new();
        registry.register(fake("calculator")).unwrap();
        assert!(registry.resolve("Calculator").is_none());
    }

    #[test]
    fn with_builtins_binds_the_full_table() {
        let registry = ToolRegistry::with_builtins().unwrap();
        assert_eq!(registry.len(), BUILTIN_COUNT);

        // Spot check a few tools
        assert!(registry.contains("calculator"));
        assert!(registry.contains("json-formatter"));
        assert!(registry.contains("hash-generator"));
    }
}
