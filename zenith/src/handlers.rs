//! Widget event handlers keyed by element ID.
//!
//! Widgets register a closure for each interactive element while building
//! their tree. The host maps input to an element ID and calls
//! [`HandlerRegistry::dispatch`]. The registry is rebuilt with the tree, so
//! handlers from a previous render never linger.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A handler closure. Captures whatever handle it needs at build time.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Button click, Enter/Space on the focused element.
pub const ON_ACTIVATE: &str = "on_activate";
/// Removal request (removable tags).
pub const ON_REMOVE: &str = "on_remove";

/// Registry for widget event handlers.
///
/// Maps (element_id, event) to handler closures.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Run the handler for an element event. Returns false if none is registered.
    ///
    /// The registry lock is released before the handler runs.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                log::trace!("Dispatching {} on {}", event, element_id);
                handler();
                true
            }
            None => {
                log::trace!("No {} handler on {}", event, element_id);
                false
            }
        }
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
