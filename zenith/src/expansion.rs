//! Binary expanded/collapsed state.
//!
//! Behaves like a selection over a single fixed identifier: toggling flips
//! membership, there is nothing to order and no identifier to pass.

use crate::error::ConfigError;
use crate::scope::ScopeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    expanded: bool,
}

impl Expansion {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Negate the expanded flag.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Set the flag explicitly. Returns true if it changed.
    pub fn set(&mut self, expanded: bool) -> bool {
        let changed = self.expanded != expanded;
        self.expanded = expanded;
        changed
    }
}

impl Default for Expansion {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<M> ScopeHandle<Expansion, M> {
    pub fn is_expanded(&self) -> Result<bool, ConfigError> {
        self.with(Expansion::is_expanded)
    }

    /// Flip the bound expansion state.
    pub fn toggle(&self) -> Result<(), ConfigError> {
        self.update(|expansion| {
            expansion.toggle();
            true
        })?;
        log::debug!("{} scope {}: toggled expansion", self.family(), self.id());
        Ok(())
    }
}
