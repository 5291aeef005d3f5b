//! Exclusive / inclusive selection over opaque string identifiers.

use crate::error::ConfigError;
use crate::scope::ScopeHandle;

/// How many identifiers may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one member (radio-button style).
    #[default]
    Exclusive,
    /// Any subset (checkbox style).
    Inclusive,
}

/// Ordered set of selected identifiers.
///
/// The mode is fixed at construction. In exclusive mode there is never more
/// than one member. In inclusive mode members keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    mode: SelectionMode,
    members: Vec<String>,
}

impl Selection {
    /// Create a selection holding exactly `defaults`.
    ///
    /// Rejects more than one default in exclusive mode and repeated
    /// identifiers in either mode, rather than silently dropping any.
    pub fn new<I, T>(mode: SelectionMode, defaults: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut members: Vec<String> = Vec::new();
        for id in defaults {
            let id = id.into();
            if members.contains(&id) {
                return Err(ConfigError::DuplicateDefault(id));
            }
            members.push(id);
        }

        if mode == SelectionMode::Exclusive && members.len() > 1 {
            return Err(ConfigError::TooManyDefaults {
                count: members.len(),
            });
        }

        Ok(Self { mode, members })
    }

    /// Empty exclusive selection.
    pub fn exclusive() -> Self {
        Self {
            mode: SelectionMode::Exclusive,
            members: Vec::new(),
        }
    }

    /// Empty inclusive selection.
    pub fn inclusive() -> Self {
        Self {
            mode: SelectionMode::Inclusive,
            members: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected identifiers in order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if an identifier is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.members.iter().any(|member| member == id)
    }

    /// The first member; in exclusive mode, the only one.
    pub fn active(&self) -> Option<&str> {
        self.members.first().map(String::as_str)
    }

    /// Flip membership of `id`.
    ///
    /// Exclusive: a selected id clears the selection, any other id replaces
    /// it. Inclusive: a selected id is removed (the rest keep their order),
    /// any other id is appended. Always changes the selection.
    pub fn toggle(&mut self, id: &str) {
        let selected = self.is_selected(id);
        match self.mode {
            SelectionMode::Exclusive => {
                self.members.clear();
                if !selected {
                    self.members.push(id.to_string());
                }
            }
            SelectionMode::Inclusive => {
                if selected {
                    self.members.retain(|member| member != id);
                } else {
                    self.members.push(id.to_string());
                }
            }
        }
    }

    /// Pure form of [`toggle`](Self::toggle).
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Make `id` selected. Returns true if the selection changed.
    ///
    /// Exclusive: replaces any other member. Inclusive: appends if absent.
    /// Selecting an already selected id is a no-op.
    pub fn select(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            return false;
        }
        if self.mode == SelectionMode::Exclusive {
            self.members.clear();
        }
        self.members.push(id.to_string());
        true
    }
}

impl<M> ScopeHandle<Selection, M> {
    /// Check whether `id` is selected in the bound selection.
    pub fn is_selected(&self, id: &str) -> Result<bool, ConfigError> {
        self.with(|selection| selection.is_selected(id))
    }

    /// Toggle `id` in the bound selection.
    pub fn toggle(&self, id: &str) -> Result<(), ConfigError> {
        log::debug!("{} scope {}: toggle '{}'", self.family(), self.id(), id);
        self.update(|selection| {
            selection.toggle(id);
            true
        })?;
        Ok(())
    }

    /// Select `id` in the bound selection. Returns true if it changed.
    pub fn select(&self, id: &str) -> Result<bool, ConfigError> {
        let changed = self.update(|selection| selection.select(id))?;
        if changed {
            log::debug!("{} scope {}: selected '{}'", self.family(), self.id(), id);
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_empty_exclusive_selects() {
        let mut selection = Selection::exclusive();
        selection.toggle("a");
        assert_eq!(selection.members(), ["a"]);
    }

    #[test]
    fn test_select_inclusive_appends_once() {
        let mut selection = Selection::inclusive();
        assert!(selection.select("a"));
        assert!(selection.select("b"));
        assert!(!selection.select("a"));
        assert_eq!(selection.members(), ["a", "b"]);
    }
}
