//! Configuration errors and warnings for compound widgets.

use thiserror::Error;

use crate::scope::Family;

/// A compound widget was configured or composed incorrectly.
///
/// Every variant is raised synchronously, at construction or at the first
/// read through a stale handle. None of them are recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A descendant used a handle whose owning root widget no longer exists.
    #[error("{family} widget used outside of a bound {family} scope")]
    ScopeDetached {
        /// Widget family the handle belonged to.
        family: Family,
    },

    /// An exclusive selection was given more than one default member.
    #[error("exclusive selection accepts at most one default, got {count}")]
    TooManyDefaults {
        /// Number of defaults supplied.
        count: usize,
    },

    /// The same identifier appears twice in a default selection.
    #[error("duplicate default identifier '{0}'")]
    DuplicateDefault(String),

    /// Tabs were configured without a default tab.
    #[error("tabs require a non-empty default tab")]
    EmptyDefaultTab,

    /// Sidebar collapsed width exceeds its expanded width, or is zero.
    #[error("invalid sidebar widths: expanded {expanded}, collapsed {collapsed}")]
    InvalidSidebarWidth {
        /// Width when expanded.
        expanded: u16,
        /// Width when collapsed.
        collapsed: u16,
    },
}

/// Which half of a trigger/panel pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Trigger,
    Panel,
}

impl Part {
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Trigger => "trigger",
            Part::Panel => "panel",
        }
    }
}

/// A trigger with no matching panel, or a panel with no matching trigger.
///
/// Triggers and panels are linked only by sharing an identifier, so a typo
/// on either side leaves one of them inert. This is reported, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingWarning {
    pub family: Family,
    pub id: String,
    pub missing: Part,
}

impl std::fmt::Display for PairingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let present = match self.missing {
            Part::Trigger => Part::Panel,
            Part::Panel => Part::Trigger,
        };
        write!(
            f,
            "{} {} '{}' has no matching {}",
            self.family,
            present.as_str(),
            self.id,
            self.missing.as_str()
        )
    }
}
