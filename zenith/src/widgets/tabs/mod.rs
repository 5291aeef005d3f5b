//! Tabs: one active tab, its panel shown, the others absent.
//!
//! The root owns an exclusive [`Selection`] that always holds exactly one
//! tab. Activating a tab selects it; activating the active tab does nothing.
//! An optional `on_change` observer is subscribed to the scope, so it fires
//! once for every change of the active tab and never at construction.

mod panel;
mod tab;

pub use panel::{TabPanel, TabPanels};
pub use tab::{Tab, TabSize, TabVariant};

use std::sync::Arc;

use zenith_dom::{Edges, Element};

use super::{HasScope, NeedsScope, data};
use crate::error::ConfigError;
use crate::pairing::check_pairs;
use crate::scope::{Family, Scope, ScopeHandle};
use crate::selection::{Selection, SelectionMode};

/// Observer for the active tab.
pub type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Tab list layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Static metadata visible to every tabs descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsMeta {
    pub orientation: Orientation,
}

pub type TabsHandle = ScopeHandle<Selection, TabsMeta>;

/// Tabs configuration.
#[derive(Clone, Default)]
pub struct TabsConfig {
    /// Tab active at construction.
    pub default_tab: String,
    pub orientation: Orientation,
    /// Called with the new tab ID after every change of the active tab.
    pub on_change: Option<ChangeCallback>,
}

impl TabsConfig {
    pub fn new(default_tab: impl Into<String>) -> Self {
        Self {
            default_tab: default_tab.into(),
            ..Default::default()
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }

    pub fn on_change(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_tab.is_empty() {
            return Err(ConfigError::EmptyDefaultTab);
        }
        Ok(())
    }
}

impl std::fmt::Debug for TabsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabsConfig")
            .field("default_tab", &self.default_tab)
            .field("orientation", &self.orientation)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Tabs root.
#[derive(Debug)]
pub struct Tabs {
    scope: Scope<Selection, TabsMeta>,
}

impl Tabs {
    pub fn new(config: TabsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let selection = Selection::new(SelectionMode::Exclusive, [config.default_tab])?;
        let meta = TabsMeta {
            orientation: config.orientation,
        };
        let scope = Scope::bind(Family::Tabs, selection, meta);

        if let Some(on_change) = config.on_change {
            scope.subscribe(move |selection: &Selection| {
                if let Some(id) = selection.active() {
                    on_change(id);
                }
            });
        }

        Ok(Self { scope })
    }

    pub fn handle(&self) -> TabsHandle {
        self.scope.handle()
    }

    pub fn scope(&self) -> &Scope<Selection, TabsMeta> {
        &self.scope
    }

    pub fn orientation(&self) -> Orientation {
        self.scope.metadata().orientation
    }

    /// The active tab ID.
    pub fn selected(&self) -> String {
        self.scope
            .with(|selection| selection.active().map(str::to_string))
            .unwrap_or_default()
    }

    /// Activate a tab as if it had been clicked. Returns true if it changed.
    pub fn select(&self, id: &str) -> bool {
        let changed = self.scope.update(|selection| selection.select(id));
        if changed {
            log::debug!("Tabs {}: selected '{}'", self.scope.id(), id);
        }
        changed
    }

    /// Wrap a built tab list and panels into the tabs container.
    ///
    /// Tabs without a panel (and panels without a tab) are logged as warnings.
    pub fn element(&self, children: impl IntoIterator<Item = Element>) -> Element {
        let orientation = self.orientation();
        let container = match orientation {
            Orientation::Horizontal => Element::col(),
            Orientation::Vertical => Element::row(),
        };
        let root = container
            .id(self.handle().element_id("root", "tabs"))
            .data(data::SCOPE, self.scope.id().to_string())
            .data(data::ORIENTATION, orientation.as_str())
            .children(children);
        check_pairs(&root, self.scope.id(), Family::Tabs);
        root
    }
}

/// Container for the tab buttons.
pub struct TabList<S = NeedsScope> {
    scope: S,
    orientation: Option<Orientation>,
    size: TabSize,
    children: Vec<Element>,
}

impl TabList<NeedsScope> {
    pub fn new() -> Self {
        Self {
            scope: NeedsScope,
            orientation: None,
            size: TabSize::default(),
            children: Vec::new(),
        }
    }

    pub fn scope(self, handle: &TabsHandle) -> TabList<HasScope<'_, Selection, TabsMeta>> {
        TabList {
            scope: HasScope(handle),
            orientation: self.orientation,
            size: self.size,
            children: self.children,
        }
    }
}

impl Default for TabList<NeedsScope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabList<S> {
    /// Override the orientation inherited from the tabs root.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn size(mut self, size: TabSize) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, tab: Element) -> Self {
        self.children.push(tab);
        self
    }

    pub fn children(mut self, tabs: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(tabs);
        self
    }
}

impl TabList<HasScope<'_, Selection, TabsMeta>> {
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let orientation = match self.orientation {
            Some(orientation) => orientation,
            None => handle.with_metadata(|meta| meta.orientation)?,
        };

        let list = match orientation {
            Orientation::Horizontal => Element::row().gap(self.size.list_gap()),
            Orientation::Vertical => Element::col().padding(Edges::new(0, 1, 0, 0)),
        };
        Ok(list
            .id(handle.element_id("list", "tabs"))
            .data(data::ORIENTATION, orientation.as_str())
            .children(self.children))
    }
}
