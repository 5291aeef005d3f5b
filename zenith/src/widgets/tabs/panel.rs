use zenith_dom::{Edges, Element};

use super::{Orientation, TabsHandle, TabsMeta};
use crate::error::ConfigError;
use crate::selection::Selection;
use crate::widgets::{HasScope, NeedsScope, data, flag, mark, placeholder};

/// Container for the tab panels.
pub struct TabPanels<S = NeedsScope> {
    scope: S,
    children: Vec<Element>,
}

impl TabPanels<NeedsScope> {
    pub fn new() -> Self {
        Self {
            scope: NeedsScope,
            children: Vec::new(),
        }
    }

    pub fn scope(self, handle: &TabsHandle) -> TabPanels<HasScope<'_, Selection, TabsMeta>> {
        TabPanels {
            scope: HasScope(handle),
            children: self.children,
        }
    }
}

impl Default for TabPanels<NeedsScope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabPanels<S> {
    pub fn child(mut self, panel: Element) -> Self {
        self.children.push(panel);
        self
    }

    pub fn children(mut self, panels: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(panels);
        self
    }
}

impl TabPanels<HasScope<'_, Selection, TabsMeta>> {
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let padding = match handle.with_metadata(|meta| meta.orientation)? {
            Orientation::Horizontal => Edges::new(1, 0, 0, 0),
            Orientation::Vertical => Edges::left(2),
        };
        Ok(Element::col()
            .id(handle.element_id("panels", "tabs"))
            .padding(padding)
            .children(self.children))
    }
}

/// Content of one tab. Present only while its tab is active.
pub struct TabPanel<S = NeedsScope> {
    scope: S,
    id: String,
    children: Vec<Element>,
}

impl TabPanel<NeedsScope> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            scope: NeedsScope,
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn scope(self, handle: &TabsHandle) -> TabPanel<HasScope<'_, Selection, TabsMeta>> {
        TabPanel {
            scope: HasScope(handle),
            id: self.id,
            children: self.children,
        }
    }
}

impl<S> TabPanel<S> {
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Element::text(text))
    }
}

impl TabPanel<HasScope<'_, Selection, TabsMeta>> {
    /// Build the panel, or a zero-size placeholder while its tab is inactive.
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        if !handle.is_selected(&self.id)? {
            return Ok(placeholder(handle, &self.id));
        }

        Ok(mark(Element::col(), handle, data::PART_PANEL, &self.id)
            .data(data::SELECTED, flag(true))
            .children(self.children))
    }
}
