//! Accordion: a stack of items whose content sections expand and collapse.
//!
//! The root owns a [`Selection`]. In single mode opening one item closes the
//! others and opening the open item closes it; in multiple mode every item
//! toggles independently.

use std::sync::Arc;

use zenith_dom::{Edges, Element, Style};

use super::{HasScope, NeedsScope, data, flag, mark, placeholder};
use crate::error::ConfigError;
use crate::handlers::{HandlerRegistry, ON_ACTIVATE};
use crate::pairing::check_pairs;
use crate::scope::{Family, Scope, ScopeHandle};
use crate::selection::{Selection, SelectionMode};

/// Static metadata visible to every accordion descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionMeta {
    pub mode: SelectionMode,
}

pub type AccordionHandle = ScopeHandle<Selection, AccordionMeta>;

/// Accordion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionConfig {
    /// Exclusive ("single") or inclusive ("multiple") expansion.
    pub mode: SelectionMode,
    /// Items open at construction, in order.
    pub default_expanded: Vec<String>,
}

impl AccordionConfig {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            default_expanded: Vec::new(),
        }
    }

    /// One item open at a time.
    pub fn single() -> Self {
        Self::new(SelectionMode::Exclusive)
    }

    /// Any number of items open.
    pub fn multiple() -> Self {
        Self::new(SelectionMode::Inclusive)
    }

    pub fn default_expanded<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.default_expanded = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Selection::new(self.mode, self.default_expanded.iter().cloned()).map(|_| ())
    }
}

/// Accordion root.
#[derive(Debug)]
pub struct Accordion {
    scope: Scope<Selection, AccordionMeta>,
}

impl Accordion {
    pub fn new(config: AccordionConfig) -> Result<Self, ConfigError> {
        let selection = Selection::new(config.mode, config.default_expanded)?;
        let meta = AccordionMeta { mode: config.mode };
        Ok(Self {
            scope: Scope::bind(Family::Accordion, selection, meta),
        })
    }

    pub fn handle(&self) -> AccordionHandle {
        self.scope.handle()
    }

    pub fn scope(&self) -> &Scope<Selection, AccordionMeta> {
        &self.scope
    }

    pub fn mode(&self) -> SelectionMode {
        self.scope.metadata().mode
    }

    /// Open items, in order.
    pub fn expanded(&self) -> Vec<String> {
        self.scope.with(|selection| selection.members().to_vec())
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.scope.with(|selection| selection.is_selected(id))
    }

    /// Toggle an item as if its trigger had been activated.
    pub fn toggle(&self, id: &str) {
        log::debug!("Accordion {}: toggle '{}'", self.scope.id(), id);
        self.scope.update(|selection| {
            selection.toggle(id);
            true
        });
    }

    /// Wrap built items into the accordion container.
    ///
    /// Unmatched triggers and contents are logged as warnings.
    pub fn element(&self, items: impl IntoIterator<Item = Element>) -> Element {
        let handle = self.handle();
        let root = Element::col()
            .id(handle.element_id("root", "accordion"))
            .data(data::SCOPE, self.scope.id().to_string())
            .children(items);
        check_pairs(&root, self.scope.id(), Family::Accordion);
        root
    }
}

/// One accordion section: a trigger plus its collapsible content.
pub struct AccordionItem<S = NeedsScope> {
    scope: S,
    id: String,
    disabled: bool,
    label: String,
    children: Vec<Element>,
}

impl AccordionItem<NeedsScope> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            scope: NeedsScope,
            id: id.into(),
            disabled: false,
            label: String::new(),
            children: Vec::new(),
        }
    }

    pub fn scope(
        self,
        handle: &AccordionHandle,
    ) -> AccordionItem<HasScope<'_, Selection, AccordionMeta>> {
        AccordionItem {
            scope: HasScope(handle),
            id: self.id,
            disabled: self.disabled,
            label: self.label,
            children: self.children,
        }
    }
}

impl<S> AccordionItem<S> {
    /// A disabled item keeps its open/closed state but cannot be toggled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the trigger label.
    pub fn trigger(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a content child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add a text paragraph to the content.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Element::text(text))
    }
}

impl AccordionItem<HasScope<'_, Selection, AccordionMeta>> {
    pub fn build(self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let expanded = handle.is_selected(&self.id)?;

        let trigger = AccordionTrigger::new(self.id.as_str())
            .label(self.label)
            .disabled(self.disabled)
            .scope(handle)
            .build(registry)?;
        let content = AccordionContent::new(self.id.as_str())
            .children(self.children)
            .scope(handle)
            .build()?;

        Ok(Element::col()
            .id(handle.element_id(data::PART_ITEM, &self.id))
            .data(data::STATE, if expanded { "open" } else { "closed" })
            .child(trigger)
            .child(content))
    }
}

/// Button that toggles one accordion item.
pub struct AccordionTrigger<S = NeedsScope> {
    scope: S,
    id: String,
    label: String,
    disabled: bool,
    style: Option<Style>,
}

impl AccordionTrigger<NeedsScope> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            scope: NeedsScope,
            id: id.into(),
            label: String::new(),
            disabled: false,
            style: None,
        }
    }

    pub fn scope(
        self,
        handle: &AccordionHandle,
    ) -> AccordionTrigger<HasScope<'_, Selection, AccordionMeta>> {
        AccordionTrigger {
            scope: HasScope(handle),
            id: self.id,
            label: self.label,
            disabled: self.disabled,
            style: self.style,
        }
    }
}

impl<S> AccordionTrigger<S> {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl AccordionTrigger<HasScope<'_, Selection, AccordionMeta>> {
    pub fn build(self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let expanded = handle.is_selected(&self.id)?;
        let chevron = if expanded { "▾" } else { "▸" };

        let trigger = mark(Element::row(), handle, data::PART_TRIGGER, &self.id)
            .gap(1)
            .padding(Edges::symmetric(0, 1))
            .focusable(true)
            .clickable(true)
            .disabled(self.disabled)
            .data(data::EXPANDED, flag(expanded))
            .style(self.style.unwrap_or_else(|| Style::new().bold()))
            .style_focused(Style::new().reverse())
            .child(Element::text(chevron))
            .child(Element::text(self.label));

        if !self.disabled {
            let target = handle.clone();
            let id = self.id.clone();
            registry.register(
                &trigger.id,
                ON_ACTIVATE,
                Arc::new(move || {
                    if let Err(e) = target.toggle(&id) {
                        log::warn!("Accordion trigger '{}': {}", id, e);
                    }
                }),
            );
        }

        Ok(trigger)
    }
}

/// Content shown while its item is open.
pub struct AccordionContent<S = NeedsScope> {
    scope: S,
    id: String,
    children: Vec<Element>,
}

impl AccordionContent<NeedsScope> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            scope: NeedsScope,
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn scope(
        self,
        handle: &AccordionHandle,
    ) -> AccordionContent<HasScope<'_, Selection, AccordionMeta>> {
        AccordionContent {
            scope: HasScope(handle),
            id: self.id,
            children: self.children,
        }
    }
}

impl<S> AccordionContent<S> {
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children.extend(children);
        self
    }
}

impl AccordionContent<HasScope<'_, Selection, AccordionMeta>> {
    /// Build the content, or a zero-size placeholder while closed.
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        if !handle.is_selected(&self.id)? {
            return Ok(placeholder(handle, &self.id));
        }

        Ok(mark(Element::col(), handle, data::PART_PANEL, &self.id)
            .padding(Edges::new(0, 1, 1, 4))
            .data(data::SELECTED, flag(true))
            .children(self.children))
    }
}
