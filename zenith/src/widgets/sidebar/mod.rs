//! Sidebar: a navigation column that collapses to an icon rail.
//!
//! The root owns an [`Expansion`]. The footer button flips it; headers,
//! groups and items read it to decide whether labels, badges and titles are
//! shown. Item `active` flags are supplied by the caller and are unrelated
//! to the expansion state.

mod item;

pub use item::{Badge, SidebarItem};

use std::sync::Arc;

use zenith_dom::{Color, Edges, Element, Style, TextAlign};

use super::{HasScope, NeedsScope, data, flag, mark};
use crate::error::ConfigError;
use crate::expansion::Expansion;
use crate::handlers::{HandlerRegistry, ON_ACTIVATE};
use crate::scope::{Family, Scope, ScopeHandle};

/// Which edge of the page the sidebar sits on. Affects layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

/// Static metadata visible to every sidebar descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarMeta {
    pub position: Position,
    pub expanded_width: u16,
    pub collapsed_width: u16,
}

impl SidebarMeta {
    /// Column width for the given expansion state.
    pub fn width(&self, expanded: bool) -> u16 {
        if expanded {
            self.expanded_width
        } else {
            self.collapsed_width
        }
    }
}

pub type SidebarHandle = ScopeHandle<Expansion, SidebarMeta>;

/// Sidebar configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarConfig {
    pub default_expanded: bool,
    pub position: Position,
    /// Width in cells while expanded.
    pub expanded_width: u16,
    /// Width in cells while collapsed to icons.
    pub collapsed_width: u16,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_expanded: true,
            position: Position::Left,
            expanded_width: 26,
            collapsed_width: 5,
        }
    }
}

impl SidebarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn widths(mut self, expanded: u16, collapsed: u16) -> Self {
        self.expanded_width = expanded;
        self.collapsed_width = collapsed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collapsed_width == 0 || self.collapsed_width > self.expanded_width {
            return Err(ConfigError::InvalidSidebarWidth {
                expanded: self.expanded_width,
                collapsed: self.collapsed_width,
            });
        }
        Ok(())
    }
}

/// Sidebar root.
#[derive(Debug)]
pub struct Sidebar {
    scope: Scope<Expansion, SidebarMeta>,
}

impl Sidebar {
    pub fn new(config: SidebarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let meta = SidebarMeta {
            position: config.position,
            expanded_width: config.expanded_width,
            collapsed_width: config.collapsed_width,
        };
        Ok(Self {
            scope: Scope::bind(
                Family::Sidebar,
                Expansion::new(config.default_expanded),
                meta,
            ),
        })
    }

    pub fn handle(&self) -> SidebarHandle {
        self.scope.handle()
    }

    pub fn scope(&self) -> &Scope<Expansion, SidebarMeta> {
        &self.scope
    }

    pub fn position(&self) -> Position {
        self.scope.metadata().position
    }

    pub fn is_expanded(&self) -> bool {
        self.scope.with(Expansion::is_expanded)
    }

    /// Current column width.
    pub fn width(&self) -> u16 {
        self.scope.metadata().width(self.is_expanded())
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&self) {
        self.scope.update(|expansion| {
            expansion.toggle();
            true
        });
        log::debug!(
            "Sidebar {}: expanded = {}",
            self.scope.id(),
            self.is_expanded()
        );
    }

    /// Wrap header, content and footer into the sidebar column.
    pub fn element(&self, children: impl IntoIterator<Item = Element>) -> Element {
        let expanded = self.is_expanded();
        Element::col()
            .id(self.handle().element_id("root", "sidebar"))
            .width(self.width())
            .data(data::SCOPE, self.scope.id().to_string())
            .data(data::EXPANDED, flag(expanded))
            .data(data::POSITION, self.position().as_str())
            .children(children)
    }

    /// Place the sidebar next to `main` on its configured side.
    ///
    /// `total_width` is the width available to both; `main` gets what the
    /// sidebar leaves over.
    pub fn place(&self, sidebar: Element, main: Element, total_width: u16) -> Element {
        let main_width = total_width.saturating_sub(self.width().saturating_add(1));
        let main = main.width(main_width);
        let (first, second) = match self.position() {
            Position::Left => (sidebar, main),
            Position::Right => (main, sidebar),
        };
        Element::row().gap(1).child(first).child(second)
    }
}

fn rule(width: u16) -> Element {
    Element::text("─".repeat(usize::from(width))).style(Style::new().foreground(Color::DarkGrey))
}

/// Brand row at the top of the sidebar.
pub struct SidebarHeader<S = NeedsScope> {
    scope: S,
    title: String,
    short_title: String,
    children: Vec<Element>,
}

impl SidebarHeader<NeedsScope> {
    pub fn new() -> Self {
        Self {
            scope: NeedsScope,
            title: "Zenith UI".into(),
            short_title: "Z".into(),
            children: Vec::new(),
        }
    }

    pub fn scope(
        self,
        handle: &SidebarHandle,
    ) -> SidebarHeader<HasScope<'_, Expansion, SidebarMeta>> {
        SidebarHeader {
            scope: HasScope(handle),
            title: self.title,
            short_title: self.short_title,
            children: self.children,
        }
    }
}

impl Default for SidebarHeader<NeedsScope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SidebarHeader<S> {
    /// Brand text when expanded and when collapsed.
    pub fn title(mut self, title: impl Into<String>, short_title: impl Into<String>) -> Self {
        self.title = title.into();
        self.short_title = short_title.into();
        self
    }

    /// Replace the brand text with custom content.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

impl SidebarHeader<HasScope<'_, Expansion, SidebarMeta>> {
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let expanded = handle.is_expanded()?;
        let width = handle.with_metadata(|meta| meta.width(expanded))?;

        let brand = if !self.children.is_empty() {
            Element::row().gap(1).children(self.children)
        } else if expanded {
            Element::text(self.title)
                .padding(Edges::symmetric(0, 1))
                .style(Style::new().bold())
        } else {
            Element::text(self.short_title)
                .width(width)
                .text_align(TextAlign::Center)
                .style(Style::new().bold())
        };

        Ok(Element::col()
            .id(handle.element_id("header", "sidebar"))
            .child(brand)
            .child(rule(width)))
    }
}

/// Scrolling body of the sidebar.
#[derive(Default)]
pub struct SidebarContent {
    children: Vec<Element>,
}

impl SidebarContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn build(self) -> Element {
        Element::col()
            .padding(Edges::new(1, 0, 1, 0))
            .children(self.children)
    }
}

/// Footer with the collapse/expand button.
pub struct SidebarFooter<S = NeedsScope> {
    scope: S,
    children: Vec<Element>,
}

impl SidebarFooter<NeedsScope> {
    pub fn new() -> Self {
        Self {
            scope: NeedsScope,
            children: Vec::new(),
        }
    }

    pub fn scope(
        self,
        handle: &SidebarHandle,
    ) -> SidebarFooter<HasScope<'_, Expansion, SidebarMeta>> {
        SidebarFooter {
            scope: HasScope(handle),
            children: self.children,
        }
    }
}

impl Default for SidebarFooter<NeedsScope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SidebarFooter<S> {
    /// Replace the toggle button with custom content.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

impl SidebarFooter<HasScope<'_, Expansion, SidebarMeta>> {
    pub fn build(self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let expanded = handle.is_expanded()?;
        let width = handle.with_metadata(|meta| meta.width(expanded))?;

        let body = if !self.children.is_empty() {
            Element::col().children(self.children)
        } else {
            let (glyph, label) = if expanded {
                ("« Collapse", "Collapse sidebar")
            } else {
                ("»", "Expand sidebar")
            };
            let button = mark(Element::text(glyph), handle, data::PART_TOGGLE, "footer")
                .width(width)
                .text_align(TextAlign::Center)
                .focusable(true)
                .clickable(true)
                .data(data::EXPANDED, flag(expanded))
                .data(data::LABEL, label)
                .style_focused(Style::new().reverse());

            let target = handle.clone();
            registry.register(
                &button.id,
                ON_ACTIVATE,
                Arc::new(move || {
                    if let Err(e) = target.toggle() {
                        log::warn!("Sidebar toggle: {}", e);
                    }
                }),
            );
            button
        };

        Ok(Element::col()
            .id(handle.element_id("footer", "sidebar"))
            .child(rule(width))
            .child(body))
    }
}

/// Titled group of sidebar items. The title is hidden while collapsed.
pub struct SidebarGroup<S = NeedsScope> {
    scope: S,
    title: Option<String>,
    children: Vec<Element>,
}

impl SidebarGroup<NeedsScope> {
    pub fn new() -> Self {
        Self {
            scope: NeedsScope,
            title: None,
            children: Vec::new(),
        }
    }

    pub fn scope(
        self,
        handle: &SidebarHandle,
    ) -> SidebarGroup<HasScope<'_, Expansion, SidebarMeta>> {
        SidebarGroup {
            scope: HasScope(handle),
            title: self.title,
            children: self.children,
        }
    }
}

impl Default for SidebarGroup<NeedsScope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SidebarGroup<S> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn child(mut self, item: Element) -> Self {
        self.children.push(item);
        self
    }

    pub fn children(mut self, items: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(items);
        self
    }
}

impl SidebarGroup<HasScope<'_, Expansion, SidebarMeta>> {
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let expanded = handle.is_expanded()?;

        let mut group = Element::col().padding(Edges::new(0, 0, 1, 0));
        if let Some(title) = self.title.filter(|_| expanded) {
            group = group.child(
                Element::text(title.to_uppercase())
                    .padding(Edges::symmetric(0, 1))
                    .style(Style::new().dim().bold()),
            );
        }
        Ok(group.children(self.children))
    }
}
