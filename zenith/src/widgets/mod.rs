//! Compound widget families.
//!
//! Each family has a root that owns a [`Scope`](crate::scope::Scope) and a
//! set of leaf builders. Leaves must be handed the root's handle before they
//! can be built:
//!
//! ```ignore
//! let accordion = Accordion::new(AccordionConfig::single().default_expanded(["item-1"]))?;
//! let handle = accordion.handle();
//!
//! let trigger = AccordionTrigger::new("item-1")
//!     .label("What is Zenith UI?")
//!     .scope(&handle)
//!     .build(&registry)?;
//! ```
//!
//! A leaf without `.scope(..)` has no `build()` at all. A leaf whose root has
//! since been dropped fails with [`ConfigError::ScopeDetached`](crate::ConfigError).
//!
//! Interactive parts register an `on_activate` handler in the
//! [`HandlerRegistry`](crate::handlers::HandlerRegistry) under their element ID.

pub mod accordion;
pub mod sidebar;
pub mod tabs;
pub mod tag;

use zenith_dom::Element;

use crate::scope::ScopeHandle;

/// Typestate marker: widget needs a scope handle.
pub struct NeedsScope;

/// Typestate marker: widget has a scope handle.
pub struct HasScope<'a, S, M>(&'a ScopeHandle<S, M>);

/// Element data keys and values shared by all families.
pub mod data {
    /// Scope the element belongs to.
    pub const SCOPE: &str = "scope";
    /// Role of the element within its family.
    pub const PART: &str = "part";
    /// Identifier a trigger or panel is keyed by.
    pub const FOR: &str = "for";
    /// `open` / `closed` on accordion items.
    pub const STATE: &str = "state";
    pub const SELECTED: &str = "selected";
    pub const EXPANDED: &str = "expanded";
    pub const LABEL: &str = "label";
    pub const HREF: &str = "href";
    pub const ORIENTATION: &str = "orientation";
    pub const POSITION: &str = "position";

    pub const PART_TRIGGER: &str = "trigger";
    pub const PART_PANEL: &str = "panel";
    pub const PART_TOGGLE: &str = "toggle";
    pub const PART_ITEM: &str = "item";
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Tag an element as `part` of the handle's scope, keyed by `id`.
fn mark<S, M>(element: Element, handle: &ScopeHandle<S, M>, part: &str, id: &str) -> Element {
    element
        .id(handle.element_id(part, id))
        .data(data::SCOPE, handle.id().to_string())
        .data(data::PART, part)
        .data(data::FOR, id)
}

/// Zero-size stand-in for a closed panel.
///
/// Carries the panel's identity so pairing checks still see it, but has no
/// content and renders to nothing.
fn placeholder<S, M>(handle: &ScopeHandle<S, M>, id: &str) -> Element {
    mark(Element::box_(), handle, data::PART_PANEL, id).data(data::SELECTED, flag(false))
}
