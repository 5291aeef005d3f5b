//! Tag: a small labelled chip, optionally removable.
//!
//! Tags hold no shared state. Removal is reported to the caller through the
//! `on_remove` callback; the caller decides whether the tag goes away.

use std::sync::Arc;

use zenith_dom::{Color, Edges, Element, Style};

use super::data;
use crate::handlers::{HandlerRegistry, ON_ACTIVATE, ON_REMOVE};

/// Callback receiving the id of the tag to remove.
pub type RemoveCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Outline,
}

impl TagVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagVariant::Default => "default",
            TagVariant::Primary => "primary",
            TagVariant::Secondary => "secondary",
            TagVariant::Success => "success",
            TagVariant::Warning => "warning",
            TagVariant::Danger => "danger",
            TagVariant::Info => "info",
            TagVariant::Outline => "outline",
        }
    }

    fn style(&self) -> Style {
        let filled = |bg: Color| Style::new().background(bg).foreground(Color::Black);
        match self {
            TagVariant::Default => filled(Color::Grey),
            TagVariant::Primary => filled(Color::Blue),
            TagVariant::Secondary => Style::new()
                .background(Color::DarkGrey)
                .foreground(Color::White),
            TagVariant::Success => filled(Color::Green),
            TagVariant::Warning => filled(Color::Yellow),
            TagVariant::Danger => filled(Color::Red),
            TagVariant::Info => filled(Color::Cyan),
            TagVariant::Outline => Style::new().underline(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSize {
    Small,
    #[default]
    Default,
    Large,
}

impl TagSize {
    fn padding(&self) -> Edges {
        match self {
            TagSize::Small => Edges::default(),
            TagSize::Default => Edges::symmetric(0, 1),
            TagSize::Large => Edges::symmetric(0, 2),
        }
    }
}

pub struct Tag {
    id: String,
    label: String,
    variant: TagVariant,
    size: TagSize,
    removable: bool,
    on_remove: Option<RemoveCallback>,
}

impl Tag {
    /// A tag whose id defaults to its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: label.clone(),
            label,
            variant: TagVariant::default(),
            size: TagSize::default(),
            removable: false,
            on_remove: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn variant(mut self, variant: TagVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: TagSize) -> Self {
        self.size = size;
        self
    }

    pub fn removable(mut self, removable: bool) -> Self {
        self.removable = removable;
        self
    }

    /// Called with the tag id when the remove button is activated.
    /// Implies `removable(true)`.
    pub fn on_remove(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.removable = true;
        self.on_remove = Some(Arc::new(callback));
        self
    }

    /// Element ID of the remove button.
    pub fn remove_button_id(id: &str) -> String {
        format!("tag-{}-remove", id)
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let mut tag = Element::row()
            .id(format!("tag-{}", self.id))
            .padding(self.size.padding())
            .style(self.variant.style())
            .data(data::LABEL, self.label.as_str())
            .data("variant", self.variant.as_str())
            .child(Element::text(self.label));

        if self.removable {
            let button = Element::text("×")
                .id(Self::remove_button_id(&self.id))
                .padding(Edges::left(1))
                .focusable(true)
                .clickable(true)
                .style_focused(Style::new().reverse());

            if let Some(callback) = self.on_remove {
                let id = self.id.clone();
                let handler: crate::handlers::Handler = Arc::new(move || {
                    log::debug!("Tag {}: remove requested", id);
                    callback(&id);
                });
                registry.register(&button.id, ON_ACTIVATE, handler.clone());
                registry.register(&button.id, ON_REMOVE, handler);
            }
            tag = tag.child(button);
        }

        tag
    }
}

/// Space between tags in a [`TagGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    Compact,
    #[default]
    Default,
    Loose,
}

impl Spacing {
    pub fn gap(&self) -> u16 {
        match self {
            Spacing::Compact => 1,
            Spacing::Default => 2,
            Spacing::Loose => 3,
        }
    }
}

#[derive(Default)]
pub struct TagGroup {
    spacing: Spacing,
    children: Vec<Element>,
}

impl TagGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn child(mut self, tag: Element) -> Self {
        self.children.push(tag);
        self
    }

    pub fn children(mut self, tags: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(tags);
        self
    }

    pub fn build(self) -> Element {
        Element::row().gap(self.spacing.gap()).children(self.children)
    }
}
