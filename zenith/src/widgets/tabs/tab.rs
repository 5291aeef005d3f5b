use std::sync::Arc;

use zenith_dom::{Color, Edges, Element, Style};

use super::{Orientation, TabsHandle, TabsMeta};
use crate::error::ConfigError;
use crate::handlers::{HandlerRegistry, ON_ACTIVATE};
use crate::selection::Selection;
use crate::widgets::{HasScope, NeedsScope, data, flag, mark};

/// Visual treatment of a tab button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabVariant {
    #[default]
    Default,
    Outline,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl TabSize {
    fn padding(&self) -> u16 {
        match self {
            TabSize::Sm => 1,
            TabSize::Md => 2,
            TabSize::Lg => 3,
        }
    }

    pub(super) fn list_gap(&self) -> u16 {
        match self {
            TabSize::Sm | TabSize::Md => 1,
            TabSize::Lg => 2,
        }
    }
}

/// A tab button. Activating it makes its tab the active one.
pub struct Tab<S = NeedsScope> {
    scope: S,
    id: String,
    label: String,
    disabled: bool,
    variant: TabVariant,
    size: TabSize,
    orientation: Option<Orientation>,
}

impl Tab<NeedsScope> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            scope: NeedsScope,
            id: id.into(),
            label: String::new(),
            disabled: false,
            variant: TabVariant::default(),
            size: TabSize::default(),
            orientation: None,
        }
    }

    pub fn scope(self, handle: &TabsHandle) -> Tab<HasScope<'_, Selection, TabsMeta>> {
        Tab {
            scope: HasScope(handle),
            id: self.id,
            label: self.label,
            disabled: self.disabled,
            variant: self.variant,
            size: self.size,
            orientation: self.orientation,
        }
    }
}

impl<S> Tab<S> {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn variant(mut self, variant: TabVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: TabSize) -> Self {
        self.size = size;
        self
    }

    /// Override the orientation inherited from the tabs root.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

impl Tab<HasScope<'_, Selection, TabsMeta>> {
    pub fn build(self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let selected = handle.is_selected(&self.id)?;
        let orientation = match self.orientation {
            Some(orientation) => orientation,
            None => handle.with_metadata(|meta| meta.orientation)?,
        };

        let label = match self.variant {
            TabVariant::Outline => format!("[{}]", self.label),
            TabVariant::Default | TabVariant::Underline => self.label,
        };
        let style = match (self.variant, selected) {
            (_, false) => Style::new().foreground(Color::Grey),
            (TabVariant::Default, true) => Style::new().bold(),
            (TabVariant::Outline, true) => Style::new().bold().foreground(Color::Cyan),
            (TabVariant::Underline, true) => Style::new().bold().underline(),
        };

        let pad = self.size.padding();
        let tab = mark(Element::text(label), handle, data::PART_TRIGGER, &self.id)
            .padding(Edges::symmetric(0, pad))
            .focusable(true)
            .clickable(true)
            .disabled(self.disabled)
            .data(data::SELECTED, flag(selected))
            .data(data::ORIENTATION, orientation.as_str())
            .style(style)
            .style_focused(Style::new().reverse());

        if !self.disabled {
            let target = handle.clone();
            let id = self.id.clone();
            registry.register(
                &tab.id,
                ON_ACTIVATE,
                Arc::new(move || {
                    if let Err(e) = target.select(&id) {
                        log::warn!("Tab '{}': {}", id, e);
                    }
                }),
            );
        }

        Ok(tab)
    }
}
