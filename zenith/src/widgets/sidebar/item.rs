use zenith_dom::text::{display_width, truncate_to_width};
use zenith_dom::{Color, Edges, Element, Style};

use super::{SidebarHandle, SidebarMeta};
use crate::error::ConfigError;
use crate::expansion::Expansion;
use crate::widgets::{HasScope, NeedsScope, data, flag, mark};

/// Small counter or label shown after a sidebar item's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Text(String),
    Count(i64),
}

impl Badge {
    /// Zero counts and empty text are not shown.
    pub fn is_visible(&self) -> bool {
        match self {
            Badge::Text(text) => !text.is_empty(),
            Badge::Count(count) => *count != 0,
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::Text(text) => f.write_str(text),
            Badge::Count(count) => write!(f, "{}", count),
        }
    }
}

impl From<&str> for Badge {
    fn from(text: &str) -> Self {
        Badge::Text(text.to_string())
    }
}

impl From<String> for Badge {
    fn from(text: String) -> Self {
        Badge::Text(text)
    }
}

impl From<i64> for Badge {
    fn from(count: i64) -> Self {
        Badge::Count(count)
    }
}

impl From<u32> for Badge {
    fn from(count: u32) -> Self {
        Badge::Count(i64::from(count))
    }
}

/// Navigation link in the sidebar.
///
/// Always rendered. The label and badge are only shown while the sidebar is
/// expanded; collapsed, only the icon remains. Activation is left to the
/// host, which reads the `href` data attribute.
pub struct SidebarItem<S = NeedsScope> {
    scope: S,
    icon: String,
    label: String,
    href: String,
    active: bool,
    badge: Option<Badge>,
}

impl SidebarItem<NeedsScope> {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            scope: NeedsScope,
            icon: icon.into(),
            label: label.into(),
            href: String::new(),
            active: false,
            badge: None,
        }
    }

    pub fn scope(
        self,
        handle: &SidebarHandle,
    ) -> SidebarItem<HasScope<'_, Expansion, SidebarMeta>> {
        SidebarItem {
            scope: HasScope(handle),
            icon: self.icon,
            label: self.label,
            href: self.href,
            active: self.active,
            badge: self.badge,
        }
    }
}

impl<S> SidebarItem<S> {
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn badge(mut self, badge: impl Into<Badge>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

impl SidebarItem<HasScope<'_, Expansion, SidebarMeta>> {
    pub fn build(self) -> Result<Element, ConfigError> {
        let handle = self.scope.0;
        let expanded = handle.is_expanded()?;

        let key = if self.href.is_empty() {
            self.label.as_str()
        } else {
            self.href.as_str()
        };
        let style = if self.active {
            Style::new().bold().foreground(Color::Cyan)
        } else {
            Style::new()
        };

        let mut item = mark(Element::row(), handle, data::PART_ITEM, key)
            .gap(1)
            .padding(Edges::symmetric(0, 1))
            .focusable(true)
            .clickable(true)
            .data(data::HREF, self.href.as_str())
            .data(data::SELECTED, flag(self.active))
            .style(style)
            .style_focused(Style::new().reverse())
            .child(Element::text(self.icon.as_str()));

        if expanded {
            let badge = self
                .badge
                .filter(Badge::is_visible)
                .map(|badge| format!("({})", badge));

            // Label gets what padding, icon, gaps and badge leave of the row.
            let row_width = handle.with_metadata(|meta| usize::from(meta.expanded_width))?;
            let used = 2
                + display_width(&self.icon)
                + 1
                + badge.as_deref().map_or(0, |badge| display_width(badge) + 1);
            let label = truncate_to_width(&self.label, row_width.saturating_sub(used));

            item = item.child(Element::text(label));
            if let Some(badge) = badge {
                item = item
                    .child(Element::text(badge).style(Style::new().foreground(Color::Magenta)));
            }
        }

        Ok(item)
    }
}
