//! The showcase page: one instance of every widget family.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use zenith::prelude::*;
use zenith_dom::{Color, Edges, Element, Style};

struct NavItem {
    icon: &'static str,
    label: &'static str,
    href: &'static str,
    badge: Option<Badge>,
}

fn nav_item(icon: &'static str, label: &'static str, href: &'static str) -> NavItem {
    NavItem {
        icon,
        label,
        href,
        badge: None,
    }
}

impl NavItem {
    fn badge(mut self, badge: impl Into<Badge>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

fn navigation() -> Vec<(&'static str, Vec<NavItem>)> {
    vec![
        ("Overview", vec![nav_item("⌂", "Dashboard", "/")]),
        (
            "Components",
            vec![
                nav_item("≡", "Accordion", "/accordion").badge("new"),
                nav_item("▭", "Tabs", "/tabs"),
                nav_item("◧", "Sidebar", "/sidebar"),
                nav_item("#", "Tag", "/tag").badge(8u32),
            ],
        ),
        (
            "Account",
            vec![
                nav_item("✉", "Inbox", "/inbox").badge(3u32),
                nav_item("⚙", "Settings", "/settings").badge(0u32),
            ],
        ),
    ]
}

pub struct Showcase {
    faq: Accordion,
    settings: Accordion,
    horizontal: Tabs,
    vertical: Tabs,
    sidebar: Sidebar,
    tab_changes: Arc<AtomicUsize>,
    tags: Arc<Mutex<Vec<String>>>,
    /// Page-level state (tags, active link, status) changed since the last render.
    changed: Arc<AtomicBool>,
    active: String,
    status: String,
}

impl Showcase {
    pub fn new() -> Result<Self, ConfigError> {
        let tab_changes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&tab_changes);

        Ok(Self {
            faq: Accordion::new(AccordionConfig::single().default_expanded(["item-1"]))?,
            settings: Accordion::new(
                AccordionConfig::multiple().default_expanded(["item-1", "item-3"]),
            )?,
            horizontal: Tabs::new(TabsConfig::new("tab1").on_change(move |id| {
                let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
                log::info!("Tab changed to {} ({} changes)", id, n);
            }))?,
            vertical: Tabs::new(TabsConfig::new("account").vertical())?,
            sidebar: Sidebar::new(SidebarConfig::default())?,
            tab_changes,
            tags: Arc::new(Mutex::new(
                ["rust", "terminal", "widgets", "state"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )),
            changed: Arc::new(AtomicBool::new(false)),
            active: "/".into(),
            status: "Tab/arrows move, Enter/Space activate, Backspace removes a tag, q quits"
                .into(),
        })
    }

    /// Whether anything shown on the page changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.changed.load(Ordering::Relaxed)
            || self.faq.scope().is_dirty()
            || self.settings.scope().is_dirty()
            || self.horizontal.scope().is_dirty()
            || self.vertical.scope().is_dirty()
            || self.sidebar.scope().is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.changed.store(false, Ordering::Relaxed);
        self.faq.scope().clear_dirty();
        self.settings.scope().clear_dirty();
        self.horizontal.scope().clear_dirty();
        self.vertical.scope().clear_dirty();
        self.sidebar.scope().clear_dirty();
    }

    /// Host-side navigation for sidebar links.
    pub fn follow(&mut self, element: &Element) {
        let Some(href) = element.get_data(data::HREF) else {
            return;
        };
        log::debug!("Navigating to {}", href);
        self.active = href.to_string();
        self.status = format!("Navigated to {}", href);
        self.changed.store(true, Ordering::Relaxed);
    }

    pub fn element(&self, registry: &HandlerRegistry, width: u16) -> Result<Element, ConfigError> {
        let sidebar = self.sidebar_element(registry)?;
        let main = Element::col()
            .gap(1)
            .padding(Edges::symmetric(1, 1))
            .child(
                Element::text("Zenith UI components")
                    .style(Style::new().bold().foreground(Color::Cyan)),
            )
            .child(self.tags_section(registry))
            .child(self.accordion_section(registry)?)
            .child(self.tabs_section(registry)?)
            .child(Element::text(self.status.as_str()).style(Style::new().dim()));

        Ok(self.sidebar.place(sidebar, main, width))
    }

    fn sidebar_element(&self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let handle = self.sidebar.handle();

        let mut content = SidebarContent::new();
        for (title, items) in navigation() {
            let mut group = SidebarGroup::new().title(title);
            for nav in items {
                let mut item = SidebarItem::new(nav.icon, nav.label)
                    .href(nav.href)
                    .active(self.active == nav.href);
                if let Some(badge) = nav.badge {
                    item = item.badge(badge);
                }
                group = group.child(item.scope(&handle).build()?);
            }
            content = content.child(group.scope(&handle).build()?);
        }

        Ok(self.sidebar.element([
            SidebarHeader::new().scope(&handle).build()?,
            content.build(),
            SidebarFooter::new().scope(&handle).build(registry)?,
        ]))
    }

    fn tags_section(&self, registry: &HandlerRegistry) -> Element {
        let variants = [
            TagVariant::Primary,
            TagVariant::Success,
            TagVariant::Warning,
            TagVariant::Info,
        ];
        let names = match self.tags.lock() {
            Ok(tags) => tags.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        let removable = names.iter().zip(variants.iter().cycle()).map(|(name, variant)| {
            let tags = Arc::clone(&self.tags);
            let changed = Arc::clone(&self.changed);
            Tag::new(name.as_str())
                .variant(*variant)
                .on_remove(move |id| {
                    if let Ok(mut tags) = tags.lock() {
                        tags.retain(|t| t != id);
                    }
                    changed.store(true, Ordering::Relaxed);
                })
                .build(registry)
        });

        let sizes = [TagSize::Small, TagSize::Default, TagSize::Large]
            .into_iter()
            .map(|size| {
                Tag::new(format!("{:?}", size).to_lowercase())
                    .variant(TagVariant::Outline)
                    .size(size)
                    .build(registry)
            });

        section(
            "Tags",
            Element::col()
                .gap(1)
                .child(TagGroup::new().children(removable).build())
                .child(
                    TagGroup::new()
                        .spacing(Spacing::Loose)
                        .children(sizes)
                        .build(),
                ),
        )
    }

    fn accordion_section(&self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let faq = self.faq.handle();
        let questions = [
            ("item-1", "What is Zenith UI?", "A set of compound terminal widgets."),
            ("item-2", "How is state shared?", "Each root owns a store; parts get a handle."),
            ("item-3", "Can items be disabled?", "Yes. They keep their state."),
        ];
        let mut single = Vec::new();
        for (id, question, answer) in questions {
            single.push(
                AccordionItem::new(id)
                    .trigger(question)
                    .text(answer)
                    .disabled(id == "item-3")
                    .scope(&faq)
                    .build(registry)?,
            );
        }

        let settings = self.settings.handle();
        let mut multiple = Vec::new();
        for (id, title) in [("item-1", "General"), ("item-2", "Privacy"), ("item-3", "Display")] {
            multiple.push(
                AccordionItem::new(id)
                    .trigger(title)
                    .text(format!("{} settings go here.", title))
                    .scope(&settings)
                    .build(registry)?,
            );
        }

        Ok(section(
            "Accordion",
            Element::col()
                .child(Element::text("Single").style(Style::new().dim()))
                .child(self.faq.element(single))
                .child(Element::text("Multiple").style(Style::new().dim()))
                .child(self.settings.element(multiple)),
        ))
    }

    fn tabs_section(&self, registry: &HandlerRegistry) -> Result<Element, ConfigError> {
        let handle = self.horizontal.handle();
        let pages = [("tab1", "Overview"), ("tab2", "Usage"), ("tab3", "API")];

        let mut list = TabList::new();
        let mut panels = TabPanels::new();
        for (id, label) in pages {
            list = list.child(
                Tab::new(id)
                    .label(label)
                    .variant(TabVariant::Underline)
                    .scope(&handle)
                    .build(registry)?,
            );
            panels = panels.child(
                TabPanel::new(id)
                    .text(format!("{} content.", label))
                    .scope(&handle)
                    .build()?,
            );
        }
        let horizontal = self.horizontal.element([
            list.scope(&handle).build()?,
            panels.scope(&handle).build()?,
        ]);

        let handle = self.vertical.handle();
        let pages = [("account", "Account"), ("password", "Password"), ("billing", "Billing")];
        let mut list = TabList::new().size(TabSize::Sm);
        let mut panels = TabPanels::new();
        for (id, label) in pages {
            list = list.child(
                Tab::new(id)
                    .label(label)
                    .variant(TabVariant::Outline)
                    .size(TabSize::Sm)
                    .disabled(id == "billing")
                    .scope(&handle)
                    .build(registry)?,
            );
            panels = panels.child(
                TabPanel::new(id)
                    .text(format!("Manage your {}.", label.to_lowercase()))
                    .scope(&handle)
                    .build()?,
            );
        }
        let vertical = self.vertical.element([
            list.scope(&handle).build()?,
            panels.scope(&handle).build()?,
        ]);

        let changes = self.tab_changes.load(Ordering::Relaxed);
        Ok(section(
            "Tabs",
            Element::col()
                .gap(1)
                .child(horizontal)
                .child(
                    Element::text(format!(
                        "Active: {} (changed {} times)",
                        self.horizontal.selected(),
                        changes
                    ))
                    .style(Style::new().dim()),
                )
                .child(vertical),
        ))
    }
}

fn section(title: &str, body: Element) -> Element {
    Element::col()
        .child(Element::text(title).style(Style::new().bold().underline()))
        .child(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_page_is_clean() {
        let showcase = Showcase::new().unwrap();
        assert!(!showcase.is_dirty());
    }

    #[test]
    fn test_widget_change_marks_dirty_until_cleared() {
        let showcase = Showcase::new().unwrap();
        let registry = HandlerRegistry::new();
        showcase.element(&registry, 120).unwrap();

        let footer = showcase.sidebar.handle().element_id(data::PART_TOGGLE, "footer");
        assert!(registry.dispatch(&footer, ON_ACTIVATE));
        assert!(showcase.is_dirty());

        showcase.clear_dirty();
        assert!(!showcase.is_dirty());
    }

    #[test]
    fn test_tag_removal_marks_dirty() {
        let showcase = Showcase::new().unwrap();
        let registry = HandlerRegistry::new();
        showcase.element(&registry, 120).unwrap();

        assert!(registry.dispatch(&Tag::remove_button_id("rust"), ON_REMOVE));
        assert!(showcase.is_dirty());
        assert!(!showcase.tags.lock().unwrap().contains(&"rust".to_string()));
    }

    #[test]
    fn test_follow_marks_dirty() {
        let mut showcase = Showcase::new().unwrap();
        showcase.follow(&Element::box_().data(data::HREF, "/tabs"));

        assert!(showcase.is_dirty());
        assert_eq!(showcase.active, "/tabs");
    }
}
