use std::sync::{Arc, Mutex, OnceLock};

use zenith::prelude::*;
use zenith_dom::{find_element, Content, Element};

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, move |id: &str| sink.lock().unwrap().push(id.to_string()))
}

fn build(tabs: &Tabs, registry: &HandlerRegistry, ids: &[&str]) -> Element {
    let handle = tabs.handle();
    let list = TabList::new()
        .children(ids.iter().map(|id| {
            Tab::new(*id)
                .label(id.to_uppercase())
                .scope(&handle)
                .build(registry)
                .unwrap()
        }))
        .scope(&handle)
        .build()
        .unwrap();
    let panels = TabPanels::new()
        .children(ids.iter().map(|id| {
            TabPanel::new(*id)
                .text(format!("Panel {}", id))
                .scope(&handle)
                .build()
                .unwrap()
        }))
        .scope(&handle)
        .build()
        .unwrap();
    tabs.element([list, panels])
}

fn activate(tabs: &Tabs, registry: &HandlerRegistry, id: &str) -> bool {
    registry.dispatch(&tabs.handle().element_id(data::PART_TRIGGER, id), ON_ACTIVATE)
}

#[test]
fn test_observer_fires_once_per_change() {
    let (calls, on_change) = recorder();
    let tabs = Tabs::new(TabsConfig::new("tab1").on_change(on_change)).unwrap();
    let registry = HandlerRegistry::new();
    build(&tabs, &registry, &["tab1", "tab2", "tab3"]);

    assert!(calls.lock().unwrap().is_empty());

    assert!(activate(&tabs, &registry, "tab2"));
    assert_eq!(tabs.selected(), "tab2");
    assert_eq!(*calls.lock().unwrap(), vec!["tab2"]);
}

#[test]
fn test_reactivating_active_tab_is_silent() {
    let (calls, on_change) = recorder();
    let tabs = Tabs::new(TabsConfig::new("tab1").on_change(on_change)).unwrap();
    let registry = HandlerRegistry::new();
    build(&tabs, &registry, &["tab1", "tab2"]);

    activate(&tabs, &registry, "tab1");
    assert_eq!(tabs.selected(), "tab1");
    assert!(calls.lock().unwrap().is_empty());
    assert!(!tabs.select("tab1"));

    assert!(tabs.select("tab2"));
    assert!(tabs.select("tab1"));
    assert_eq!(*calls.lock().unwrap(), vec!["tab2", "tab1"]);
}

#[test]
fn test_only_active_panel_has_content() {
    let tabs = Tabs::new(TabsConfig::new("b")).unwrap();
    let registry = HandlerRegistry::new();
    let root = build(&tabs, &registry, &["a", "b"]);
    let handle = tabs.handle();

    let a = find_element(&root, &handle.element_id(data::PART_PANEL, "a")).unwrap();
    let b = find_element(&root, &handle.element_id(data::PART_PANEL, "b")).unwrap();
    assert_eq!(a.content, Content::None);
    assert_eq!(b.child_elements().len(), 1);

    let tab_b = find_element(&root, &handle.element_id(data::PART_TRIGGER, "b")).unwrap();
    assert_eq!(tab_b.get_data(data::SELECTED), Some("true"));
}

#[test]
fn test_orientation_inherited_unless_overridden() {
    let tabs = Tabs::new(TabsConfig::new("a").vertical()).unwrap();
    let registry = HandlerRegistry::new();
    let handle = tabs.handle();

    let inherited = Tab::new("a").scope(&handle).build(&registry).unwrap();
    let overridden = Tab::new("b")
        .orientation(Orientation::Horizontal)
        .scope(&handle)
        .build(&registry)
        .unwrap();
    let list = TabList::new().scope(&handle).build().unwrap();

    assert_eq!(inherited.get_data(data::ORIENTATION), Some("vertical"));
    assert_eq!(overridden.get_data(data::ORIENTATION), Some("horizontal"));
    assert_eq!(list.get_data(data::ORIENTATION), Some("vertical"));
    assert_eq!(tabs.element(Vec::new()).get_data(data::ORIENTATION), Some("vertical"));
}

#[test]
fn test_disabled_tab_registers_nothing() {
    let tabs = Tabs::new(TabsConfig::new("a")).unwrap();
    let registry = HandlerRegistry::new();
    let tab = Tab::new("b")
        .disabled(true)
        .scope(&tabs.handle())
        .build(&registry)
        .unwrap();

    assert!(tab.disabled);
    assert!(registry.is_empty());
    assert!(!activate(&tabs, &registry, "b"));
    assert_eq!(tabs.selected(), "a");
}

#[test]
fn test_outline_variant_brackets_label() {
    let tabs = Tabs::new(TabsConfig::new("a")).unwrap();
    let registry = HandlerRegistry::new();
    let tab = Tab::new("a")
        .label("Alpha")
        .variant(TabVariant::Outline)
        .scope(&tabs.handle())
        .build(&registry)
        .unwrap();

    assert_eq!(tab.text_content(), Some("[Alpha]"));
}

#[test]
fn test_empty_default_tab_rejected() {
    assert_eq!(Tabs::new(TabsConfig::new("")).unwrap_err(), ConfigError::EmptyDefaultTab);
}

#[test]
fn test_panel_after_root_dropped_is_detached() {
    let tabs = Tabs::new(TabsConfig::new("a")).unwrap();
    let handle = tabs.handle();
    drop(tabs);

    let err = TabPanel::new("a").scope(&handle).build().unwrap_err();
    assert_eq!(err, ConfigError::ScopeDetached { family: Family::Tabs });
}

#[test]
fn test_missing_panel_is_reported() {
    let tabs = Tabs::new(TabsConfig::new("a")).unwrap();
    let registry = HandlerRegistry::new();
    let handle = tabs.handle();
    let list = TabList::new()
        .child(Tab::new("a").scope(&handle).build(&registry).unwrap())
        .child(Tab::new("b").scope(&handle).build(&registry).unwrap())
        .scope(&handle)
        .build()
        .unwrap();
    let panels = TabPanels::new()
        .child(TabPanel::new("a").scope(&handle).build().unwrap())
        .scope(&handle)
        .build()
        .unwrap();
    let root = tabs.element([list, panels]);

    let warnings = check_pairs(&root, tabs.scope().id(), Family::Tabs);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].id, "b");
    assert_eq!(warnings[0].missing, Part::Panel);
}

#[test]
fn test_observer_redirect_reaches_every_subscriber_in_order() {
    let slot: Arc<OnceLock<TabsHandle>> = Arc::new(OnceLock::new());
    let target = Arc::clone(&slot);
    let (calls, record) = recorder();
    let tabs = Tabs::new(TabsConfig::new("tab1").on_change(move |id| {
        record(id);
        if id == "tab2" {
            if let Some(handle) = target.get() {
                handle.select("tab3").unwrap();
            }
        }
    }))
    .unwrap();
    slot.set(tabs.handle()).unwrap();

    let (seen, watch) = recorder();
    tabs.scope().subscribe(move |selection: &Selection| {
        watch(selection.active().unwrap_or_default());
    });

    assert!(tabs.select("tab2"));

    assert_eq!(tabs.selected(), "tab3");
    assert_eq!(*calls.lock().unwrap(), vec!["tab2", "tab3"]);
    assert_eq!(*seen.lock().unwrap(), vec!["tab2", "tab3"]);
}
