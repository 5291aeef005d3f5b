use zenith::prelude::*;
use zenith_dom::{find_element, render_lines, Content, Element};

fn build(accordion: &Accordion, registry: &HandlerRegistry, ids: &[&str]) -> Element {
    let handle = accordion.handle();
    let items = ids
        .iter()
        .map(|id| {
            AccordionItem::new(*id)
                .trigger(format!("Title {}", id))
                .text(format!("Body {}", id))
                .scope(&handle)
                .build(registry)
                .unwrap()
        })
        .collect::<Vec<_>>();
    accordion.element(items)
}

fn activate(accordion: &Accordion, registry: &HandlerRegistry, id: &str) -> bool {
    let trigger = accordion.handle().element_id(data::PART_TRIGGER, id);
    registry.dispatch(&trigger, ON_ACTIVATE)
}

#[test]
fn test_single_mode_trigger_flow() {
    let accordion = Accordion::new(AccordionConfig::single().default_expanded(["item-1"])).unwrap();
    let registry = HandlerRegistry::new();
    build(&accordion, &registry, &["item-1", "item-2", "item-3"]);

    assert!(activate(&accordion, &registry, "item-2"));
    assert_eq!(accordion.expanded(), vec!["item-2"]);

    assert!(activate(&accordion, &registry, "item-2"));
    assert!(accordion.expanded().is_empty());
}

#[test]
fn test_multiple_mode_trigger_flow() {
    let accordion =
        Accordion::new(AccordionConfig::multiple().default_expanded(["item-1", "item-3"])).unwrap();
    let registry = HandlerRegistry::new();
    build(&accordion, &registry, &["item-1", "item-2", "item-3"]);

    activate(&accordion, &registry, "item-2");
    assert_eq!(accordion.expanded(), vec!["item-1", "item-3", "item-2"]);

    activate(&accordion, &registry, "item-1");
    assert_eq!(accordion.expanded(), vec!["item-3", "item-2"]);
}

#[test]
fn test_closed_content_is_empty_placeholder() {
    let accordion = Accordion::new(AccordionConfig::single().default_expanded(["a"])).unwrap();
    let registry = HandlerRegistry::new();
    let root = build(&accordion, &registry, &["a", "b"]);
    let handle = accordion.handle();

    let open = find_element(&root, &handle.element_id(data::PART_PANEL, "a")).unwrap();
    assert_eq!(open.get_data(data::SELECTED), Some("true"));
    assert_eq!(open.child_elements().len(), 1);

    let closed = find_element(&root, &handle.element_id(data::PART_PANEL, "b")).unwrap();
    assert_eq!(closed.content, Content::None);
    assert_eq!(closed.get_data(data::SELECTED), Some("false"));

    let text: Vec<String> = render_lines(&root, 40).iter().map(|l| l.plain()).collect();
    assert!(text.iter().any(|l| l.contains("Body a")));
    assert!(!text.iter().any(|l| l.contains("Body b")));
}

#[test]
fn test_trigger_carries_expanded_flag() {
    let accordion = Accordion::new(AccordionConfig::multiple().default_expanded(["a"])).unwrap();
    let registry = HandlerRegistry::new();
    let root = build(&accordion, &registry, &["a", "b"]);
    let handle = accordion.handle();

    let a = find_element(&root, &handle.element_id(data::PART_TRIGGER, "a")).unwrap();
    let b = find_element(&root, &handle.element_id(data::PART_TRIGGER, "b")).unwrap();
    assert_eq!(a.get_data(data::EXPANDED), Some("true"));
    assert_eq!(b.get_data(data::EXPANDED), Some("false"));
    assert!(a.focusable);
}

#[test]
fn test_disabled_item_keeps_state_and_ignores_activation() {
    let accordion = Accordion::new(AccordionConfig::single().default_expanded(["locked"])).unwrap();
    let registry = HandlerRegistry::new();
    let handle = accordion.handle();

    let item = AccordionItem::new("locked")
        .trigger("Locked")
        .disabled(true)
        .text("still visible")
        .scope(&handle)
        .build(&registry)
        .unwrap();
    assert_eq!(item.get_data(data::STATE), Some("open"));

    assert!(!activate(&accordion, &registry, "locked"));
    assert_eq!(accordion.expanded(), vec!["locked"]);
}

#[test]
fn test_rebuild_reflects_new_state() {
    let accordion = Accordion::new(AccordionConfig::single()).unwrap();
    let registry = HandlerRegistry::new();
    build(&accordion, &registry, &["a"]);
    activate(&accordion, &registry, "a");
    assert!(accordion.scope().is_dirty());

    registry.clear();
    let root = build(&accordion, &registry, &["a"]);
    let item = find_element(&root, &accordion.handle().element_id(data::PART_ITEM, "a")).unwrap();
    assert_eq!(item.get_data(data::STATE), Some("open"));
}

#[test]
fn test_content_through_dropped_root_is_detached() {
    let accordion = Accordion::new(AccordionConfig::single().default_expanded(["item-1"])).unwrap();
    let handle = accordion.handle();
    drop(accordion);

    let err = AccordionContent::new("item-1").scope(&handle).build().unwrap_err();
    assert_eq!(err, ConfigError::ScopeDetached { family: Family::Accordion });
}

#[test]
fn test_handler_outliving_root_does_not_panic() {
    let registry = HandlerRegistry::new();
    let trigger_id;
    {
        let accordion = Accordion::new(AccordionConfig::single()).unwrap();
        build(&accordion, &registry, &["a"]);
        trigger_id = accordion.handle().element_id(data::PART_TRIGGER, "a");
    }
    assert!(registry.dispatch(&trigger_id, ON_ACTIVATE));
}

#[test]
fn test_invalid_defaults_rejected() {
    let err = Accordion::new(AccordionConfig::single().default_expanded(["a", "b"])).unwrap_err();
    assert_eq!(err, ConfigError::TooManyDefaults { count: 2 });
    assert!(AccordionConfig::multiple().default_expanded(["a", "a"]).validate().is_err());
}

#[test]
fn test_unpaired_trigger_is_reported() {
    let accordion = Accordion::new(AccordionConfig::single()).unwrap();
    let registry = HandlerRegistry::new();
    let handle = accordion.handle();

    let trigger = AccordionTrigger::new("orphan")
        .label("Orphan")
        .scope(&handle)
        .build(&registry)
        .unwrap();
    let content = AccordionContent::new("typo").scope(&handle).build().unwrap();
    let root = accordion.element([trigger, content]);

    let mut warnings = check_pairs(&root, accordion.scope().id(), Family::Accordion);
    warnings.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(
        warnings,
        vec![
            PairingWarning {
                family: Family::Accordion,
                id: "orphan".into(),
                missing: Part::Panel,
            },
            PairingWarning {
                family: Family::Accordion,
                id: "typo".into(),
                missing: Part::Trigger,
            },
        ]
    );
}

#[test]
fn test_nested_scopes_are_checked_separately() {
    let outer = Accordion::new(AccordionConfig::single().default_expanded(["a"])).unwrap();
    let inner = Accordion::new(AccordionConfig::single()).unwrap();
    let registry = HandlerRegistry::new();

    let nested = build(&inner, &registry, &["x"]);
    let outer_item = AccordionItem::new("a")
        .trigger("Outer")
        .child(nested)
        .scope(&outer.handle())
        .build(&registry)
        .unwrap();
    let root = outer.element([outer_item]);
    assert!(find_element(&root, &inner.handle().element_id(data::PART_TRIGGER, "x")).is_some());

    assert!(check_pairs(&root, outer.scope().id(), Family::Accordion).is_empty());
    assert!(check_pairs(&root, inner.scope().id(), Family::Accordion).is_empty());
}
