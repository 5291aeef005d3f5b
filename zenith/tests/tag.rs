use std::sync::{Arc, Mutex};

use zenith::prelude::*;

#[test]
fn test_removable_tag_reports_its_id() {
    let removed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&removed);
    let registry = HandlerRegistry::new();

    let tag = Tag::new("Rust")
        .id("rust")
        .variant(TagVariant::Primary)
        .on_remove(move |id| sink.lock().unwrap().push(id.to_string()))
        .build(&registry);

    assert_eq!(tag.child_elements().len(), 2);
    let button = Tag::remove_button_id("rust");
    assert!(registry.dispatch(&button, ON_ACTIVATE));
    assert!(registry.dispatch(&button, ON_REMOVE));
    assert_eq!(*removed.lock().unwrap(), vec!["rust", "rust"]);
}

#[test]
fn test_plain_tag_has_no_button() {
    let registry = HandlerRegistry::new();
    let tag = Tag::new("Draft").size(TagSize::Small).build(&registry);

    assert_eq!(tag.child_elements().len(), 1);
    assert_eq!(tag.get_data(data::LABEL), Some("Draft"));
    assert!(registry.is_empty());
}

#[test]
fn test_removable_without_callback_registers_nothing() {
    let registry = HandlerRegistry::new();
    let tag = Tag::new("x").removable(true).build(&registry);

    assert_eq!(tag.child_elements().len(), 2);
    assert!(registry.is_empty());
}

#[test]
fn test_group_spacing() {
    let registry = HandlerRegistry::new();
    for (spacing, gap) in [(Spacing::Compact, 1), (Spacing::Default, 2), (Spacing::Loose, 3)] {
        let group = TagGroup::new()
            .spacing(spacing)
            .child(Tag::new("a").build(&registry))
            .child(Tag::new("b").build(&registry))
            .build();
        assert_eq!(group.gap, gap);
        assert_eq!(group.child_elements().len(), 2);
    }
}
