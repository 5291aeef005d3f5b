use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use zenith::prelude::*;

fn counter() -> (Arc<AtomicUsize>, impl Fn(&Selection) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    (count, move |_: &Selection| {
        seen.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_update_notifies_each_subscriber_once() {
    let scope = Scope::bind(Family::Accordion, Selection::exclusive(), ());
    let (first, sub1) = counter();
    let (second, sub2) = counter();
    scope.subscribe(sub1);
    scope.subscribe(sub2);

    scope.handle().toggle("a").unwrap();

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unchanged_update_notifies_nobody() {
    let initial = Selection::new(SelectionMode::Exclusive, ["a"]).unwrap();
    let scope = Scope::bind(Family::Tabs, initial, ());
    let (count, sub) = counter();
    scope.subscribe(sub);

    assert!(!scope.handle().select("a").unwrap());
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(!scope.is_dirty());
}

#[test]
fn test_unsubscribe() {
    let scope = Scope::bind(Family::Accordion, Selection::inclusive(), ());
    let (count, sub) = counter();
    let id = scope.subscribe(sub);

    assert!(scope.unsubscribe(id));
    assert!(!scope.unsubscribe(id));
    scope.handle().toggle("a").unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_read_after_update_sees_new_state() {
    let scope = Scope::bind(Family::Accordion, Selection::exclusive(), ());
    let handle = scope.handle();

    handle.toggle("a").unwrap();
    assert!(handle.is_selected("a").unwrap());
    assert!(scope.is_dirty());

    scope.clear_dirty();
    assert!(!scope.is_dirty());
}

#[test]
fn test_subscriber_may_read_the_scope() {
    let scope = Scope::bind(Family::Accordion, Selection::inclusive(), ());
    let handle = scope.handle();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let reader = handle.clone();
    let log = Arc::clone(&seen);
    scope.subscribe(move |_| {
        let members = reader.read().unwrap().members().to_vec();
        log.lock().unwrap().push(members);
    });

    handle.toggle("a").unwrap();
    handle.toggle("b").unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![vec!["a".to_string()], vec!["a".into(), "b".into()]]);
}

#[test]
fn test_detached_handle_fails_fast() {
    let scope = Scope::bind(Family::Sidebar, Expansion::default(), ());
    let handle = scope.handle();
    assert!(handle.is_bound());

    drop(scope);

    assert!(!handle.is_bound());
    let err = handle.is_expanded().unwrap_err();
    assert_eq!(err, ConfigError::ScopeDetached { family: Family::Sidebar });
    assert_eq!(handle.toggle(), Err(ConfigError::ScopeDetached { family: Family::Sidebar }));
}

#[test]
fn test_element_ids_are_unique_per_scope() {
    let a = Scope::bind(Family::Tabs, Selection::exclusive(), ());
    let b = Scope::bind(Family::Tabs, Selection::exclusive(), ());

    let id_a = a.handle().element_id("trigger", "tab1");
    let id_b = b.handle().element_id("trigger", "tab1");

    assert_ne!(id_a, id_b);
    assert!(id_a.starts_with("tabs-"));
    assert!(id_a.ends_with("-trigger-tab1"));
}

#[test]
fn test_handle_reads_metadata() {
    let scope = Scope::bind(Family::Tabs, Selection::exclusive(), 42u8);
    assert_eq!(scope.handle().with_metadata(|m| *m), Ok(42));
}

#[test]
fn test_nested_update_is_delivered_after_current_one() {
    let initial = Selection::new(SelectionMode::Exclusive, ["tab1"]).unwrap();
    let scope = Scope::bind(Family::Tabs, initial, ());

    let redirect = scope.handle();
    scope.subscribe(move |selection: &Selection| {
        if selection.active() == Some("tab2") {
            redirect.select("tab3").unwrap();
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    scope.subscribe(move |selection: &Selection| {
        let active = selection.active().unwrap_or_default().to_string();
        log.lock().unwrap().push(active);
    });

    scope.handle().select("tab2").unwrap();

    assert_eq!(scope.read().active(), Some("tab3"));
    assert_eq!(*seen.lock().unwrap(), vec!["tab2", "tab3"]);
}
