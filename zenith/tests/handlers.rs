use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use zenith::prelude::*;

#[test]
fn test_dispatch_runs_registered_handler() {
    let registry = HandlerRegistry::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    registry.register(
        "button",
        ON_ACTIVATE,
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert!(registry.dispatch("button", ON_ACTIVATE));
    assert!(!registry.dispatch("button", ON_REMOVE));
    assert!(!registry.dispatch("other", ON_ACTIVATE));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clear_drops_handlers() {
    let registry = HandlerRegistry::new();
    registry.register("a", ON_ACTIVATE, Arc::new(|| {}));
    registry.register("b", ON_ACTIVATE, Arc::new(|| {}));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn test_handler_may_register_during_dispatch() {
    let registry = HandlerRegistry::new();
    let inner = registry.clone();
    registry.register(
        "a",
        ON_ACTIVATE,
        Arc::new(move || inner.register("b", ON_ACTIVATE, Arc::new(|| {}))),
    );

    assert!(registry.dispatch("a", ON_ACTIVATE));
    assert!(registry.get("b", ON_ACTIVATE).is_some());
}
