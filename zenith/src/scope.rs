//! Scope binder: one store per compound root, shared with its descendants.
//!
//! A root widget calls [`Scope::bind`] once and keeps the returned [`Scope`]
//! for its whole lifetime. Descendants never look the scope up; they are
//! handed a [`ScopeHandle`] explicitly. Handles are weak, so they do not keep
//! the state alive: once the root is dropped every handle reports
//! [`ConfigError::ScopeDetached`].
//!
//! Changes go through [`ScopeHandle::update`]. The change is applied under
//! the write lock, then (with the lock released) every subscriber is called
//! once with the new state. Subscribers are how the host learns it must
//! re-render and how controlled callbacks are fired. A subscriber may update
//! the scope again; that change is delivered after the current one.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, Weak};

use uuid::Uuid;

use crate::error::ConfigError;
use crate::state::State;

/// Unique identity of one bound scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(Uuid);

impl ScopeId {
    /// Create a new unique scope ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, used in element IDs.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The compound widget family a scope belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Accordion,
    Tabs,
    Sidebar,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Accordion => "accordion",
            Family::Tabs => "tabs",
            Family::Sidebar => "sidebar",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Family::Accordion => "Accordion",
            Family::Tabs => "Tabs",
            Family::Sidebar => "Sidebar",
        };
        f.write_str(name)
    }
}

/// Identifies a subscription so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the new state after every change.
pub type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct ScopeInner<S, M> {
    id: ScopeId,
    family: Family,
    state: State<S>,
    metadata: M,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber<S>)>>,
    next_subscription: AtomicU64,
    /// Snapshots waiting to be delivered, oldest first.
    pending: Mutex<VecDeque<S>>,
    /// Set while some call is delivering `pending`.
    notifying: AtomicBool,
}

impl<S, M> ScopeInner<S, M> {
    fn new(family: Family, initial: S, metadata: M) -> Self {
        Self {
            id: ScopeId::new(),
            family,
            state: State::new(initial),
            metadata,
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            pending: Mutex::new(VecDeque::new()),
            notifying: AtomicBool::new(false),
        }
    }

    fn subscribers(&self) -> Vec<Subscriber<S>> {
        let subs = match self.subscribers.read() {
            Ok(subs) => subs,
            Err(poisoned) => poisoned.into_inner(),
        };
        subs.iter().map(|(_, sub)| Arc::clone(sub)).collect()
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<S>> {
        match self.pending.lock() {
            Ok(queue) => queue,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn subscribe(&self, subscriber: Subscriber<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let mut subs = match self.subscribers.write() {
            Ok(subs) => subs,
            Err(poisoned) => poisoned.into_inner(),
        };
        subs.push((id, subscriber));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = match self.subscribers.write() {
            Ok(subs) => subs,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = subs.len();
        subs.retain(|(sub_id, _)| *sub_id != id);
        subs.len() != before
    }
}

/// Releases the delivery flag, also when a subscriber panics.
struct Delivering<'a>(&'a AtomicBool);

impl Drop for Delivering<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: Clone, M> ScopeInner<S, M> {
    fn update(&self, f: impl FnOnce(&mut S) -> bool) -> bool {
        let mut snapshot = None;
        self.state.update(|state| {
            let changed = f(state);
            if changed {
                snapshot = Some(state.clone());
            }
            changed
        });
        let Some(snapshot) = snapshot else {
            return false;
        };

        self.pending().push_back(snapshot);
        self.notify();
        true
    }

    /// Deliver queued snapshots in order, with no lock held while a
    /// subscriber runs.
    ///
    /// An update made from inside a subscriber only queues its snapshot; the
    /// call already delivering picks it up once the current snapshot has
    /// reached every subscriber. Subscribers see states in write order and
    /// their last view is the current state.
    fn notify(&self) {
        loop {
            if self.notifying.swap(true, Ordering::AcqRel) {
                return;
            }
            {
                let _delivering = Delivering(&self.notifying);
                while let Some(snapshot) = self.next_pending() {
                    for subscriber in self.subscribers() {
                        subscriber(&snapshot);
                    }
                }
            }

            // Another thread may have queued a snapshot after the last pop
            // but before the flag was released.
            if self.pending().is_empty() {
                return;
            }
        }
    }

    fn next_pending(&self) -> Option<S> {
        self.pending().pop_front()
    }
}

/// Owning side of a scope. Held by the root widget, never cloned.
pub struct Scope<S, M = ()> {
    inner: Arc<ScopeInner<S, M>>,
}

impl<S, M> Scope<S, M> {
    /// Bind a fresh store holding `initial` and the read-only `metadata`.
    pub fn bind(family: Family, initial: S, metadata: M) -> Self {
        let inner = ScopeInner::new(family, initial, metadata);
        log::debug!("Bound {} scope {}", family, inner.id);
        Self {
            inner: Arc::new(inner),
        }
    }

    /// A capability handle for descendants.
    pub fn handle(&self) -> ScopeHandle<S, M> {
        ScopeHandle {
            inner: Arc::downgrade(&self.inner),
            id: self.inner.id,
            family: self.inner.family,
        }
    }

    pub fn id(&self) -> ScopeId {
        self.inner.id
    }

    pub fn family(&self) -> Family {
        self.inner.family
    }

    pub fn metadata(&self) -> &M {
        &self.inner.metadata
    }

    /// Get a clone of the current state.
    pub fn read(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.get()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.inner.state.with(f)
    }

    /// Apply a change. Subscribers run only when `f` reports a change.
    pub fn update(&self, f: impl FnOnce(&mut S) -> bool) -> bool
    where
        S: Clone,
    {
        self.inner.update(f)
    }

    pub fn subscribe(&self, subscriber: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        self.inner.subscribe(Arc::new(subscriber))
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Whether the state changed since the host last rendered.
    pub fn is_dirty(&self) -> bool {
        self.inner.state.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.inner.state.clear_dirty();
    }
}

impl<S, M> std::fmt::Debug for Scope<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.inner.id)
            .field("family", &self.inner.family)
            .finish()
    }
}

impl<S, M> Drop for Scope<S, M> {
    fn drop(&mut self) {
        log::debug!("Released {} scope {}", self.inner.family, self.inner.id);
    }
}

/// Descendant side of a scope.
///
/// Every access returns [`ConfigError::ScopeDetached`] once the owning
/// [`Scope`] has been dropped.
pub struct ScopeHandle<S, M = ()> {
    inner: Weak<ScopeInner<S, M>>,
    id: ScopeId,
    family: Family,
}

impl<S, M> ScopeHandle<S, M> {
    fn upgrade(&self) -> Result<Arc<ScopeInner<S, M>>, ConfigError> {
        self.inner.upgrade().ok_or(ConfigError::ScopeDetached {
            family: self.family,
        })
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Whether the owning root widget still exists.
    pub fn is_bound(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Element ID for one part of this scope, unique across scopes.
    pub fn element_id(&self, part: &str, id: &str) -> String {
        format!("{}-{}-{}-{}", self.family.as_str(), self.id.short(), part, id)
    }

    /// Get a clone of the current state.
    pub fn read(&self) -> Result<S, ConfigError>
    where
        S: Clone,
    {
        Ok(self.upgrade()?.state.get())
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R, ConfigError> {
        Ok(self.upgrade()?.state.with(f))
    }

    /// Read the scope's static metadata.
    pub fn with_metadata<R>(&self, f: impl FnOnce(&M) -> R) -> Result<R, ConfigError> {
        Ok(f(&self.upgrade()?.metadata))
    }

    /// Apply a change; see [`Scope::update`].
    pub fn update(&self, f: impl FnOnce(&mut S) -> bool) -> Result<bool, ConfigError>
    where
        S: Clone,
    {
        Ok(self.upgrade()?.update(f))
    }

    pub fn subscribe(
        &self,
        subscriber: impl Fn(&S) + Send + Sync + 'static,
    ) -> Result<SubscriptionId, ConfigError> {
        Ok(self.upgrade()?.subscribe(Arc::new(subscriber)))
    }
}

impl<S, M> Clone for ScopeHandle<S, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
            id: self.id,
            family: self.family,
        }
    }
}

impl<S, M> std::fmt::Debug for ScopeHandle<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeHandle")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("bound", &self.is_bound())
            .finish()
    }
}
