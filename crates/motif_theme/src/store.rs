//! Theme store
//!
//! A [`ThemeStore`] owns exactly one live [`ThemeDocument`] and hands out
//! read-only processed views. Mutation goes through [`ThemeStore::update`]
//! and [`ThemeStore::replace`]; every committed mutation bumps the revision
//! and synchronously notifies subscribers.
//!
//! Stores are handles: cloning shares the same document. Independent stores
//! never share state.

use crate::document::{StyleSet, ThemeDocument};
use crate::error::{Result, ThemeError};
use crate::patch::{StylePatch, Subsystem};
use crate::processor::{process, ProcessedTheme};
use indexmap::IndexMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

/// Callback invoked with the new view after each committed mutation
pub type ThemeListener = Arc<dyn Fn(&ProcessedTheme) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct StoreState {
    document: ThemeDocument,
    /// Processed view of `document`, rebuilt on every commit
    processed: Arc<ProcessedTheme>,
    revision: u64,
}

struct StoreInner {
    state: RwLock<StoreState>,
    listeners: Mutex<IndexMap<SubscriptionId, ThemeListener>>,
    next_subscription: AtomicU64,
}

/// Shared handle to one theme document
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store holding `document`
    pub fn new(document: ThemeDocument) -> Result<Self> {
        document
            .validate()
            .map_err(|v| ThemeError::InvalidDocument(v.to_string()))?;
        Ok(Self::new_unchecked(document))
    }

    fn new_unchecked(document: ThemeDocument) -> Self {
        tracing::debug!("ThemeStore::new - theme '{}'", document.id);
        let processed = Arc::new(process(&document));
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(StoreState {
                    document,
                    processed,
                    revision: 0,
                }),
                listeners: Mutex::new(IndexMap::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    // ========== Read Access ==========

    /// Current processed view. Repeated reads without an intervening
    /// mutation return the same view.
    pub fn read(&self) -> Arc<ProcessedTheme> {
        self.read_state().processed.clone()
    }

    /// Copy of the raw stored document
    pub fn document(&self) -> ThemeDocument {
        self.read_state().document.clone()
    }

    /// Copy of the current style set
    pub fn styles(&self) -> StyleSet {
        self.read_state().document.styles.clone()
    }

    /// Number of committed mutations since creation
    pub fn revision(&self) -> u64 {
        self.read_state().revision
    }

    /// True when both handles point at the same store
    pub fn ptr_eq(&self, other: &ThemeStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ========== Mutation ==========

    /// Replace each subsystem present in `patch`.
    ///
    /// The patch is validated before anything changes; a malformed patch
    /// leaves the store untouched. An empty patch is a no-op and does not
    /// notify subscribers.
    pub fn update(&self, patch: StylePatch) -> Result<()> {
        let subsystems = patch.subsystems();
        if subsystems.is_empty() {
            tracing::trace!("ThemeStore::update - empty patch ignored");
            return Ok(());
        }
        patch
            .validate()
            .map_err(|v| ThemeError::MalformedDelta(v.to_string()))?;

        let processed = {
            let mut state = self.write_state();
            patch.apply_to(&mut state.document.styles);
            let processed = self.commit(&mut state);
            tracing::debug!(
                "ThemeStore::update - replaced {} on '{}' (revision {})",
                subsystem_names(&subsystems),
                state.document.id,
                state.revision
            );
            processed
        };

        self.notify(&processed);
        Ok(())
    }

    /// Edit a copy of the current styles and commit the subsystems the edit
    /// changed.
    ///
    /// This is the way to change single fields inside a subsystem. `edit`
    /// runs with no lock held, so it may read or mutate the store. Subsystems
    /// it leaves alone keep whatever was committed in the meantime; each
    /// edited subsystem is written whole, as with [`ThemeStore::update`].
    /// Nothing is committed when the edit changes nothing.
    pub fn update_with(&self, edit: impl FnOnce(&mut StyleSet)) -> Result<()> {
        let before = self.styles();
        let mut after = before.clone();
        edit(&mut after);
        self.update(StylePatch::changes(&before, after))
    }

    /// Discard the current document and adopt `next` in full
    pub fn replace(&self, next: ThemeDocument) -> Result<()> {
        next.validate()
            .map_err(|v| ThemeError::InvalidDocument(v.to_string()))?;

        let processed = {
            let mut state = self.write_state();
            tracing::debug!(
                "ThemeStore::replace - '{}' -> '{}'",
                state.document.id,
                next.id
            );
            state.document = next;
            self.commit(&mut state)
        };

        self.notify(&processed);
        Ok(())
    }

    // ========== Subscriptions ==========

    /// Register a listener called after every committed mutation
    pub fn subscribe(
        &self,
        listener: impl Fn(&ProcessedTheme) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(
            self.inner
                .next_subscription
                .fetch_add(1, Ordering::Relaxed),
        );
        self.listeners().insert(id, Arc::new(listener));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners().shift_remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners().len()
    }

    // ========== Internals ==========

    fn commit(&self, state: &mut StoreState) -> Arc<ProcessedTheme> {
        state.revision += 1;
        state.processed = Arc::new(process(&state.document));
        state.processed.clone()
    }

    /// Call listeners in subscription order with no lock held, so they may
    /// read or mutate the store.
    fn notify(&self, processed: &ProcessedTheme) {
        let listeners: Vec<ThemeListener> = self.listeners().values().cloned().collect();
        tracing::trace!("ThemeStore - notifying {} listener(s)", listeners.len());
        for listener in listeners {
            listener(processed);
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, IndexMap<SubscriptionId, ThemeListener>> {
        self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ThemeStore {
    /// Store holding the built-in default document
    fn default() -> Self {
        Self::new_unchecked(crate::defaults::default_document())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("ThemeStore")
            .field("theme", &state.document.id)
            .field("revision", &state.revision)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

fn subsystem_names(subsystems: &[Subsystem]) -> String {
    subsystems
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}
