//! Theme scopes
//!
//! A scope makes one [`ThemeStore`] the active theme for the code running
//! inside it on the current thread. Consumers deep in a component tree call
//! [`use_theme`] instead of threading the store through every call.
//!
//! Scopes nest: the innermost entered scope wins, and each scope owns its own
//! store. Calling [`use_theme`] outside any scope is a wiring defect and
//! fails with [`ThemeError::MissingScope`]; there is no fallback theme.
//!
//! ```rust
//! use motif_theme::{create_theme_scope, use_theme, ThemeError};
//!
//! assert!(matches!(use_theme(), Err(ThemeError::MissingScope)));
//!
//! let scope = create_theme_scope(None).unwrap();
//! scope.provide(|| {
//!     let ctx = use_theme().unwrap();
//!     assert_eq!(ctx.theme.styles.colors.primary, "#000000");
//! });
//! ```

use crate::document::{StyleSet, ThemeDocument};
use crate::error::{Result, ThemeError};
use crate::patch::StylePatch;
use crate::processor::ProcessedTheme;
use crate::store::ThemeStore;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::sync::Arc;

thread_local! {
    /// Entered scopes on this thread as `(entry id, store)`, innermost last
    static SCOPE_STACK: RefCell<Vec<(u64, ThemeStore)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ENTRY: Cell<u64> = const { Cell::new(0) };
}

/// Create a scope with its own store, starting from `initial` or the
/// built-in default document.
pub fn create_theme_scope(initial: Option<ThemeDocument>) -> Result<ThemeScope> {
    let store = match initial {
        Some(document) => ThemeStore::new(document)?,
        None => ThemeStore::default(),
    };
    Ok(ThemeScope::new(store))
}

/// Theme context of the innermost active scope
pub fn use_theme() -> Result<ThemeContext> {
    current_store()
        .map(ThemeContext::new)
        .ok_or(ThemeError::MissingScope)
}

/// Like [`use_theme`], but panics outside a scope
pub fn expect_theme() -> ThemeContext {
    match use_theme() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}

/// Store of the innermost active scope, if any
pub fn current_store() -> Option<ThemeStore> {
    SCOPE_STACK.with(|stack| stack.borrow().last().map(|(_, store)| store.clone()))
}

/// Lifetime boundary of one active theme
#[derive(Clone, Debug)]
pub struct ThemeScope {
    store: ThemeStore,
}

impl ThemeScope {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Make this scope the innermost active scope until the guard drops.
    ///
    /// Dropping a guard exits only its own entry, so guards may be dropped
    /// in any order; the most recently entered live scope stays innermost.
    #[must_use = "the scope is exited as soon as the guard is dropped"]
    pub fn enter(&self) -> ScopeGuard {
        let entry = NEXT_ENTRY.with(|next| {
            let entry = next.get();
            next.set(entry + 1);
            entry
        });
        let depth = SCOPE_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push((entry, self.store.clone()));
            stack.len()
        });
        tracing::trace!("entered theme scope {} (depth {})", entry, depth);
        ScopeGuard {
            entry,
            _not_send: PhantomData,
        }
    }

    /// Run `f` with this scope active
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

/// Keeps a scope active; exits it on drop
///
/// Tied to the thread that entered the scope.
#[derive(Debug)]
pub struct ScopeGuard {
    entry: u64,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPE_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|(entry, _)| *entry == self.entry) {
                stack.remove(pos);
            }
        });
        tracing::trace!("exited theme scope {}", self.entry);
    }
}

/// What a consumer sees inside a scope: the theme as of the
/// [`use_theme`] call plus the two mutation operations.
#[derive(Clone, Debug)]
pub struct ThemeContext {
    /// Processed theme snapshot
    pub theme: Arc<ProcessedTheme>,
    store: ThemeStore,
}

impl ThemeContext {
    fn new(store: ThemeStore) -> Self {
        Self {
            theme: store.read(),
            store,
        }
    }

    /// Replace the subsystems present in `patch`
    pub fn update_theme(&self, patch: StylePatch) -> Result<()> {
        self.store.update(patch)
    }

    /// Edit individual fields of the current styles
    pub fn update_theme_with(&self, edit: impl FnOnce(&mut StyleSet)) -> Result<()> {
        self.store.update_with(edit)
    }

    /// Replace the whole document
    pub fn set_theme(&self, document: ThemeDocument) -> Result<()> {
        self.store.replace(document)
    }

    /// Latest view, including mutations made after this context was taken
    pub fn current(&self) -> Arc<ProcessedTheme> {
        self.store.read()
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn innermost_scope_wins() {
        let outer = create_theme_scope(None).unwrap();
        let inner_doc = ThemeDocument {
            id: "inner".into(),
            ..default_document()
        };
        let inner = create_theme_scope(Some(inner_doc)).unwrap();

        outer.provide(|| {
            assert_eq!(use_theme().unwrap().theme.id, "default");
            inner.provide(|| {
                assert_eq!(use_theme().unwrap().theme.id, "inner");
            });
            assert_eq!(use_theme().unwrap().theme.id, "default");
        });
        assert!(current_store().is_none());
    }

    fn named_scope(id: &str) -> ThemeScope {
        create_theme_scope(Some(ThemeDocument {
            id: id.into(),
            ..default_document()
        }))
        .unwrap()
    }

    fn active_id() -> String {
        use_theme().unwrap().theme.id.clone()
    }

    #[test]
    fn dropping_outer_guard_keeps_inner_scope_active() {
        let outer = named_scope("outer");
        let inner = named_scope("inner");

        let outer_guard = outer.enter();
        let inner_guard = inner.enter();
        drop(outer_guard);
        assert_eq!(active_id(), "inner");
        drop(inner_guard);
        assert!(current_store().is_none());
    }

    #[test]
    fn out_of_order_drops_leave_newest_live_scope_innermost() {
        let [a, b, c, d] = ["a", "b", "c", "d"].map(named_scope);

        let guard_a = a.enter();
        let guard_b = b.enter();
        drop(guard_a);
        let guard_c = c.enter();
        let guard_d = d.enter();
        drop(guard_b);
        assert_eq!(active_id(), "d");

        drop(guard_d);
        assert_eq!(active_id(), "c");
        drop(guard_c);
        assert!(current_store().is_none());
    }

    #[test]
    fn same_scope_entered_twice_exits_one_entry_at_a_time() {
        let outer = named_scope("outer");
        let inner = named_scope("inner");

        let first = inner.enter();
        let _outer_guard = outer.enter();
        let second = inner.enter();
        drop(first);
        assert_eq!(active_id(), "inner");
        drop(second);
        assert_eq!(active_id(), "outer");
    }

    #[test]
    fn scope_is_exited_when_provide_panics() {
        let scope = create_theme_scope(None).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            scope.provide(|| panic!("consumer failed"));
        }));
        assert!(result.is_err());
        assert!(current_store().is_none());
    }

    #[test]
    fn context_snapshot_versus_current() {
        let scope = create_theme_scope(None).unwrap();
        let _guard = scope.enter();
        let ctx = use_theme().unwrap();

        ctx.update_theme_with(|styles| styles.colors.primary = "#FF0000".into())
            .unwrap();

        assert_eq!(ctx.theme.styles.colors.primary, "#000000");
        assert_eq!(ctx.current().styles.colors.primary, "#FF0000");
        assert_eq!(use_theme().unwrap().theme.styles.colors.primary, "#FF0000");
    }

    #[test]
    #[should_panic(expected = "no theme scope is active")]
    fn expect_theme_panics_outside_scope() {
        let _ = expect_theme();
    }
}
