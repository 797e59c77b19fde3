//! # Resource Controller
//!
//! One generic async controller drives the request lifecycle for every
//! resource, instead of a hand-copied state machine per resource type.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Controller Operations                                   │
//! │                                                                         │
//! │  Command                 Controller                Reducers applied     │
//! │  ───────                 ──────────                ────────────────     │
//! │                                                                         │
//! │  fetch_products ───────► fetch_all(op)   ────────► fetch_pending        │
//! │                          │  (only when Idle)       fetch_fulfilled /    │
//! │                          │                         fetch_rejected       │
//! │                          └─ otherwise: no call, current items returned  │
//! │                                                                         │
//! │  create_product ───────► create(op) ─────────────► mutation_pending     │
//! │                                                    create_fulfilled /   │
//! │                                                    mutation_rejected    │
//! │                                                                         │
//! │  receive_order ────────► act_and_refresh(a, f) ──► fetch_pending        │
//! │                          action, then full fetch   fetch_fulfilled /    │
//! │                          (server computes status)  fetch_rejected       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! State lives behind a `std::sync::Mutex` that is only ever held for the
//! duration of a reducer call, never across an `await`. The idle guard is
//! check-and-set under one lock acquisition, so two concurrent mounts
//! cannot both start a fetch.
//!
//! ## Cancellation
//! In-flight requests are not cancelled. A page switching away leaves the
//! request running; whichever response resolves last wins the store
//! (last-writer-wins), which is safe here because fetches replace the
//! collection wholesale and mutations apply server-confirmed records.

use std::future::Future;
use std::sync::{Arc, Mutex};

use meridian_core::Entity;
use tracing::{debug, warn};

use crate::resource::ResourceState;

/// Shared, lifecycle-managed state for one resource collection.
///
/// Cloning the store clones the handle, not the data; all clones share
/// the same underlying state.
#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    /// Resource name for log lines ("products", "purchase-orders", …).
    name: &'static str,
    state: Arc<Mutex<ResourceState<T>>>,
}

impl<T: Entity + Clone> ResourceStore<T> {
    /// Creates an empty store in the `Idle` state.
    pub fn new(name: &'static str) -> Self {
        ResourceStore {
            name,
            state: Arc::new(Mutex::new(ResourceState::default())),
        }
    }

    /// Executes a function with read access to the state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ResourceState<T>) -> R,
    {
        let state = self.state.lock().expect("resource state mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ResourceState<T>) -> R,
    {
        let mut state = self.state.lock().expect("resource state mutex poisoned");
        f(&mut state)
    }

    /// Returns a point-in-time copy of the full state triple.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.with_state(|state| state.clone())
    }

    /// Fetches the collection, but only when the store is `Idle`.
    ///
    /// This is the duplicate-fetch guard: repeat mounts and concurrent
    /// pages asking for the same resource result in exactly one network
    /// call. When the store is already `Loading`/`Succeeded`/`Failed`,
    /// the current items are returned and `fetch` is never invoked.
    pub async fn fetch_all<F, Fut>(&self, fetch: F) -> Result<Vec<T>, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, String>>,
    {
        let should_fetch = self.with_state_mut(|state| {
            if state.status.should_fetch() {
                state.fetch_pending();
                true
            } else {
                false
            }
        });

        if !should_fetch {
            debug!(resource = self.name, "fetch skipped, store not idle");
            return Ok(self.with_state(|state| state.items.clone()));
        }

        self.complete_fetch(fetch().await)
    }

    /// Fetches the collection unconditionally, bypassing the idle guard.
    ///
    /// Used for explicit user retries and for refetch-after-mutation,
    /// where the whole point is to discard the cached collection.
    pub async fn refresh<F, Fut>(&self, fetch: F) -> Result<Vec<T>, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, String>>,
    {
        self.with_state_mut(|state| state.fetch_pending());
        self.complete_fetch(fetch().await)
    }

    /// Applies the fulfilled/rejected reducer for a finished fetch.
    fn complete_fetch(&self, outcome: Result<Vec<T>, String>) -> Result<Vec<T>, String> {
        match outcome {
            Ok(items) => {
                debug!(resource = self.name, count = items.len(), "fetch succeeded");
                self.with_state_mut(|state| state.fetch_fulfilled(items.clone()));
                Ok(items)
            }
            Err(message) => {
                warn!(resource = self.name, error = %message, "fetch failed");
                self.with_state_mut(|state| state.fetch_rejected(message.clone()));
                Err(message)
            }
        }
    }

    /// Runs a create mutation: on success the server-returned entity
    /// (carrying its assigned id) is appended to the collection.
    pub async fn create<F, Fut>(&self, create: F) -> Result<T, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, String>>,
    {
        self.with_state_mut(|state| state.mutation_pending());
        match create().await {
            Ok(entity) => {
                self.with_state_mut(|state| state.create_fulfilled(entity.clone()));
                Ok(entity)
            }
            Err(message) => {
                warn!(resource = self.name, error = %message, "create failed");
                self.with_state_mut(|state| state.mutation_rejected(message.clone()));
                Err(message)
            }
        }
    }

    /// Runs an update mutation: on success the response entity replaces
    /// the matching record in place.
    pub async fn update<F, Fut>(&self, update: F) -> Result<T, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, String>>,
    {
        self.with_state_mut(|state| state.mutation_pending());
        match update().await {
            Ok(entity) => {
                self.with_state_mut(|state| state.update_fulfilled(entity.clone()));
                Ok(entity)
            }
            Err(message) => {
                warn!(resource = self.name, error = %message, "update failed");
                self.with_state_mut(|state| state.mutation_rejected(message.clone()));
                Err(message)
            }
        }
    }

    /// Runs a delete mutation: on success the record with `id` is
    /// filtered out of the collection.
    pub async fn delete<F, Fut>(&self, id: i64, delete: F) -> Result<(), String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        self.with_state_mut(|state| state.mutation_pending());
        match delete().await {
            Ok(()) => {
                self.with_state_mut(|state| state.delete_fulfilled(id));
                Ok(())
            }
            Err(message) => {
                warn!(resource = self.name, id, error = %message, "delete failed");
                self.with_state_mut(|state| state.mutation_rejected(message.clone()));
                Err(message)
            }
        }
    }

    /// Runs a state-changing action (receive, ship, pay) and then
    /// refetches the whole collection.
    ///
    /// The action endpoints return no body; order status and totals are
    /// server-computed, so patching locally is impossible — the refetch
    /// trades bandwidth for correctness. When the action itself fails the
    /// refetch is skipped and the store is marked failed.
    pub async fn act_and_refresh<A, AFut, F, FFut>(&self, action: A, fetch: F) -> Result<Vec<T>, String>
    where
        A: FnOnce() -> AFut,
        AFut: Future<Output = Result<(), String>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<Vec<T>, String>>,
    {
        self.with_state_mut(|state| state.fetch_pending());
        if let Err(message) = action().await {
            warn!(resource = self.name, error = %message, "action failed");
            self.with_state_mut(|state| state.fetch_rejected(message.clone()));
            return Err(message);
        }
        self.complete_fetch(fetch().await)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::FetchStatus;
    use meridian_core::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_from_idle_makes_one_call() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        let calls = Arc::new(AtomicUsize::new(0));

        let counted = calls.clone();
        let items = store
            .fetch_all(move || async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(vec![category(1, "Electronics")])
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(items, vec![category(1, "Electronics")]);
        assert_eq!(store.snapshot().status, FetchStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_fetch_skipped_when_not_idle() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store
            .fetch_all(|| async { Ok(vec![category(1, "Electronics")]) })
            .await
            .unwrap();

        // Store is now Succeeded: a second mount must not refetch.
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let items = store
            .fetch_all(move || async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(vec![])
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(items, vec![category(1, "Electronics")]);
    }

    #[tokio::test]
    async fn test_fetch_skipped_while_loading() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store.with_state_mut(|state| state.fetch_pending());

        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        store
            .fetch_all(move || async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(vec![])
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot().status, FetchStatus::Loading);
    }

    #[tokio::test]
    async fn test_failed_fetch_records_error_and_keeps_items() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store
            .fetch_all(|| async { Ok(vec![category(1, "Electronics")]) })
            .await
            .unwrap();

        let result = store
            .refresh(|| async { Err("Failed to fetch categories".to_string()) })
            .await;

        assert!(result.is_err());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, FetchStatus::Failed);
        assert_eq!(snapshot.error.as_deref(), Some("Failed to fetch categories"));
        assert_eq!(snapshot.items, vec![category(1, "Electronics")]);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_idle_guard() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store
            .fetch_all(|| async { Ok(vec![category(1, "Electronics")]) })
            .await
            .unwrap();

        let items = store
            .refresh(|| async { Ok(vec![category(1, "Electronics"), category(2, "Furniture")]) })
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(store.snapshot().items.len(), 2);
    }

    #[tokio::test]
    async fn test_create_appends_server_entity() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store.fetch_all(|| async { Ok(vec![]) }).await.unwrap();

        let created = store
            .create(|| async { Ok(category(7, "Stationery")) })
            .await
            .unwrap();

        assert_eq!(created.id, 7);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items, vec![category(7, "Stationery")]);
        // Mutations leave the fetch status alone.
        assert_eq!(snapshot.status, FetchStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_confirmed_delete_empties_singleton_list() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store
            .fetch_all(|| async { Ok(vec![category(5, "Toys")]) })
            .await
            .unwrap();

        store.delete(5, || async { Ok(()) }).await.unwrap();

        assert!(store.snapshot().items.is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_items_and_reports_error() {
        let store: ResourceStore<Category> = ResourceStore::new("categories");
        store
            .fetch_all(|| async { Ok(vec![category(5, "Toys")]) })
            .await
            .unwrap();

        let result = store
            .delete(5, || async { Err("Failed to delete category".to_string()) })
            .await;

        assert!(result.is_err());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items, vec![category(5, "Toys")]);
        assert_eq!(snapshot.error.as_deref(), Some("Failed to delete category"));
    }

    #[tokio::test]
    async fn test_act_and_refresh_runs_action_then_fetch() {
        let store: ResourceStore<Category> = ResourceStore::new("purchase-orders");
        let action_calls = Arc::new(AtomicUsize::new(0));
        let fetch_calls = Arc::new(AtomicUsize::new(0));

        let a = action_calls.clone();
        let f = fetch_calls.clone();
        store
            .act_and_refresh(
                move || async move {
                    a.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                },
                move || async move {
                    f.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![category(1, "refetched")])
                },
            )
            .await
            .unwrap();

        assert_eq!(action_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fetch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.snapshot().items, vec![category(1, "refetched")]);
    }

    #[tokio::test]
    async fn test_act_and_refresh_skips_fetch_on_action_failure() {
        let store: ResourceStore<Category> = ResourceStore::new("purchase-orders");
        let fetch_calls = Arc::new(AtomicUsize::new(0));

        let f = fetch_calls.clone();
        let result = store
            .act_and_refresh(
                || async { Err("Failed to receive order".to_string()) },
                move || async move {
                    f.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![])
                },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(fetch_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot().status, FetchStatus::Failed);
    }
}
