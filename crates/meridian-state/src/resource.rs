//! # Resource State
//!
//! The `{ items, status, error }` triple held for every backend resource,
//! with pure reducer methods for each observable phase of the request
//! lifecycle.
//!
//! ## Reducer Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Phase                     Effect on state                              │
//! │  ─────                     ───────────────                              │
//! │  fetch_pending             status = Loading, error cleared              │
//! │  fetch_fulfilled(items)    items replaced wholesale, status = Succeeded │
//! │  fetch_rejected(msg)       status = Failed, error = msg, items intact   │
//! │                                                                         │
//! │  mutation_pending          error cleared (list and status untouched)    │
//! │  create_fulfilled(entity)  entity appended                              │
//! │  update_fulfilled(entity)  matching-id entity replaced in place         │
//! │  delete_fulfilled(id)      matching-id entity filtered out              │
//! │  mutation_rejected(msg)    error = msg (list and status untouched)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method is synchronous and side-effect free, so the whole table
//! is unit-testable without any async machinery. The async orchestration
//! lives in [`crate::controller`].

use meridian_core::Entity;
use serde::Serialize;
use tracing::debug;

use crate::status::FetchStatus;

/// State of one resource collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceState<T> {
    /// The collection as of the last successful fetch/mutation response.
    pub items: Vec<T>,
    /// Lifecycle marker; see [`FetchStatus`].
    pub status: FetchStatus,
    /// Human-readable message from the last failed request, if any.
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState {
            items: Vec::new(),
            status: FetchStatus::Idle,
            error: None,
        }
    }
}

impl<T: Entity> ResourceState<T> {
    /// Fetch started: show the spinner, forget the previous error.
    pub fn fetch_pending(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    /// Fetch succeeded: the response array replaces the collection
    /// wholesale. No merging — the backend is the source of truth.
    pub fn fetch_fulfilled(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "collection replaced from fetch");
        self.items = items;
        self.status = FetchStatus::Succeeded;
    }

    /// Fetch failed: keep whatever data we had, record why.
    pub fn fetch_rejected(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }

    /// Mutation started: clear the previous error. The list and status
    /// stay put so existing data keeps rendering underneath the request.
    pub fn mutation_pending(&mut self) {
        self.error = None;
    }

    /// Create succeeded: append the server-returned entity (it carries
    /// the server-assigned id).
    pub fn create_fulfilled(&mut self, entity: T) {
        self.items.push(entity);
    }

    /// Update succeeded: replace the matching record with the response.
    /// A missing id is a no-op; the next refetch reconciles.
    pub fn update_fulfilled(&mut self, entity: T) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id() == entity.id()) {
            *existing = entity;
        }
    }

    /// Delete succeeded: drop the record with the deleted id.
    pub fn delete_fulfilled(&mut self, id: i64) {
        self.items.retain(|item| item.id() != id);
    }

    /// Mutation failed: record the message, leave the data alone.
    pub fn mutation_rejected(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Linear lookup by id, for client-side foreign-key resolution.
    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::Category;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_fetch_lifecycle_success() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_pending();
        assert_eq!(state.status, FetchStatus::Loading);
        assert!(state.error.is_none());

        let response = vec![category(1, "Electronics"), category(2, "Furniture")];
        state.fetch_fulfilled(response.clone());
        assert_eq!(state.status, FetchStatus::Succeeded);
        assert_eq!(state.items, response);
    }

    #[test]
    fn test_failed_fetch_keeps_prior_items() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(1, "Electronics")]);

        state.fetch_pending();
        state.fetch_rejected("Failed to fetch categories");

        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch categories"));
        assert_eq!(state.items, vec![category(1, "Electronics")]);
    }

    #[test]
    fn test_fetch_pending_clears_error() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_rejected("boom");
        state.fetch_pending();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_create_appends_exactly_once() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(1, "Electronics")]);
        state.create_fulfilled(category(9, "Stationery"));

        let matches: Vec<_> = state.items.iter().filter(|c| c.id == 9).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_update_replaces_only_matching_entity() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(1, "Electronics"), category(2, "Furniture")]);

        state.update_fulfilled(category(2, "Office Furniture"));

        assert_eq!(state.items[0], category(1, "Electronics"));
        assert_eq!(state.items[1], category(2, "Office Furniture"));
    }

    #[test]
    fn test_update_with_unknown_id_is_noop() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(1, "Electronics")]);
        state.update_fulfilled(category(42, "Ghost"));
        assert_eq!(state.items, vec![category(1, "Electronics")]);
    }

    #[test]
    fn test_delete_removes_matching_id() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(5, "Toys")]);
        state.delete_fulfilled(5);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_mutation_does_not_touch_status() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(1, "Electronics")]);

        state.mutation_pending();
        state.mutation_rejected("Failed to create category");

        assert_eq!(state.status, FetchStatus::Succeeded);
        assert_eq!(state.error.as_deref(), Some("Failed to create category"));
    }

    #[test]
    fn test_find_resolves_foreign_key() {
        let mut state: ResourceState<Category> = ResourceState::default();
        state.fetch_fulfilled(vec![category(1, "Electronics"), category(2, "Furniture")]);
        assert_eq!(state.find(2).map(|c| c.name.as_str()), Some("Furniture"));
        assert!(state.find(3).is_none());
    }
}
