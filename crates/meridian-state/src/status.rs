//! # Fetch Status
//!
//! The lifecycle marker attached to every resource store. Governs whether
//! `items` and `error` are trustworthy: only `Succeeded` means the
//! collection mirrors the backend, and only `Failed` means `error` is
//! worth rendering.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Request-lifecycle status of a resource store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FetchStatus {
    /// Nothing fetched yet; a mount should trigger the initial fetch.
    #[default]
    Idle,
    /// A fetch is in flight. Further fetches must not be started.
    Loading,
    /// The collection mirrors the last backend response.
    Succeeded,
    /// The last fetch failed; `error` holds the message, `items` still
    /// holds whatever the previous successful fetch produced.
    Failed,
}

impl FetchStatus {
    /// Whether a mount-triggered fetch should run.
    pub fn should_fetch(self) -> bool {
        self == FetchStatus::Idle
    }

    /// Whether a spinner should be shown instead of data.
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }

    #[test]
    fn test_wire_strings_are_lowercase() {
        assert_eq!(serde_json::to_string(&FetchStatus::Succeeded).unwrap(), "\"succeeded\"");
        let parsed: FetchStatus = serde_json::from_str("\"loading\"").unwrap();
        assert_eq!(parsed, FetchStatus::Loading);
    }

    #[test]
    fn test_only_idle_triggers_fetch() {
        assert!(FetchStatus::Idle.should_fetch());
        assert!(!FetchStatus::Loading.should_fetch());
        assert!(!FetchStatus::Succeeded.should_fetch());
        assert!(!FetchStatus::Failed.should_fetch());
    }
}
