//! # Shared API Client
//!
//! One `ApiClient` is built at startup and shared by every resource
//! handle. It owns the HTTP connection pool, the backend base URL, and
//! the bearer-token slot that the auth flow writes into.
//!
//! ## Token Slot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bearer Token Lifecycle                              │
//! │                                                                         │
//! │  startup ── restore persisted session ──► set_token(Some(token))       │
//! │  login   ── /auth/authenticate 200    ──► set_token(Some(token))       │
//! │  logout  ──────────────────────────────► set_token(None)               │
//! │                                                                         │
//! │  Every request:                                                        │
//! │    token slot Some(t) ──► Authorization: Bearer t                      │
//! │    token slot None    ──► header omitted (auth endpoints only)         │
//! │                                                                         │
//! │  The slot is the request-interceptor analog: resource handles never    │
//! │  see tokens, they just go through the shared client.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Shared HTTP client for the ERP backend.
///
/// Cloning is cheap and shares the pool and token slot.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Creates a client for the given base URL (no trailing slash
    /// required; paths are joined with one).
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Stores the bearer token attached to subsequent requests, or
    /// clears it on logout.
    pub async fn set_token(&self, token: Option<String>) {
        let mut slot = self.token.write().await;
        *slot = token;
    }

    /// Whether a token is currently attached.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Joins a path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with the bearer header attached when present.
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and decodes a JSON body on success.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "backend rejected request");
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    /// Sends a request and discards the body on success. Used for the
    /// delete and action endpoints, which answer with no payload.
    async fn send_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "backend rejected request");
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    // -------------------------------------------------------------------------
    // Verb helpers used by the resource handles
    // -------------------------------------------------------------------------

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let builder = self.request(Method::GET, path).await;
        self.send_json(builder).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<T> {
        let builder = self.request(Method::GET, path).await.query(query);
        self.send_json(builder).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.send_json(builder).await
    }

    /// POST with a JSON body but no response payload.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.send_unit(builder).await
    }

    /// POST with no body and no response payload (the ship action).
    pub(crate) async fn post_action(&self, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::POST, path).await;
        self.send_unit(builder).await
    }

    /// POST with query parameters and neither request nor response body
    /// (the receive action endpoint).
    pub(crate) async fn post_query_unit<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ApiResult<()> {
        let builder = self.request(Method::POST, path).await.query(query);
        self.send_unit(builder).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(Method::PUT, path).await.json(body);
        self.send_json(builder).await
    }

    /// PUT with query parameters only (the status-update endpoints send
    /// the new status as a query param, not a body).
    pub(crate) async fn put_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<T> {
        let builder = self.request(Method::PUT, path).await.query(query);
        self.send_json(builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, path).await;
        self.send_unit(builder).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_slot_lifecycle() {
        let client = ApiClient::new("http://localhost:8080/api/v1");
        assert!(!client.has_token().await);

        client.set_token(Some("jwt".to_string())).await;
        assert!(client.has_token().await);

        client.set_token(None).await;
        assert!(!client.has_token().await);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/v1/");
        assert_eq!(client.url("/products"), "http://localhost:8080/api/v1/products");
    }

    #[tokio::test]
    async fn test_url_joins_nested_paths() {
        let client = ApiClient::new("http://localhost:8080/api/v1");
        assert_eq!(
            client.url("/purchase-orders/7/receive"),
            "http://localhost:8080/api/v1/purchase-orders/7/receive"
        );
    }
}
