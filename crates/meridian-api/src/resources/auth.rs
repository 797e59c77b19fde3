//! Authentication endpoints.
//!
//! Register deliberately returns the response without touching the token
//! slot: registering does not log the user in. The auth command decides
//! what to do with a successful authenticate response (store the token,
//! persist the session).

use meridian_core::{AuthenticationRequest, AuthenticationResponse, RegisterRequest};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/auth/*`.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Authentication endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthenticationResponse> {
        self.client.post("/auth/register", request).await
    }

    /// `POST /auth/authenticate`
    pub async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> ApiResult<AuthenticationResponse> {
        self.client.post("/auth/authenticate", request).await
    }
}
