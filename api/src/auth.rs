//! Account operations: login, profile, registration, email verification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Authentication, Registration, UserProfile, Verification};

#[derive(Serialize)]
struct LoginRequest<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Client for the `accounts/` endpoints.
#[derive(Debug, Clone, Default)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for an auth token.
    pub async fn login(&self, login: &str, password: &str) -> Result<String, ApiError> {
        let response: LoginResponse = self
            .client
            .post_json("accounts/login/", &LoginRequest { login, password }, None)
            .await?;
        Ok(response.token)
    }

    /// Fetch the profile belonging to `auth_token`.
    pub async fn get_profile(&self, auth_token: &str) -> Result<UserProfile, ApiError> {
        self.client
            .get_json("accounts/profile/", Some(auth_token))
            .await
    }

    /// Log in, then fetch the profile with the fresh token. The first failure
    /// short-circuits; callers never observe a token without its profile.
    pub async fn get_auth_token_with_user_profile(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Authentication, ApiError> {
        let token = self.login(login, password).await?;
        let user = self.get_profile(&token).await?;
        Ok(Authentication { token, user })
    }

    /// Create an account. The backend follows up with a verification email;
    /// the session is unaffected until the user verifies and signs in.
    pub async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        self.client
            .post_json("accounts/register/", registration, None)
            .await
    }

    /// Confirm the parameters of an email-verification link.
    pub async fn verify_user(&self, verification: &Verification) -> Result<Value, ApiError> {
        self.client
            .post_json("accounts/verify-registration/", verification, None)
            .await
    }
}
