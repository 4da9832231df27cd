//! HTTP client base shared by every service.

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Default location of the REST backend.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/api/";

/// Thin wrapper around [`reqwest::Client`] that speaks the backend's dialect:
/// JSON bodies, JSON responses, and token auth via the `Authorization`
/// header. One attempt per call; no retries, no timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against [`DEFAULT_SERVER_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_SERVER_URL)
    }

    /// Client against a non-default backend, e.g. a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON response.
    pub async fn get_json<T>(&self, path: &str, auth_token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .get(self.endpoint(path))
            .header(header::ACCEPT, "application/json");
        Self::handle_json_response(authorize(request, auth_token).send().await).await
    }

    /// POST a JSON `body` to `path` and decode the JSON response.
    pub async fn post_json<T, B>(
        &self,
        path: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.endpoint(path))
            .header(header::ACCEPT, "application/json")
            .json(body);
        Self::handle_json_response(authorize(request, auth_token).send().await).await
    }

    /// POST to `path` with an empty body. Detail actions carry no payload.
    pub async fn post_action<T>(&self, path: &str, auth_token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.endpoint(path))
            .header(header::ACCEPT, "application/json");
        Self::handle_json_response(authorize(request, auth_token).send().await).await
    }

    async fn handle_json_response<T>(
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = result?;
        let status = response.status().as_u16();
        if status >= 400 {
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }
}

fn authorize(
    request: reqwest::RequestBuilder,
    auth_token: Option<&str>,
) -> reqwest::RequestBuilder {
    match auth_token {
        Some(token) => request.header(header::AUTHORIZATION, format!("Token {token}")),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Json;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use serde_json::{json, Value};

    use super::*;
    use crate::testing;

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:8000/api");
        assert_eq!(client.base_url(), "http://localhost:8000/api/");

        let client = ApiClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api/");
    }

    #[tokio::test]
    async fn get_json_resolves_the_parsed_body() {
        let router =
            Router::new().route("/api/ping/", get(|| async { Json(json!({"pong": true})) }));
        let client = ApiClient::with_base_url(testing::serve(router).await);

        let value: Value = client.get_json("ping/", None).await.unwrap();
        assert_eq!(value, json!({"pong": true}));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_its_code() {
        let router = Router::new().route(
            "/api/ping/",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "missing"}))) }),
        );
        let client = ApiClient::with_base_url(testing::serve(router).await);

        let err = client.get_json::<Value>("ping/", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(404)));
        assert_eq!(err.to_string(), "HTTP 404");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn transport_failure_is_a_generic_communication_error() {
        // Discard port; nothing listens there.
        let client = ApiClient::with_base_url("http://127.0.0.1:9/api/");

        let err = client.get_json::<Value>("ping/", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Communication(_)));
        assert_eq!(err.to_string(), "communication error");
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn requests_always_ask_for_json() {
        let router = Router::new().route(
            "/api/headers/",
            get(|headers: HeaderMap| async move {
                let accept = headers
                    .get("accept")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                Json(json!({ "accept": accept }))
            }),
        );
        let client = ApiClient::with_base_url(testing::serve(router).await);

        let value: Value = client.get_json("headers/", None).await.unwrap();
        assert_eq!(value["accept"], json!("application/json"));
    }

    #[tokio::test]
    async fn auth_token_controls_the_authorization_header() {
        let router = Router::new().route(
            "/api/headers/",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                Json(json!({ "authorization": auth }))
            }),
        );
        let client = ApiClient::with_base_url(testing::serve(router).await);

        let with_token: Value = client.get_json("headers/", Some("abc")).await.unwrap();
        assert_eq!(with_token["authorization"], json!("Token abc"));

        let without_token: Value = client.get_json("headers/", None).await.unwrap();
        assert_eq!(without_token["authorization"], json!(null));
    }

    #[tokio::test]
    async fn post_action_sends_an_empty_body() {
        let router = Router::new().route(
            "/api/things/1/poke/",
            post(|body: String| async move { Json(json!({ "body": body })) }),
        );
        let client = ApiClient::with_base_url(testing::serve(router).await);

        let value: Value = client.post_action("things/1/poke/", Some("abc")).await.unwrap();
        assert_eq!(value["body"], json!(""));
    }
}
