//! Link collection operations and the vote detail actions.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Link;

const ENDPOINT: &str = "links/";

#[derive(Serialize)]
struct AddLinkRequest<'a> {
    title: &'a str,
    url: &'a str,
}

/// Client for the `links/` endpoints.
///
/// Nothing here mutates local state; after a successful mutation the caller
/// re-fetches the list.
#[derive(Debug, Clone, Default)]
pub struct LinksService {
    client: ApiClient,
}

impl LinksService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every link. No authentication required.
    pub async fn list(&self) -> Result<Vec<Link>, ApiError> {
        self.client.get_json(ENDPOINT, None).await
    }

    /// Submit a new link; the backend answers with the stored row.
    pub async fn add(&self, title: &str, url: &str, auth_token: &str) -> Result<Link, ApiError> {
        self.client
            .post_json(ENDPOINT, &AddLinkRequest { title, url }, Some(auth_token))
            .await
    }

    /// POST to the resource-scoped action `links/<id>/<name>/`. Actions
    /// without a payload send an empty body.
    pub async fn call_detail_action(
        &self,
        name: &str,
        link_id: i64,
        data: Option<&Value>,
        auth_token: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("{ENDPOINT}{link_id}/{name}/");
        match data {
            Some(body) => self.client.post_json(&path, body, Some(auth_token)).await,
            None => self.client.post_action(&path, Some(auth_token)).await,
        }
    }

    pub async fn vote_up(&self, link_id: i64, auth_token: &str) -> Result<Value, ApiError> {
        self.call_detail_action("vote_up", link_id, None, auth_token)
            .await
    }

    pub async fn vote_down(&self, link_id: i64, auth_token: &str) -> Result<Value, ApiError> {
        self.call_detail_action("vote_down", link_id, None, auth_token)
            .await
    }
}
