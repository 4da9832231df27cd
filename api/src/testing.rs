//! Test-only loopback backend.

use axum::Router;

/// Serve `router` on an ephemeral loopback port and return a base URL ending
/// in `/api/`, ready for [`crate::ApiClient::with_base_url`].
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/")
}
