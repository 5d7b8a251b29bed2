#![allow(dead_code)]

use axum::Router;
use shop_admin_analytics::infrastructure::http::ApiClient;
use shop_admin_analytics::state::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{addr}/")).unwrap()
}

pub fn create_client(base_url: Url, retry_attempts: usize, session: SessionStore) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(base_url, Duration::from_secs(5), retry_attempts, session).unwrap())
}

/// Client against `router` with no retries and no session.
pub async fn client_for(router: Router) -> Arc<ApiClient> {
    let base_url = spawn_backend(router).await;
    create_client(base_url, 0, SessionStore::new())
}
