//! Shared HTTP client for the admin backend.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use url::Url;

use crate::config::Config;
use crate::error::{AppError, map_reqwest_error};
use crate::state::SessionStore;

/// Longest pause between two GET attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(2);

/// JSON client for the backend REST API.
///
/// Attaches the current session's bearer token to every request, maps
/// non-success statuses onto [`AppError`], and retries idempotent GETs on
/// transient failures with exponential backoff.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
    retry_attempts: usize,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL cannot carry a path, and
    /// [`AppError::Internal`] if the TLS backend fails to initialize.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        retry_attempts: usize,
        session: SessionStore,
    ) -> Result<Self, AppError> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::bad_request(
                "Backend URL cannot be used as a base",
                json!({ "url": base_url.as_str() }),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::internal("Failed to build HTTP client", json!({ "reason": e.to_string() }))
            })?;

        Ok(Self {
            http,
            base_url,
            session,
            retry_attempts,
        })
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &Config, session: SessionStore) -> Result<Self, AppError> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.api_timeout_seconds),
            config.api_retry_attempts,
            session,
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL.
    ///
    /// Each segment is percent-encoded as a whole, so a `/` inside one
    /// (say, in a plan code) cannot change the route.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GETs `segments` and decodes the body as `T`, retrying transient failures.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.endpoint(segments);
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(MAX_RETRY_DELAY)
            .map(jitter)
            .take(self.retry_attempts);

        RetryIf::spawn(
            strategy,
            || async {
                let request = self.http.get(url.clone()).query(query);
                let body = self.execute(Method::GET, &url, request).await?;
                decode(&url, &body)
            },
            |e: &AppError| {
                let retry = e.is_transient();
                if retry {
                    tracing::warn!(path = url.path(), error = %e, "Retrying backend GET");
                }
                retry
            },
        )
        .await
    }

    /// Sends `body` as JSON with `method` and decodes the response as `T`.
    ///
    /// Never retried.
    pub async fn send<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        let request = self.http.request(method.clone(), url.clone()).json(body);
        let body = self.execute(method, &url, request).await?;
        decode(&url, &body)
    }

    /// Like [`Self::send`] but ignores the response body.
    pub async fn send_discarding<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments);
        let request = self.http.request(method.clone(), url.clone()).json(body);
        self.execute(method, &url, request).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, AppError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let started = Instant::now();
        let result = request.send().await;
        let elapsed = started.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                metrics::counter!(
                    "admin_api_requests_total",
                    "method" => method.to_string(),
                    "status" => "error"
                )
                .increment(1);
                tracing::error!(%method, path = url.path(), error = %e, "Backend request failed");
                return Err(map_reqwest_error(e));
            }
        };

        let status = response.status();
        metrics::counter!(
            "admin_api_requests_total",
            "method" => method.to_string(),
            "status" => status.as_u16().to_string()
        )
        .increment(1);
        metrics::histogram!("admin_api_request_duration_seconds", "method" => method.to_string())
            .record(elapsed.as_secs_f64());

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        tracing::debug!(
            %method,
            path = url.path(),
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Backend responded"
        );

        if !status.is_success() {
            return Err(status_error(status, url, &body));
        }

        Ok(body.to_vec())
    }
}

fn decode<T: DeserializeOwned>(url: &Url, body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(path = url.path(), error = %e, "Unexpected backend payload");
        AppError::decode(
            "Backend returned an unexpected payload",
            json!({ "path": url.path(), "reason": e.to_string() }),
        )
    })
}

/// Maps a non-success response onto [`AppError`], keeping the backend's message.
fn status_error(status: StatusCode, url: &Url, body: &[u8]) -> AppError {
    let backend_message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
    let details = json!({ "path": url.path(), "status": status.as_u16() });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::unauthorized(
            backend_message.unwrap_or_else(|| "Session expired or access denied".to_string()),
            details,
        ),
        StatusCode::NOT_FOUND => AppError::not_found(
            backend_message.unwrap_or_else(|| "Resource not found".to_string()),
            details,
        ),
        _ => AppError::upstream(
            status.as_u16(),
            backend_message.unwrap_or_else(|| "Backend request failed".to_string()),
            details,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(
            Url::parse(base).unwrap(),
            Duration::from_secs(5),
            0,
            SessionStore::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("http://localhost:8080");
        assert_eq!(
            c.endpoint(&["api", "subscriptions", "plans", "GOLD", "endpoints"]).as_str(),
            "http://localhost:8080/api/subscriptions/plans/GOLD/endpoints"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes() {
        let c = client("https://admin.example.in/backend/");
        assert_eq!(
            c.endpoint(&["api", "plans", "a b/c"]).as_str(),
            "https://admin.example.in/backend/api/plans/a%20b%2Fc"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        let result = ApiClient::new(
            Url::parse("mailto:admin@shop.in").unwrap(),
            Duration::from_secs(5),
            0,
            SessionStore::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_status_error_mapping() {
        let url = Url::parse("http://localhost/api/x").unwrap();

        let err = status_error(StatusCode::UNAUTHORIZED, &url, b"");
        assert_eq!(err.code(), "unauthorized");

        let err = status_error(StatusCode::NOT_FOUND, &url, br#"{"message":"Plan missing"}"#);
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.to_string(), "Plan missing");

        let err = status_error(StatusCode::BAD_GATEWAY, &url, b"<html>");
        assert!(err.is_transient());
        assert_eq!(err.to_string(), "Backend request failed (backend status 502)");

        let err = status_error(StatusCode::BAD_REQUEST, &url, b"{}");
        assert!(!err.is_transient());
    }
}
