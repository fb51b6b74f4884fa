//! Same-origin relay to the inventory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever talks to this host. Every `/api/*` and
//! `/user/*` request is forwarded with its method, path, query, body and
//! `Content-Type`; the backend's status, `Content-Type` and body come back
//! untouched, so non-2xx answers still reach the client's decoder.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to reach the backend (connect, timeout, truncated body)
//! produce a local response: `502 Bad Gateway`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("inventory backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("inventory backend body failed: {0}")]
    Body(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "relay failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Backend URL for an incoming request URI.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Forward one request to the inventory backend.
///
/// # Errors
///
/// Returns [`ProxyError`] (rendered as 502) when the backend cannot be
/// reached or its body cannot be read.
pub async fn relay(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    tracing::debug!(%method, %url, "relaying");

    let mut request = state.http.request(method, &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }
    let upstream = request.send().await.map_err(ProxyError::Unreachable)?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(ProxyError::Body)?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
