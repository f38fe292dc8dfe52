//! Forwarding of `/api/*` requests to the blog API.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this origin. When `API_UPSTREAM` is set,
//! requests under `/api` are replayed against it with a small header
//! allow-list and the upstream response is streamed back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures become `502` responses. Their JSON body never carries a
//! `message`, so the composer falls back to its generic error instead of
//! showing proxy internals; the detail is only logged.

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_FORWARD_BODY_BYTES: usize = 10 * 1024 * 1024;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::CONTENT_TYPE, header::ACCEPT, header::COOKIE, header::AUTHORIZATION];

const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] =
    [header::CONTENT_TYPE, header::SET_COOKIE, header::CACHE_CONTROL];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("no API upstream configured")]
    NotConfigured,

    #[error("request body rejected: {0}")]
    Body(#[from] BytesRejection),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Body(rejection) => rejection.status(),
            Self::NotConfigured | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "api forward failed");
        let reason = status.canonical_reason().unwrap_or("error");
        (status, Json(serde_json::json!({ "error": reason }))).into_response()
    }
}

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct ApiProxy {
    client: reqwest::Client,
    upstream: String,
}

impl ApiProxy {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the TLS backend cannot be initialized.
    pub fn new(upstream: String, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, upstream })
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }
}

/// Join the upstream base with the original path and query.
pub fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    let path = if path_and_query.starts_with('/') { path_and_query.to_owned() } else { format!("/{path_and_query}") };
    format!("{}{path}", upstream.trim_end_matches('/'))
}

/// Copy only allow-listed headers from `source`.
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the upstream API.
///
/// The body limit is `MAX_FORWARD_BODY_BYTES` when the route installs it as
/// `DefaultBodyLimit`; exceeding it yields `413`, other read failures `400`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let proxy = state.proxy.as_ref().ok_or(ProxyError::NotConfigured)?;
    let bytes = body?;
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(proxy.upstream(), path_and_query);

    tracing::debug!(%method, %url, "forwarding api request");
    let resp = proxy
        .client
        .request(method, &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(bytes)
        .send()
        .await?;

    let status = resp.status();
    let headers = filter_headers(resp.headers(), &FORWARDED_RESPONSE_HEADERS);
    let body = resp.bytes().await?;
    tracing::debug!(%status, %url, "upstream responded");

    let mut out = Response::new(Body::from(body));
    *out.status_mut() = status;
    *out.headers_mut() = headers;
    Ok(out)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
