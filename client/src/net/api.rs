//! REST API helpers for communicating with the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting failure since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `PublishOutcome` instead of a `Result`; transport and decode
//! errors collapse into `PublishOutcome::Failed` after being logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::draft::DraftPost;
use crate::state::publish::PublishOutcome;

/// Endpoint that creates a post from a JSON draft.
pub const CREATE_POST_ENDPOINT: &str = "/api/post/create";

/// Submit `draft` with a single `POST /api/post/create`. No retry, no timeout.
pub async fn create_post(draft: &DraftPost) -> PublishOutcome {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::publish::CreatePostResponse;

        let resp = match gloo_net::http::Request::post(CREATE_POST_ENDPOINT).json(draft) {
            Ok(req) => req.send().await,
            Err(e) => Err(e),
        };
        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!("create post request failed: {e}");
                return PublishOutcome::Failed;
            }
        };
        let decoded = resp.json::<CreatePostResponse>().await;
        if let Err(e) = &decoded {
            log::debug!("create post response ({}) not decodable: {e}", resp.status());
        }
        PublishOutcome::from_response(resp.ok(), decoded)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        PublishOutcome::Failed
    }
}
