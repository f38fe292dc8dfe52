//! Publish workflow state for the post composer.
//!
//! DESIGN
//! ======
//! Publishing never mutates the draft. Every outcome only updates the
//! inline error, and success additionally yields the route to navigate to.

#[cfg(test)]
#[path = "publish_test.rs"]
mod publish_test;

use serde::Deserialize;

use crate::state::draft::DraftPost;

/// Shown when the request could not be completed or understood.
pub const GENERIC_PUBLISH_ERROR: &str = "Something went wrong";

/// Route of a published post.
pub fn post_route(slug: &str) -> String {
    format!("/post/{slug}")
}

/// Body returned by the creation endpoint. Success carries `slug`, failure
/// carries `message`; other fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreatePostResponse {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of one publish attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The server created the post.
    Created { slug: String },
    /// The server refused the post with a reason for the user.
    Rejected { message: String },
    /// Transport failure or an unusable response.
    Failed,
}

impl PublishOutcome {
    /// Classify a response from its `ok` flag and decoded body.
    pub fn from_response<E>(ok: bool, body: Result<CreatePostResponse, E>) -> Self {
        let Ok(body) = body else {
            return Self::Failed;
        };
        if ok {
            return match body.slug.filter(|s| !s.is_empty()) {
                Some(slug) => Self::Created { slug },
                None => Self::Failed,
            };
        }
        match body.message.filter(|m| !m.is_empty()) {
            Some(message) => Self::Rejected { message },
            None => Self::Failed,
        }
    }
}

/// Publish status owned by one composer instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublishState {
    pub pending: bool,
    pub error: Option<String>,
}

impl PublishState {
    /// Mark a request as in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Decide whether `draft` may be sent now.
    ///
    /// A blank required field sets its inline message and blocks the send;
    /// otherwise this behaves like `begin`. The draft itself is never touched.
    pub fn submit(&mut self, draft: &DraftPost) -> bool {
        if let Some(missing) = draft.missing_field() {
            self.reject_locally(missing.message());
            return false;
        }
        self.begin()
    }

    /// Block publishing locally with `message` without sending anything.
    pub fn reject_locally(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    /// Record the outcome. Returns the navigation target on success.
    pub fn finish(&mut self, outcome: PublishOutcome) -> Option<String> {
        self.pending = false;
        match outcome {
            PublishOutcome::Created { slug } => {
                self.error = None;
                Some(post_route(&slug))
            }
            PublishOutcome::Rejected { message } => {
                self.error = Some(message);
                None
            }
            PublishOutcome::Failed => {
                self.error = Some(GENERIC_PUBLISH_ERROR.to_owned());
                None
            }
        }
    }
}
