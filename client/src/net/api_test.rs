use super::*;

#[test]
fn create_post_endpoint_is_fixed() {
    assert_eq!(CREATE_POST_ENDPOINT, "/api/post/create");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn create_post_outside_browser_reports_failure() {
    let outcome = futures::executor::block_on(create_post(&DraftPost::default()));
    assert_eq!(outcome, PublishOutcome::Failed);
}
