use axum::Json;
use axum::routing::post;

use client::state::publish::{CreatePostResponse, GENERIC_PUBLISH_ERROR, PublishOutcome, PublishState};

use super::*;
use crate::proxy::ApiProxy;

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = serve(api_routes(AppState::default())).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_without_upstream_returns_bad_gateway_without_message() {
    let base = serve(api_routes(AppState::default())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/post/create"))
        .json(&serde_json::json!({ "title": "t" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn unreachable_upstream_does_not_leak_its_address() {
    let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);
    let state = AppState { proxy: Some(ApiProxy::new(format!("http://{dead_addr}"), 5).unwrap()) };
    let base = serve(api_routes(state)).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/post/create"))
        .json(&serde_json::json!({ "title": "t", "author": "a", "content": "<p>c</p>" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let text = resp.text().await.unwrap();
    assert!(!text.contains(&dead_addr.to_string()));
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(body.get("message").is_none());

    let outcome = PublishOutcome::from_response(false, serde_json::from_str::<CreatePostResponse>(&text));
    let mut publish = PublishState::default();
    publish.finish(outcome);
    assert_eq!(publish.error.as_deref(), Some(GENERIC_PUBLISH_ERROR));
}

#[tokio::test]
async fn api_requests_are_forwarded_to_upstream() {
    let upstream = Router::new().route(
        "/api/post/create",
        post(|Json(body): Json<serde_json::Value>| async move {
            let slug = body["title"].as_str().unwrap_or_default().to_lowercase().replace(' ', "-");
            (StatusCode::CREATED, Json(serde_json::json!({ "slug": slug })))
        }),
    );
    let upstream_base = serve(upstream).await;
    let state = AppState { proxy: Some(ApiProxy::new(upstream_base, 5).unwrap()) };
    let base = serve(api_routes(state)).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/post/create"))
        .json(&serde_json::json!({ "title": "Hello World", "author": "Sam", "content": "<p>x</p>" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "slug": "hello-world" }));
}

#[tokio::test]
async fn upstream_rejections_pass_through_unchanged() {
    let upstream = Router::new().route(
        "/api/post/create",
        post(|| async { (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "message": "Please provide all required fields" }))) }),
    );
    let upstream_base = serve(upstream).await;
    let state = AppState { proxy: Some(ApiProxy::new(upstream_base, 5).unwrap()) };
    let base = serve(api_routes(state)).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/post/create"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Please provide all required fields");
}
