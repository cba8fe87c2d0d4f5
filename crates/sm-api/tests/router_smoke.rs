use axum::{body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn livez_responds_ok() {
    let app = sm_api::create_router(sm_api::test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/livez")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn matches_without_identifiers_is_a_bad_request() {
    let app = sm_api::create_router(sm_api::test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/matches")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "bad_request");
}

#[tokio::test]
async fn non_integer_top_n_is_rejected_before_the_handler() {
    let app = sm_api::create_router(sm_api::test_state());

    for uri in ["/api/matches?job_id=j1&top_n=-1", "/api/matches?job_id=j1&top_n=abc"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    }
}
