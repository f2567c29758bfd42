// tests/openapi_integration.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use scriptgen_api::presentation::http::openapi::{ApiDoc, docs_router};
use serde_json::Value;
use tower::util::ServiceExt as _;
use utoipa::OpenApi;

#[tokio::test]
async fn openapi_json_route_serves_the_document() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let spec: Value = serde_json::from_slice(&bytes).expect("valid openapi json");
    assert!(spec.get("openapi").is_some());
    assert!(spec["paths"].get("/").is_some());
}

#[tokio::test]
async fn redoc_route_serves_html() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/redoc")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[test]
fn declared_paths_match_the_route_table() {
    let spec = serde_json::to_value(ApiDoc::openapi()).expect("serializable spec");

    let paths = spec["paths"].as_object().expect("paths object");
    let mut keys: Vec<&str> = paths.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["/", "/api/v1/steps/match"]);

    assert!(paths["/"].get("get").is_some());
    assert!(paths["/api/v1/steps/match"].get("post").is_some());
}

#[test]
fn components_cover_request_and_response_shapes() {
    let spec = serde_json::to_value(ApiDoc::openapi()).expect("serializable spec");

    let schemas = spec["components"]["schemas"]
        .as_object()
        .expect("schemas object");
    for name in [
        "StatusResponse",
        "ErrorResponse",
        "MatchStepsRequest",
        "TestStepPayload",
        "MatchStepsResponse",
        "ElementMatchDto",
        "MatchedElementDto",
    ] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}
