// tests/support/mod.rs
use scriptgen_api::application::services::ApplicationServices;
use scriptgen_api::domain::finder::DocumentParser;
use scriptgen_api::infrastructure::html::ScraperDocumentParser;
use scriptgen_api::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

pub fn make_test_router() -> axum::Router {
    let parser: Arc<dyn DocumentParser> = Arc::new(ScraperDocumentParser::default());
    let services = Arc::new(ApplicationServices::new(parser));
    build_router(HttpState { services })
}

/// Assert a JSON content type and return the parsed body.
pub async fn read_json(resp: axum::response::Response) -> serde_json::Value {
    let (parts, body) = resp.into_parts();
    let content_type = parts
        .headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let bytes = axum::body::to_bytes(body, 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}
