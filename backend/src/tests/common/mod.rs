// Common test utilities and helpers

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use tower::ServiceExt;

use crate::config::Config;
use crate::{AppState, build_router};

/// Default configuration with file logging and static serving turned off
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.logging.file = None;
    config.static_config.enabled = false;
    config
}

/// Configuration serving the bundled `web/` directory
pub fn test_config_with_static() -> Config {
    let mut config = test_config();
    config.static_config.enabled = true;
    config.static_config.web_root = concat!(env!("CARGO_MANIFEST_DIR"), "/web").to_string();
    config
}

pub fn create_test_app_with(config: Config) -> Router {
    let state = AppState::new(config).expect("Failed to create app state");
    build_router(Arc::new(state))
}

pub fn create_test_app() -> Router {
    create_test_app_with(test_config())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("Request failed")
}

/// GET `uri`, optionally with a raw `Cookie` header
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).expect("Failed to build request")).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

pub fn header_str<'a>(response: &'a Response<Body>, name: header::HeaderName) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    header_str(response, header::LOCATION)
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).expect("Body is not JSON")
}
