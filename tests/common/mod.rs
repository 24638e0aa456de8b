//! Shared utilities for integration tests.

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use serde_json::Value;
use tower::ServiceExt;
use trace_bridge::config::BridgeConfig;
use trace_bridge::HttpServer;

/// Send one request through a freshly built server, in-process.
pub async fn send(config: BridgeConfig, request: Request<Body>) -> Response<Body> {
    let app = HttpServer::new(config).router();
    app.oneshot(request).await.unwrap()
}

/// Build a GET request with the given headers.
pub fn get(path: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Read the echo handler's JSON body.
pub async fn echo_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Header value as a string, if present.
pub fn header(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
}
