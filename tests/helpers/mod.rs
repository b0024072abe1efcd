//! Shared setup for router tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use http_body_util::BodyExt;
use meadowbrook::config::{
    Config, ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig,
};
use serde::Serialize;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            name: "Meadowbrook Test Farm".to_string(),
            tagline: "Test stays".to_string(),
        },
        contact: ContactConfig {
            inbox_address: "inbox@meadowbrook.test".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn app() -> Router {
    meadowbrook::create_app(test_config())
}

pub async fn get(uri: &str) -> anyhow::Result<Response<Body>> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    Ok(app().oneshot(request).await?)
}

pub async fn post_form<T: Serialize>(uri: &str, form: &T) -> anyhow::Result<Response<Body>> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form)?))?;

    Ok(app().oneshot(request).await?)
}

pub async fn post_json(uri: &str, body: serde_json::Value) -> anyhow::Result<Response<Body>> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?;

    Ok(app().oneshot(request).await?)
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}
