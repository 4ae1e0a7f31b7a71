// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the `/_vite` asset route and virtual hosts.

use std::fs;
use std::path::Path;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, HOST};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use axum_test::{TestResponse, TestServer};
use tempfile::tempdir;

use axum_vite::{App, AppSettings, ConfigError, Vite, ViteConfig, ViteError};

const PAGE: &str = "<html><head><title>t</title></head><body></body></html>";

/// Create a built frontend project in a temp directory
fn setup_build(root: &Path) {
    let assets = root.join("dist/assets");
    fs::create_dir_all(assets.join("fonts")).unwrap();
    fs::write(assets.join("index-a1b2c3.js"), "export default 1;").unwrap();
    fs::write(assets.join("index-d4e5f6.css"), "body { margin: 0; }").unwrap();
    fs::write(assets.join("fonts/inter.woff2"), "woff2").unwrap();
}

fn host_matching_app(root: &Path) -> App {
    App::new(AppSettings {
        debug: false,
        host_matching: true,
    })
    .with_config(ViteConfig::default().with_folder_path(root))
}

fn server_for(app: App) -> TestServer {
    TestServer::new(app.into_router()).unwrap()
}

async fn get_on(server: &TestServer, host: &'static str, path: &str) -> TestResponse {
    server
        .get(path)
        .add_header(HOST, HeaderValue::from_static(host))
        .await
}

#[tokio::test]
async fn serves_built_files_with_far_future_caching() {
    let dir = tempdir().unwrap();
    setup_build(dir.path());
    let mut app = App::new(AppSettings::default())
        .with_config(ViteConfig::default().with_folder_path(dir.path()));
    Vite::new().init_app(&mut app, None).unwrap();
    let server = server_for(app);

    let response = server.get("/_vite/index-a1b2c3.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "export default 1;");
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "max-age=31536000"
    );
    let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.contains("javascript"), "content type: {content_type}");

    let response = server.get("/_vite/index-d4e5f6.css").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/css"));

    let response = server.get("/_vite/fonts/inter.woff2").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn missing_files_are_not_found() {
    let dir = tempdir().unwrap();
    setup_build(dir.path());
    let mut app = App::new(AppSettings::default())
        .with_config(ViteConfig::default().with_folder_path(dir.path()));
    Vite::new().init_app(&mut app, None).unwrap();
    let server = server_for(app);

    let response = server.get("/_vite/nope.js").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(CACHE_CONTROL).is_none());

    let response = server.get("/_vite/../Cargo.toml").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn literal_host_restricts_the_route() {
    let dir = tempdir().unwrap();
    setup_build(dir.path());
    let mut app = host_matching_app(dir.path());
    app.route_on_host("www.test", "/", get(|| async { Html(PAGE) }))
        .unwrap();
    app.route_on_host("api.test", "/", get(|| async { "api" }))
        .unwrap();
    Vite::new()
        .init_app(&mut app, Some("assets.test"))
        .unwrap();
    let server = server_for(app);

    let response = get_on(&server, "assets.test", "/_vite/index-a1b2c3.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    for host in ["www.test", "api.test", "other.test"] {
        let response = get_on(&server, host, "/_vite/index-a1b2c3.js").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "host {host}");
    }

    let body = get_on(&server, "www.test", "/").await.text();
    assert!(body.contains(r#"src="//assets.test/_vite/index-a1b2c3.js""#));
    assert!(body.contains(r#"href="//assets.test/_vite/index-d4e5f6.css""#));
}

#[tokio::test]
async fn wildcard_host_answers_everywhere() {
    let dir = tempdir().unwrap();
    setup_build(dir.path());
    let mut app = host_matching_app(dir.path());
    app.route_on_host("www.test", "/", get(|| async { Html(PAGE) }))
        .unwrap();
    Vite::with_routing_host("*")
        .init_app(&mut app, None)
        .unwrap();
    let server = server_for(app);

    for host in ["www.test", "api.test", "assets.test"] {
        let response = get_on(&server, host, "/_vite/index-d4e5f6.css").await;
        assert_eq!(response.status_code(), StatusCode::OK, "host {host}");
    }

    let body = get_on(&server, "www.test", "/").await.text();
    assert!(body.contains(r#"src="/_vite/index-a1b2c3.js""#));
}

#[tokio::test]
async fn host_routes_dispatch_on_host_header() {
    let dir = tempdir().unwrap();
    let mut app = host_matching_app(dir.path());
    app.route_on_host("www.test", "/", get(|| async { "www" }))
        .unwrap();
    app.route_on_host("api.test", "/", get(|| async { "api" }))
        .unwrap();
    app.route("/health", get(|| async { "ok" }));
    let server = server_for(app);

    assert_eq!(get_on(&server, "www.test", "/").await.text(), "www");
    assert_eq!(get_on(&server, "API.test", "/").await.text(), "api");
    assert_eq!(
        get_on(&server, "other.test", "/").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(get_on(&server, "other.test", "/health").await.text(), "ok");
}

#[test]
fn dynamic_host_is_rejected_at_init() {
    let dir = tempdir().unwrap();
    let mut app = host_matching_app(dir.path());

    let err = Vite::new()
        .init_app(&mut app, Some("<sub>.assets.test"))
        .unwrap_err();
    assert!(matches!(err, ViteError::Config(ConfigError::DynamicHost(_))));
}

#[test]
fn host_requires_host_matching() {
    let dir = tempdir().unwrap();
    let mut app = App::new(AppSettings::default())
        .with_config(ViteConfig::default().with_folder_path(dir.path()));

    let err = Vite::new()
        .init_app(&mut app, Some("assets.test"))
        .unwrap_err();
    assert!(matches!(
        err,
        ViteError::Config(ConfigError::HostMatchingDisabled(_))
    ));
}

#[test]
fn two_host_values_are_rejected() {
    let dir = tempdir().unwrap();
    let mut app = host_matching_app(dir.path());

    let err = Vite::with_routing_host("a.test")
        .init_app(&mut app, Some("b.test"))
        .unwrap_err();
    assert!(matches!(
        err,
        ViteError::Config(ConfigError::ConfiguredTwice { .. })
    ));
}

#[tokio::test]
async fn merged_routers_share_the_rewriter() {
    let dir = tempdir().unwrap();
    setup_build(dir.path());
    let mut app = App::new(AppSettings::default())
        .with_config(ViteConfig::default().with_folder_path(dir.path()));
    app.merge(Router::new().route("/merged", get(|| async { Html(PAGE) })));
    Vite::new().init_app(&mut app, None).unwrap();
    let server = server_for(app);

    let body = server.get("/merged").await.text();
    assert!(body.contains("/_vite/index-a1b2c3.js"));
}
