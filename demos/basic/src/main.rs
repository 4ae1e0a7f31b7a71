// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Demo app rendering one page with the Vite tag injected.
//!
//! Run `axum-vite init && axum-vite install` first, then either
//! `axum-vite start` (debug, the default here) or `axum-vite build` and
//! `DEMO_DEBUG=0`.

use axum::response::Html;
use axum::routing::get;
use axum_vite::{App, AppSettings, Vite, ViteConfig};
use tracing_subscriber::EnvFilter;

const HOME: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>axum-vite demo</title>
</head>
<body>
    <h1>Hello from axum</h1>
</body>
</html>
"#;

async fn home() -> Html<&'static str> {
    Html(HOME)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let debug = std::env::var("DEMO_DEBUG").map(|v| v != "0").unwrap_or(true);
    let config = ViteConfig::load(axum_vite::config::CONFIG_FILE)?;

    let mut app = App::new(AppSettings {
        debug,
        host_matching: false,
    })
    .with_config(config);
    app.route("/", get(home));
    Vite::new().init_app(&mut app, None)?;

    let addr = "127.0.0.1:5000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("demo listening on http://{}", addr);
    axum::serve(listener, app.into_router()).await?;

    Ok(())
}
