// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The `/_vite` route serving built assets.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::services::ServeDir;

use crate::extension::ViteState;
use crate::host::{host_from, ASSET_PREFIX};

/// Lifetime of served assets, in seconds.
pub const ONE_YEAR: u64 = 60 * 60 * 24 * 365;

/// Router serving `{root}/dist/assets` under `/_vite`, guarded by the
/// configured virtual host.
pub fn asset_routes(state: Arc<ViteState>) -> Router {
    let assets = ServeDir::new(state.assets_dir()).append_index_html_on_directories(false);

    Router::new()
        .nest_service(ASSET_PREFIX, assets)
        .layer(middleware::map_response(far_future_cache))
        .layer(middleware::from_fn_with_state(state, routing_host_guard))
}

async fn far_future_cache(mut response: Response) -> Response {
    if response.status().is_success() {
        let max_age = format!("max-age={ONE_YEAR}");
        if let Ok(value) = HeaderValue::from_str(&max_age) {
            response.headers_mut().insert(CACHE_CONTROL, value);
        }
    }
    response
}

async fn routing_host_guard(
    State(state): State<Arc<ViteState>>,
    request: Request,
    next: Next,
) -> Response {
    let host = host_from(request.headers(), request.uri().authority().map(|a| a.as_str()));

    if !state.virtual_host().accepts(host.as_deref()) {
        tracing::debug!(
            "asset request for {} on host {:?} rejected",
            request.uri().path(),
            host
        );
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(request).await
}
