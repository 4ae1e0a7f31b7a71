// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Injection of the asset tag into outgoing HTML.
//!
//! Only complete `200 text/html` responses are touched. Redirects, errors,
//! other content types and streamed bodies pass through as they are.

use std::sync::Arc;

use axum::body::{Body, HttpBody};
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::{ViteError, ViteResult};
use crate::extension::ViteState;
use crate::host::host_from;

/// Marker the tag is inserted in front of.
pub const HEAD_CLOSE: &str = "</head>";

/// Middleware inserting the asset tag before `</head>`.
pub async fn inject_tags(
    State(state): State<Arc<ViteState>>,
    request: Request,
    next: Next,
) -> Response {
    let host = host_from(request.headers(), request.uri().authority().map(|a| a.as_str()));
    let response = next.run(request).await;

    if !is_rewritable(&response) {
        return response;
    }

    match rewrite(&state, host.as_deref(), response).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

/// Returns true for complete `200 text/html` responses.
///
/// A body is complete when it knows its exact length; streamed bodies don't.
pub fn is_rewritable(response: &Response) -> bool {
    if response.status() != StatusCode::OK {
        return false;
    }

    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));

    is_html && response.body().size_hint().exact().is_some()
}

/// Inserts `tag` and a newline before the first `</head>` of `html`.
///
/// Without `</head>` the document is returned unchanged.
pub fn splice(html: &str, tag: &str) -> String {
    html.replacen(HEAD_CLOSE, &format!("{tag}\n{HEAD_CLOSE}"), 1)
}

async fn rewrite(state: &ViteState, host: Option<&str>, response: Response) -> ViteResult<Response> {
    let (mut parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ViteError::Body(e.to_string()))?;
    let html = String::from_utf8(bytes.to_vec()).map_err(|e| ViteError::Body(e.to_string()))?;

    let tag = state.make_tag(host, false)?;
    let html = splice(&html, tag.as_str());
    tracing::debug!("injected vite tag ({} bytes)", html.len());

    parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(html.len()));
    Ok(Response::from_parts(parts, Body::from(html)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::{Html, Redirect};

    #[test]
    fn splice_before_head_close() {
        let html = "<html><head><title>t</title></head><body></body></html>";
        assert_eq!(
            splice(html, "<!-- tag -->"),
            "<html><head><title>t</title><!-- tag -->\n</head><body></body></html>"
        );
    }

    #[test]
    fn splice_only_first_head_close() {
        let html = "<head></head><pre>&lt;/head&gt; </head></pre>";
        assert_eq!(splice(html, "T"), "<head>T\n</head><pre>&lt;/head&gt; </head></pre>");
    }

    #[test]
    fn splice_without_head_is_a_no_op() {
        let html = "<p>fragment</p>";
        assert_eq!(splice(html, "T"), html);
    }

    #[test]
    fn only_complete_html_ok_responses_are_rewritable() {
        assert!(is_rewritable(&Html("<html></html>").into_response()));
        assert!(!is_rewritable(&"plain text".into_response()));
        assert!(!is_rewritable(&Redirect::to("/").into_response()));
        assert!(!is_rewritable(
            &(StatusCode::NOT_FOUND, Html("<html></html>")).into_response()
        ));

        let stream = futures_util::stream::iter(vec![Ok::<_, std::io::Error>("<html></html>")]);
        let mut streamed = Response::new(Body::from_stream(stream));
        streamed
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
        assert!(!is_rewritable(&streamed));
    }
}
