// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The HTML fragment that loads the frontend assets.
//!
//! In debug mode the fragment points at the Vite dev server; otherwise it
//! points at the built files served under [`ASSET_PREFIX`](crate::host::ASSET_PREFIX).

use std::fmt;
use std::path::Path;

use axum::response::{Html, IntoResponse, Response};

use crate::assets;
use crate::error::ViteResult;
use crate::host::AssetUrls;

/// Comment opening every generated fragment.
pub const HEADER_MARKER: &str = "<!-- AXUM_VITE_HEADER -->";

/// Origin of the Vite dev server started by `npm run dev`.
pub const DEV_SERVER_ORIGIN: &str = "http://localhost:3000";

/// Asset tag, either for the dev server or for the built files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Loads the Vite client and the entry module from the dev server.
    Development,
    /// Loads the built script and stylesheet.
    Production {
        /// URL of the built script.
        script_url: String,
        /// URL of the built stylesheet.
        style_url: String,
    },
}

impl Tag {
    /// Picks the tag for the current mode.
    ///
    /// The development tag is used when `debug` is set and `force_static` is
    /// not. Otherwise the build under `root` is scanned and both URLs are
    /// reversed through `urls` for a request on `request_host`.
    pub fn build(
        debug: bool,
        force_static: bool,
        root: &Path,
        urls: AssetUrls<'_>,
        request_host: Option<&str>,
    ) -> ViteResult<Self> {
        if debug && !force_static {
            return Ok(Self::Development);
        }

        let found = assets::locate(root)?;
        Ok(Self::Production {
            script_url: urls.url_for(&found.script, request_host, None),
            style_url: urls.url_for(&found.stylesheet, request_host, None),
        })
    }

    /// Renders the tag as markup.
    pub fn to_markup(&self) -> Markup {
        Markup(self.to_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(
                f,
                "{HEADER_MARKER}\n\
                 <script type=\"module\" src=\"{DEV_SERVER_ORIGIN}/@vite/client\"></script>\n\
                 <script type=\"module\" src=\"{DEV_SERVER_ORIGIN}/main.js\"></script>"
            ),
            Self::Production {
                script_url,
                style_url,
            } => write!(
                f,
                "{HEADER_MARKER}\n\
                 <script type=\"module\" src=\"{script_url}\"></script>\n\
                 <link rel=\"stylesheet\" href=\"{style_url}\"></link>"
            ),
        }
    }
}

/// Pre-escaped HTML, safe to emit verbatim into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Borrows the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the markup as a `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl IntoResponse for Markup {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}
