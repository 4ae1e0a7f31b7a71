// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! Vite integration for axum applications.
//!
//! The extension connects an axum app to a Vite-managed frontend project:
//!
//! - **Development**: pages get `<script>` tags pointing at the Vite dev
//!   server on `http://localhost:3000`.
//! - **Production**: pages get tags pointing at the built files, which are
//!   served from `{folder_path}/dist/assets` under `/_vite` with one-year
//!   caching.
//! - **Virtual hosts**: on apps dispatching on hosts, the asset route can be
//!   pinned to one host or follow the request's host (`"*"`).
//! - **npm**: [`Npm`] runs the package manager in the frontend project.
//!
//! # Usage
//!
//! ```no_run
//! use axum::response::Html;
//! use axum::routing::get;
//! use axum_vite::{App, AppSettings, Vite, ViteConfig};
//!
//! # fn main() -> Result<(), axum_vite::ViteError> {
//! let mut app = App::new(AppSettings { debug: true, host_matching: false })
//!     .with_config(ViteConfig::default().with_folder_path("frontend"));
//! app.route("/", get(|| async { Html("<html><head></head><body></body></html>") }));
//! Vite::new().init_app(&mut app, None)?;
//! let router: axum::Router = app.into_router();
//! # Ok(())
//! # }
//! ```
//!
//! With `auto_insert` on (the default) every complete `200 text/html`
//! response gets the tag right before `</head>`. Handlers that place the tag
//! themselves can extract [`ViteTags`].

/// Host application model.
pub mod app;
/// Built asset discovery.
pub mod assets;
/// Extension configuration.
pub mod config;
/// Error types.
pub mod error;
/// Extension state and initialisation.
pub mod extension;
/// Virtual host validation and asset URLs.
pub mod host;
/// Package manager runner.
pub mod npm;
/// HTML response rewriting.
pub mod rewrite;
/// Asset route.
pub mod serve;
/// Asset tag rendering.
pub mod tags;

pub use app::{App, AppSettings};
pub use assets::AssetRef;
pub use config::ViteConfig;
pub use error::{CommandError, ConfigError, ViteError, ViteResult};
pub use extension::{Vite, ViteState, ViteTags};
pub use host::{AssetUrls, VirtualHost};
pub use npm::Npm;
pub use tags::{Markup, Tag};
