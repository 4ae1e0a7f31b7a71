// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Attaching the extension to an [`App`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::{middleware, Extension};

use crate::app::App;
use crate::assets;
use crate::config::ViteConfig;
use crate::error::{ViteError, ViteResult};
use crate::host::{request_host, AssetUrls, VirtualHost};
use crate::npm::Npm;
use crate::rewrite::inject_tags;
use crate::serve::asset_routes;
use crate::tags::{Markup, Tag};

/// Per-app extension state, frozen at initialisation.
#[derive(Debug)]
pub struct ViteState {
    root: PathBuf,
    virtual_host: VirtualHost,
    debug: bool,
    auto_insert: bool,
    npm: Npm,
}

impl ViteState {
    /// Root of the managed frontend project.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory served under `/_vite`.
    pub fn assets_dir(&self) -> PathBuf {
        assets::assets_dir(&self.root)
    }

    /// Virtual host of the asset route.
    pub fn virtual_host(&self) -> &VirtualHost {
        &self.virtual_host
    }

    /// Debug flag of the app at initialisation.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether HTML responses are rewritten.
    pub fn auto_insert(&self) -> bool {
        self.auto_insert
    }

    /// Package manager runner for the frontend project.
    pub fn npm(&self) -> &Npm {
        &self.npm
    }

    /// URL builder for the asset route.
    pub fn urls(&self) -> AssetUrls<'_> {
        AssetUrls::new(&self.virtual_host)
    }

    /// Builds the current asset tag for a request on `request_host`.
    pub fn make_tag(&self, request_host: Option<&str>, force_static: bool) -> ViteResult<Markup> {
        Tag::build(self.debug, force_static, &self.root, self.urls(), request_host)
            .map(|tag| tag.to_markup())
    }
}

/// The Vite extension.
///
/// ```no_run
/// use axum_vite::{App, AppSettings, Vite};
///
/// let mut app = App::new(AppSettings::default());
/// Vite::new().init_app(&mut app, None)?;
/// let router = app.into_router();
/// # Ok::<(), axum_vite::ViteError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vite {
    routing_host: Option<String>,
}

impl Vite {
    /// Creates the extension with no routing host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the extension with a routing host: a hostname or `"*"`.
    pub fn with_routing_host(host: impl Into<String>) -> Self {
        Self {
            routing_host: Some(host.into()),
        }
    }

    /// Attaches the extension to `app`.
    ///
    /// Reads [`ViteConfig`] from the app's config map (defaults if absent),
    /// validates the routing host, registers the `/_vite` route and, when
    /// `auto_insert` is on, the response rewriter.
    ///
    /// # Errors
    ///
    /// - [`ViteError::DuplicateExtension`] if `app` already has the extension
    /// - [`ViteError::Config`] if the routing host is invalid
    /// - [`ViteError::Io`] if a relative project root cannot be resolved
    pub fn init_app(&self, app: &mut App, routing_host: Option<&str>) -> ViteResult<Arc<ViteState>> {
        if app.extensions().get::<Arc<ViteState>>().is_some() {
            return Err(ViteError::DuplicateExtension);
        }

        let config = app.config().get::<ViteConfig>().cloned().unwrap_or_default();
        let settings = app.settings();
        let virtual_host = VirtualHost::resolve(
            self.routing_host.as_deref(),
            routing_host,
            settings.host_matching,
        )?;

        let root = if config.folder_path.is_absolute() {
            config.folder_path.clone()
        } else {
            std::env::current_dir()?.join(&config.folder_path)
        };

        let state = Arc::new(ViteState {
            npm: Npm::new(&root).with_bin(config.npm_bin_path.clone()),
            root,
            virtual_host,
            debug: settings.debug,
            auto_insert: config.auto_insert,
        });

        app.extensions_mut().insert(state.clone());
        app.merge(asset_routes(state.clone()));

        let shared = state.clone();
        app.after_request(move |router| router.layer(Extension(shared)));

        if state.auto_insert {
            let rewriter = state.clone();
            app.after_request(move |router| {
                router.layer(middleware::from_fn_with_state(rewriter, inject_tags))
            });
        }

        tracing::info!(
            "vite extension initialised (root: {}, host: {:?}, debug: {}, auto_insert: {})",
            state.root.display(),
            state.virtual_host,
            state.debug,
            state.auto_insert
        );

        Ok(state)
    }
}

/// Extractor giving handlers the asset tag, for templates that place it
/// themselves.
///
/// ```no_run
/// use axum::response::Html;
/// use axum_vite::{ViteResult, ViteTags};
///
/// async fn home(tags: ViteTags) -> ViteResult<Html<String>> {
///     Ok(Html(format!("<html><head>{}</head></html>", tags.render()?)))
/// }
/// ```
pub struct ViteTags {
    state: Arc<ViteState>,
    host: Option<String>,
}

impl ViteTags {
    /// The tag for the app's current mode.
    pub fn render(&self) -> ViteResult<Markup> {
        self.state.make_tag(self.host.as_deref(), false)
    }

    /// The tag for the built files, even in debug mode.
    pub fn render_static(&self) -> ViteResult<Markup> {
        self.state.make_tag(self.host.as_deref(), true)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ViteTags
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = parts
            .extensions
            .get::<Arc<ViteState>>()
            .cloned()
            .ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "vite extension is not initialised on this app",
            ))?;

        Ok(Self {
            state,
            host: request_host(parts),
        })
    }
}
