// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The host application that extensions are attached to.
//!
//! [`App`] wraps an `axum::Router` with what an extension needs at
//! initialisation: the debug and host-matching settings, a typed config map,
//! a typed registry of installed extensions, and hooks applied around every
//! route when the app is turned into a router.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{Extensions, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use axum::Router;
use tower::ServiceExt;

use crate::error::ConfigError;
use crate::host::host_from;

type Finalizer = Box<dyn FnOnce(Router) -> Router + Send>;

/// Application-level settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
    /// Development mode. Extensions may emit dev-only markup.
    pub debug: bool,
    /// Dispatch requests on the `Host` header in addition to the path.
    pub host_matching: bool,
}

/// An axum application under assembly.
pub struct App {
    settings: AppSettings,
    config: Extensions,
    extensions: Extensions,
    router: Router,
    hosts: BTreeMap<String, Router>,
    finalizers: Vec<Finalizer>,
}

impl App {
    /// Creates an empty app.
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            config: Extensions::new(),
            extensions: Extensions::new(),
            router: Router::new(),
            hosts: BTreeMap::new(),
            finalizers: Vec::new(),
        }
    }

    /// Application settings.
    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    /// Typed configuration values, read by extensions at initialisation.
    pub fn config(&self) -> &Extensions {
        &self.config
    }

    /// Mutable access to the configuration values.
    pub fn config_mut(&mut self) -> &mut Extensions {
        &mut self.config
    }

    /// Stores a configuration value, replacing any previous one of that type.
    pub fn with_config<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.config.insert(value);
        self
    }

    /// Installed extension states, keyed by type.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Mutable access to the installed extension states.
    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    /// Adds a route answering on every host.
    pub fn route(&mut self, path: &str, method_router: MethodRouter) -> &mut Self {
        self.router = std::mem::take(&mut self.router).route(path, method_router);
        self
    }

    /// Adds a route answering on `host` only.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HostRoutingUnavailable`] unless host matching is enabled.
    pub fn route_on_host(
        &mut self,
        host: &str,
        path: &str,
        method_router: MethodRouter,
    ) -> Result<&mut Self, ConfigError> {
        if !self.settings.host_matching {
            return Err(ConfigError::HostRoutingUnavailable(host.to_string()));
        }

        let router = self.hosts.entry(host.to_ascii_lowercase()).or_default();
        *router = std::mem::take(router).route(path, method_router);
        Ok(self)
    }

    /// Merges a host-agnostic router.
    pub fn merge(&mut self, other: Router) -> &mut Self {
        self.router = std::mem::take(&mut self.router).merge(other);
        self
    }

    /// Registers a hook applied to the finished router, in registration order.
    ///
    /// Hooks see every route, whichever order routes and hooks were added in.
    pub fn after_request<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnOnce(Router) -> Router + Send + 'static,
    {
        self.finalizers.push(Box::new(hook));
        self
    }

    /// Builds the final router.
    pub fn into_router(self) -> Router {
        let mut router = self.router;

        if !self.hosts.is_empty() {
            let hosts = Arc::new(self.hosts);
            router = router.fallback(move |request: Request| dispatch_host(hosts.clone(), request));
        }

        self.finalizers
            .into_iter()
            .fold(router, |router, finalize| finalize(router))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

async fn dispatch_host(hosts: Arc<BTreeMap<String, Router>>, request: Request) -> Response {
    let host = host_from(request.headers(), request.uri().authority().map(|a| a.as_str()));
    let router = host.and_then(|h| hosts.get(&h.to_ascii_lowercase()).cloned());

    match router {
        Some(router) => router
            .oneshot(request)
            .await
            .unwrap_or_else(|never: Infallible| match never {}),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
