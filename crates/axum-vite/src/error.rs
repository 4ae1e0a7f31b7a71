// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the Vite extension.
//!
//! # Error Categories
//!
//! - **Configuration errors** ([`ConfigError`]): conflicting or invalid
//!   initialisation arguments. Raised while the app is being assembled.
//! - **Command errors** ([`CommandError`]): the package manager could not be
//!   launched or failed. Each variant carries a remediation message.
//! - **Asset errors**: no built asset matched while building the static tag.
//! - **Duplicate registration**: the extension was initialised twice on the
//!   same [`App`](crate::App).

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Invalid or conflicting configuration detected at initialisation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The routing host was given both to [`Vite::with_routing_host`](crate::Vite::with_routing_host)
    /// and to [`Vite::init_app`](crate::Vite::init_app), with different values.
    #[error("vite routing host configured in two places: {constructed:?} and {initialised:?}")]
    ConfiguredTwice {
        /// Value given at construction.
        constructed: String,
        /// Value given at initialisation.
        initialised: String,
    },

    /// A routing host was given but the app does not dispatch on hosts.
    #[error("vite routing host should only be set if using host matching (got {0:?})")]
    HostMatchingDisabled(String),

    /// The routing host contains routing-variable syntax.
    #[error("vite routing host must be a plain hostname or the wildcard \"*\" (got {0:?})")]
    DynamicHost(String),

    /// A host-scoped route was registered on an app without host matching.
    #[error("cannot route on host {0:?}: host matching is disabled for this app")]
    HostRoutingUnavailable(String),

    /// The configuration file exists but could not be read or parsed.
    #[error("invalid configuration file {}: {reason}", .path.display())]
    File {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying read or parse error.
        reason: String,
    },
}

/// Failure to run the package manager.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The package manager executable could not be found or executed.
    #[error(
        "It looks like node.js and/or npm is not installed or cannot be found \
         (tried {npm_bin_path:?}).\n\
         Visit https://nodejs.org to download and install node.js for your system."
    )]
    NpmNotFound {
        /// The configured executable.
        npm_bin_path: String,
    },

    /// The working directory does not exist or is not a directory.
    #[error(
        "It looks like the current working directory for vite is not correct.\n\
         cwd: {}",
        .cwd.display()
    )]
    WorkingDirectory {
        /// The configured working directory.
        cwd: PathBuf,
    },

    /// The invocation failed for another reason, or npm exited unsuccessfully.
    #[error(
        "An error occurred while running npm: {reason}\n\
         cwd: {}\n\
         npm_bin_path: {npm_bin_path}",
        .cwd.display()
    )]
    Execution {
        /// The configured working directory.
        cwd: PathBuf,
        /// The configured executable.
        npm_bin_path: String,
        /// What went wrong.
        reason: String,
    },
}

/// Main error type for the extension.
#[derive(Debug, Error)]
pub enum ViteError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Package manager invocation failure.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// No built asset matched the pattern.
    #[error("no built asset matches {pattern}; run the vite build first")]
    AssetNotFound {
        /// The glob pattern that matched nothing.
        pattern: String,
    },

    /// The extension is already registered on this app.
    #[error("the vite extension is already registered on this app")]
    DuplicateExtension,

    /// A response body could not be read or decoded.
    #[error("unable to rewrite response body: {0}")]
    Body(String),

    /// I/O error while resolving paths.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extension operations.
pub type ViteResult<T> = Result<T, ViteError>;

impl IntoResponse for ViteError {
    fn into_response(self) -> Response {
        tracing::error!("vite: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
