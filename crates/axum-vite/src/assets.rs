// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Discovery of the built script and stylesheet.

use std::path::{Path, PathBuf};

use crate::error::{ViteError, ViteResult};

/// Built assets directory, relative to the frontend project root.
pub const ASSETS_DIR: &str = "dist/assets";

/// Base filenames of the current build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// The JavaScript entry, e.g. `main-4f2a1c.js`.
    pub script: String,
    /// The stylesheet, e.g. `main-9be1d0.css`.
    pub stylesheet: String,
}

/// Returns the directory holding built assets for a project root.
pub fn assets_dir(root: &Path) -> PathBuf {
    root.join(ASSETS_DIR)
}

/// Finds the built script and stylesheet under `{root}/dist/assets`.
///
/// Nothing is cached: a rebuild may rename content-hashed files between
/// two calls. When several files share an extension the first one in
/// sorted order is used.
pub fn locate(root: &Path) -> ViteResult<AssetRef> {
    let dir = glob::Pattern::escape(&assets_dir(root).to_string_lossy());
    let script = first_match(&format!("{dir}/*.js"))?;
    let stylesheet = first_match(&format!("{dir}/*.css"))?;
    Ok(AssetRef { script, stylesheet })
}

fn first_match(pattern: &str) -> ViteResult<String> {
    let not_found = || ViteError::AssetNotFound {
        pattern: pattern.to_string(),
    };

    let paths = glob::glob(pattern).map_err(|_| not_found())?;
    let name = paths
        .flatten()
        .filter(|path| path.is_file())
        .find_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .ok_or_else(not_found)?;

    tracing::debug!("{} resolved to {}", pattern, name);
    Ok(name)
}
