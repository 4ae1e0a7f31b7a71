// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Vite extension configuration.
//!
//! Configuration is read once, when the extension is initialised, from the
//! app's config map. It can be loaded from the `[vite]` table of a TOML file.
//!
//! # Example Configuration
//!
//! ```toml
//! [vite]
//! auto_insert = true
//! npm_bin_path = "npm"
//! folder_path = "vite"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ViteResult};

/// Default configuration file read by the command-line tool.
pub const CONFIG_FILE: &str = "axum-vite.toml";

/// Settings for the Vite extension.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ViteConfig {
    /// Inject the asset tag into every HTML response (default: true).
    #[serde(default = "default_auto_insert")]
    pub auto_insert: bool,

    /// Package manager executable (default: "npm").
    #[serde(default = "default_npm_bin_path")]
    pub npm_bin_path: String,

    /// Root of the managed frontend project (default: "vite").
    ///
    /// Relative paths are resolved against the current directory at
    /// initialisation. Built assets are expected in `dist/assets` below it.
    #[serde(default = "default_folder_path")]
    pub folder_path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    vite: ViteConfig,
}

fn default_auto_insert() -> bool {
    true
}

fn default_npm_bin_path() -> String {
    "npm".to_string()
}

fn default_folder_path() -> PathBuf {
    PathBuf::from("vite")
}

impl Default for ViteConfig {
    fn default() -> Self {
        Self {
            auto_insert: default_auto_insert(),
            npm_bin_path: default_npm_bin_path(),
            folder_path: default_folder_path(),
        }
    }
}

impl ViteConfig {
    /// Loads the `[vite]` table from a TOML file.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> ViteResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(file.vite)
    }

    /// Sets the auto-insert flag.
    pub fn with_auto_insert(mut self, auto_insert: bool) -> Self {
        self.auto_insert = auto_insert;
        self
    }

    /// Sets the package manager executable.
    pub fn with_npm_bin_path(mut self, npm_bin_path: impl Into<String>) -> Self {
        self.npm_bin_path = npm_bin_path.into();
        self
    }

    /// Sets the frontend project root.
    pub fn with_folder_path(mut self, folder_path: impl Into<PathBuf>) -> Self {
        self.folder_path = folder_path.into();
        self
    }
}
