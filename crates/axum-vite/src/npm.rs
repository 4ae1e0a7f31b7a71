// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Package manager invocation.
//!
//! [`Npm`] runs the configured executable in the frontend project directory
//! and classifies launch failures so the caller can print a useful hint.
//! Calls block until the child exits; there is no timeout.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::CommandError;

/// Executable used when none is configured.
pub const NPM_BIN_PATH: &str = "npm";

/// Runs the package manager inside the managed frontend project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npm {
    cwd: PathBuf,
    npm_bin_path: String,
}

impl Npm {
    /// Creates a runner for `cwd` using the default `npm` executable.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            npm_bin_path: NPM_BIN_PATH.to_string(),
        }
    }

    /// Uses another executable (pnpm, a full path to npm, ...).
    pub fn with_bin(mut self, npm_bin_path: impl Into<String>) -> Self {
        self.npm_bin_path = npm_bin_path.into();
        self
    }

    /// Working directory of the child process.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Configured executable.
    pub fn npm_bin_path(&self) -> &str {
        &self.npm_bin_path
    }

    /// Runs the executable with `args` and waits for it.
    ///
    /// # Errors
    ///
    /// - [`CommandError::WorkingDirectory`] if the working directory is missing
    ///   or cannot be entered
    /// - [`CommandError::NpmNotFound`] if the executable cannot be launched
    /// - [`CommandError::Execution`] for other launch failures and non-zero exits
    pub fn run<I, S>(&self, args: I) -> Result<(), CommandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        // The OS reports a bad cwd and a bad binary with the same error
        // codes, so the directory is checked up front. Statting `cwd/.`
        // needs search permission along the whole path, as chdir does.
        if !self.cwd_is_accessible() {
            return Err(CommandError::WorkingDirectory {
                cwd: self.cwd.clone(),
            });
        }

        tracing::debug!(
            "running {} {} in {}",
            self.npm_bin_path,
            args.join(" "),
            self.cwd.display()
        );

        let status = Command::new(&self.npm_bin_path)
            .args(&args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => CommandError::NpmNotFound {
                    npm_bin_path: self.npm_bin_path.clone(),
                },
                _ => self.execution_error(e.to_string()),
            })?;

        if !status.success() {
            return Err(self.execution_error(format!("{} exited with {}", self.npm_bin_path, status)));
        }

        Ok(())
    }

    fn cwd_is_accessible(&self) -> bool {
        fs::metadata(self.cwd.join(".")).is_ok_and(|meta| meta.is_dir())
    }

    fn execution_error(&self, reason: String) -> CommandError {
        CommandError::Execution {
            cwd: self.cwd.clone(),
            npm_bin_path: self.npm_bin_path.clone(),
            reason,
        }
    }
}
