// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! axum-vite CLI library.
//!
//! Drives the Vite project managed by the `axum-vite` extension.
//!
//! # Usage
//!
//! ```bash
//! axum-vite init           # Scaffold the vite/ directory
//! axum-vite install        # npm install
//! axum-vite build          # npm run build
//! axum-vite start          # npm run dev
//! axum-vite check-updates  # npm outdated
//! axum-vite update         # npm update
//! ```
//!
//! # Configuration
//!
//! Settings are read from the `[vite]` table of `axum-vite.toml` in the
//! current directory.

/// CLI commands (init and the npm tasks).
pub mod commands;
