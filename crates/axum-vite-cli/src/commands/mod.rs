// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `init`: Scaffold the managed Vite project from the bundled starter
//! - `npm`: Package manager tasks (install, build, start, check-updates, update)

/// Project scaffolding command.
pub mod init;
/// Package manager tasks.
pub mod npm;

pub use npm::NpmTask;
