// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Package manager tasks run inside the managed Vite project.

use axum_vite::{Npm, ViteConfig};
use console::style;

/// A package manager task exposed as a subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpmTask {
    /// `npm install`
    Install,
    /// `npm run build`
    Build,
    /// `npm run dev`
    Start,
    /// `npm outdated`
    CheckUpdates,
    /// `npm update`
    Update,
}

impl NpmTask {
    /// Arguments passed to the package manager.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            NpmTask::Install => &["install"],
            NpmTask::Build => &["run", "build"],
            NpmTask::Start => &["run", "dev"],
            NpmTask::CheckUpdates => &["outdated"],
            NpmTask::Update => &["update"],
        }
    }
}

/// Runs `task` in the configured project directory.
pub fn run(config: &ViteConfig, task: NpmTask) -> anyhow::Result<()> {
    let npm = Npm::new(&config.folder_path).with_bin(config.npm_bin_path.clone());
    let args = task.args();

    println!(
        "{} {} {}",
        style("→").cyan(),
        style(npm.npm_bin_path()).cyan(),
        style(args.join(" ")).dim()
    );

    npm.run(args.iter().copied())?;
    Ok(())
}
