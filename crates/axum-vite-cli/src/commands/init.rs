// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Scaffolding of the managed Vite project.

use console::style;
use include_dir::{include_dir, Dir, DirEntry};
use std::fs;
use std::path::Path;

static STARTER_TEMPLATE: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates/starter");

/// Copies the starter project into `target`.
///
/// # Errors
///
/// Fails without touching anything if `target` already exists.
pub fn run(target: &Path) -> anyhow::Result<()> {
    if target.exists() {
        anyhow::bail!("Target directory '{}' exists, aborting.", target.display());
    }

    fs::create_dir_all(target)?;
    extract_template(&STARTER_TEMPLATE, target)?;
    tracing::info!("Extracted starter template into {}", target.display());

    println!(
        "{}",
        style(format!(
            "Vite source directory and starter content installed in '{}'.",
            target.display()
        ))
        .green()
    );

    Ok(())
}

fn extract_template(template: &Dir, target: &Path) -> anyhow::Result<()> {
    for entry in template.entries() {
        extract_entry(entry, target)?;
    }
    Ok(())
}

fn extract_entry(entry: &DirEntry, target: &Path) -> anyhow::Result<()> {
    match entry {
        DirEntry::Dir(dir) => {
            fs::create_dir_all(target.join(dir.path()))?;
            for child in dir.entries() {
                extract_entry(child, target)?;
            }
        }
        DirEntry::File(file) => {
            let file_path = file.path();
            let file_name = file_path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow::anyhow!("Invalid file name: {:?}", file_path))?;

            // Dotfiles are stored without the dot so packaging keeps them
            let target_name = match file_name {
                "gitignore" => ".gitignore",
                name => name,
            };

            let target_path = match file_path.parent() {
                Some(parent) => target.join(parent).join(target_name),
                None => target.join(target_name),
            };

            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(&target_path, file.contents())?;
        }
    }
    Ok(())
}
