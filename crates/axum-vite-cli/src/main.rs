// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use axum_vite::config::CONFIG_FILE;
use axum_vite::ViteConfig;
use axum_vite_cli::commands::{self, NpmTask};
use clap::{CommandFactory, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "axum-vite")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Perform Vite operations", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Configuration file with a [vite] table
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Init the vite/ directory (if it doesn't exist)
    Init,
    /// Install the dependencies using npm
    Install,
    /// Build the Vite assets
    Build,
    /// Start watching source changes for dev
    Start,
    /// Check outdated Vite dependencies
    CheckUpdates,
    /// Update Vite and its dependencies, if needed
    Update,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(command) = cli.command else {
        // No subcommand: behave like `--help`
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", style(e).red());
                ExitCode::FAILURE
            }
        };
    };

    match run(command, &cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style(e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config_path: &str) -> anyhow::Result<()> {
    let config = ViteConfig::load(config_path)?;

    match command {
        Commands::Init => commands::init::run(&config.folder_path),
        Commands::Install => commands::npm::run(&config, NpmTask::Install),
        Commands::Build => commands::npm::run(&config, NpmTask::Build),
        Commands::Start => commands::npm::run(&config, NpmTask::Start),
        Commands::CheckUpdates => commands::npm::run(&config, NpmTask::CheckUpdates),
        Commands::Update => commands::npm::run(&config, NpmTask::Update),
    }
}
