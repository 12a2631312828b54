//! CLI for the cemv project-layout verifier.

mod commands;

use anyhow::Result;
use cemv_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_man, run_manifest};

/// Top-level CLI for the cemv project-layout verifier.
#[derive(Debug, Parser)]
#[command(name = "cemv")]
#[command(about = "cemv: verify a project layout against a file manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify the project layout and print a report (the default command).
    Check {
        /// Project root to verify (overrides config; default: current directory).
        #[arg(long, value_name = "DIR")]
        base_dir: Option<PathBuf>,

        /// TOML manifest file to check against (overrides config; default: builtin manifest).
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the expected paths grouped by category.
    Manifest {
        /// TOML manifest file to list (default: builtin manifest).
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Generate a man page (roff) to stdout.
    Man,
}

impl CliCommand {
    /// Parse arguments, dispatch, and return whether the run succeeded.
    ///
    /// The boolean carries the verification outcome for `check` (false =
    /// manifest incomplete); every other command returns true.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        // Zero-argument invocation runs a default check.
        let command = cli.command.unwrap_or(CliCommand::Check {
            base_dir: None,
            manifest: None,
            json: false,
        });

        match command {
            CliCommand::Check {
                base_dir,
                manifest,
                json,
            } => run_check(&cfg, base_dir.as_deref(), manifest.as_deref(), json),
            CliCommand::Manifest { manifest } => {
                run_manifest(manifest.as_deref())?;
                Ok(true)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(true)
            }
            CliCommand::Man => {
                run_man()?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests;
