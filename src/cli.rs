use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::pm::PackageManager;

pub const USAGE_TEXT: &str = r#"pmdetect: detect a project's JavaScript package manager from its lockfiles

Usage:
  pmdetect detect [-C <dir>] [--fallback npm|pnpm|yarn] [--index | --json]
  pmdetect add [-C <dir>] [--fallback npm|pnpm|yarn] <package>...
  pmdetect list [--json]
  pmdetect completions zsh

Global options:
  -v, --verbose   Log detection details to stderr

Detection (first match wins):
  yarn.lock -> yarn, pnpm-lock.yaml -> pnpm, package-lock.json -> npm, otherwise the fallback.
  Fallback: --fallback, then $PMDETECT_FALLBACK, then "fallback" in <dir>/.pmdetect.json, then npm.

`add` only prints the command; nothing is installed.
"#;

#[derive(Parser, Debug)]
#[command(name = "pmdetect")]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print usage
    Help,

    /// Print the package manager used in a directory
    Detect {
        /// Project directory
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,
        /// Manager to report when no lockfile is found
        #[arg(long, value_enum)]
        fallback: Option<PackageManager>,
        /// Print the registry index instead of the name
        #[arg(long, conflicts_with = "json")]
        index: bool,
        #[arg(long)]
        json: bool,
    },

    /// Print the command that adds packages with the detected manager
    Add {
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, value_enum)]
        fallback: Option<PackageManager>,
        #[arg(required = true, value_name = "PACKAGE", num_args = 1..)]
        packages: Vec<String>,
    },

    /// List known package managers and their add commands
    List {
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Zsh,
}
