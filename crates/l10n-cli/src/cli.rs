//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Localization Manager - synchronize translation sources with a remote
/// service
#[derive(Parser, Debug)]
#[command(name = "l10n")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file
    #[arg(short, long, global = true, default_value = "l10n-sync.yml")]
    pub config: PathBuf,

    /// Configuration token as NAME=VALUE (repeatable)
    #[arg(short, long, global = true, value_name = "NAME=VALUE")]
    pub token: Vec<String>,

    /// Restrict to a single project id
    #[arg(short, long, global = true)]
    pub project: Option<u64>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the source files of each project as a tree
    ListSources,

    /// List the remote files of a snapshot as a tree
    ListRemote {
        /// JSON snapshot of the remote directories and files
        #[arg(long, value_name = "FILE")]
        snapshot: PathBuf,
    },

    /// Preview the operations an upload would issue against a remote
    /// snapshot
    ///
    /// The snapshot is a JSON file with the remote directory and file
    /// records:
    ///   {"directories": [{"id": 1, "name": "res", "parent_id": null}],
    ///    "files": [{"id": 2, "name": "a.txt", "directory_id": 1}]}
    Plan {
        /// JSON snapshot of the remote directories and files
        #[arg(long, value_name = "FILE")]
        snapshot: PathBuf,
    },

    /// Copy translated files from extracted translation packages
    CopyTranslations {
        /// Directory containing one extracted package directory per
        /// project id
        #[arg(long, value_name = "DIR")]
        packages_dir: PathBuf,

        /// Base directory translated files are copied into (defaults to
        /// the project root)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}
