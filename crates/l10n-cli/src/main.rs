//! Localization Manager CLI
//!
//! The command-line interface for inspecting and synchronizing translation
//! sources.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use l10n_config::{SyncConfiguration, TokenReplacer};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let tokens = parse_tokens(&cli.token)?;
    let mut configuration = SyncConfiguration::load(&cli.config, &tokens)?;
    if let Some(project_id) = cli.project {
        configuration.projects.retain(|project| project.id == project_id);
        if configuration.projects.is_empty() {
            return Err(CliError::user(format!(
                "no project with id {project_id} in {}",
                cli.config.display()
            )));
        }
    }

    let project_dir = project_dir_of(&cli.config)?;
    execute_command(cli.command, &project_dir, &configuration)
}

fn execute_command(
    command: Commands,
    project_dir: &std::path::Path,
    configuration: &SyncConfiguration,
) -> Result<()> {
    match command {
        Commands::ListSources => commands::run_list_sources(project_dir, configuration),
        Commands::ListRemote { snapshot } => commands::run_list_remote(&snapshot),
        Commands::Plan { snapshot } => commands::run_plan(project_dir, configuration, &snapshot),
        Commands::CopyTranslations {
            packages_dir,
            output_dir,
        } => commands::run_copy_translations(
            project_dir,
            configuration,
            &packages_dir,
            output_dir.as_deref(),
        ),
    }
}

/// The project root: the directory holding the configuration file.
fn project_dir_of(config: &std::path::Path) -> Result<PathBuf> {
    let dir = match config.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    };
    Ok(dir.canonicalize()?)
}

fn parse_tokens(raw: &[String]) -> Result<TokenReplacer> {
    let mut tokens = TokenReplacer::default();
    for value in raw {
        let Some((name, replacement)) = value.split_once('=') else {
            return Err(CliError::user(format!(
                "invalid token {value:?}, expected NAME=VALUE"
            )));
        };
        if name.is_empty() {
            return Err(CliError::user(format!(
                "invalid token {value:?}, the name must not be empty"
            )));
        }
        tokens.set(name, replacement);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_accepts_name_value_pairs() {
        let tokens = parse_tokens(&["%a%=1".to_string(), "%b%=x=y".to_string()]).unwrap();
        assert_eq!(tokens.replace("%a% %b%"), "1 x=y");
    }

    #[test]
    fn test_parse_tokens_rejects_missing_separator() {
        let error = parse_tokens(&["novalue".to_string()]).unwrap_err();
        assert!(error.to_string().contains("NAME=VALUE"));
    }

    #[test]
    fn test_parse_tokens_rejects_empty_name() {
        assert!(parse_tokens(&["=x".to_string()]).is_err());
    }
}
