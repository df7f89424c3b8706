//! Configuration file management commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use lootscope::tracker::TrackerConfig;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Where to write the file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Load a configuration file and print it with defaults applied
    Show {
        /// The file to inspect
        path: PathBuf,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { path, force } => run_init(&path, force),
        ConfigCommands::Show { path } => run_show(&path),
    }
}

fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    TrackerConfig::default().save(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = TrackerConfig::load(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");

        run(ConfigCommands::Init {
            path: path.clone(),
            force: false,
        })
        .unwrap();

        let loaded = TrackerConfig::load(&path).unwrap();
        assert_eq!(loaded, TrackerConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");
        std::fs::write(&path, "{}").unwrap();

        let result = run(ConfigCommands::Init {
            path: path.clone(),
            force: false,
        });
        assert!(matches!(result, Err(CliError::Usage(_))));

        assert!(run(ConfigCommands::Init { path, force: true }).is_ok());
    }

    #[test]
    fn test_show_round_trips_a_saved_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");
        TrackerConfig::default()
            .with_cache_interval_secs(10.0)
            .save(&path)
            .unwrap();

        assert!(run(ConfigCommands::Show { path }).is_ok());
    }
}
