//! Configuration loading for the Capo CLI.
//!
//! Configuration comes from an explicit `--config` path, falling back to
//! `capo.toml` in the platform config directory, falling back to defaults.

use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use log::debug;

use capo::{CapoError, config::AppConfig};

/// Loads the application configuration.
///
/// # Errors
///
/// Returns `CapoError::Io` if an explicit config file cannot be read, and
/// `CapoError::Config` if a config file is not valid TOML.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, CapoError> {
    let Some(path) = config_path(path) else {
        debug!("No configuration file found, using defaults");
        return Ok(AppConfig::default());
    };

    debug!(config_path:? = path; "Loading configuration");
    let contents = fs::read_to_string(&path)?;

    toml::from_str(&contents)
        .map_err(|err| CapoError::Config(format!("{}: {err}", path.display())))
}

/// Resolves the config file path: an explicit path wins; otherwise the
/// platform config directory is consulted, but only if a file exists there.
fn config_path(explicit: Option<&String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("", "", "capo")?;
    let default = dirs.config_dir().join("capo.toml");
    default.exists().then_some(default)
}
