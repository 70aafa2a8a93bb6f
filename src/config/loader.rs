//! Defaults File Loading
//!
//! Finds and reads the optional TOML file that supplies default settings.
//! Values given on the command line always win over the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::error::{Error, Result};

/// Environment variable naming an explicit defaults file
pub const CONFIG_ENV_VAR: &str = "CENTER_CONFIG";

/// Defaults file loader
pub struct ConfigLoader {
    /// Candidate files, in lookup order
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that searches the standard locations
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
        }
    }

    /// Create a loader with an explicit list of candidates
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Load settings from `explicit`, `$CENTER_CONFIG`, or the first
    /// standard location that holds a readable file.
    ///
    /// A file named explicitly must load; a discovered file that fails is
    /// skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match explicit {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::new().discover()),
        }
    }

    /// Load the first usable file among the search paths
    pub fn discover(&self) -> Settings {
        for path in &self.search_paths {
            if !path.is_file() {
                continue;
            }
            match Self::load_file(path) {
                Ok(settings) => return settings,
                Err(e) => warn!("Ignoring config file: {}", e),
            }
        }
        debug!("No config file found, using built-in defaults");
        Settings::default()
    }

    /// Read and parse a single TOML file
    pub fn load_file(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings = toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Candidate files, in lookup order
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Get default search paths for the defaults file
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("center").join("config.toml"));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("center").join("config.toml");
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".center.toml"));
        }

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
