//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

const CONFIG_DIR: &str = ".portfolio-showcase";
const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "local_storage.json";
const LOG_FILE: &str = "portfolio-showcase.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Google Cloud project holding the Firestore database.
    pub project_id: String,
    /// Optional web API key, sent as the `key` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(project_id: String, api_key: Option<String>) -> Self {
        Config {
            project_id,
            api_key,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Combines command-line values with the saved configuration. Flags win.
    ///
    /// # Errors
    /// Fails when no project ID is given on the command line or in the file,
    /// or when an existing file cannot be read.
    pub fn resolve(
        path: &Path,
        project_id: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, std::io::Error> {
        let saved = if path.exists() {
            Some(Config::load_from_file(path)?)
        } else {
            None
        };

        let project_id = project_id
            .or_else(|| saved.as_ref().map(|c| c.project_id.clone()))
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "No project ID configured. Pass --project-id or run `configure` first.",
                )
            })?;
        let api_key = api_key.or_else(|| saved.and_then(|c| c.api_key));

        Ok(Config::new(project_id, api_key))
    }
}

fn app_dir() -> Result<PathBuf, std::io::Error> {
    home::home_dir()
        .map(|home| home.join(CONFIG_DIR))
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine the home directory",
            )
        })
}

/// Path of the configuration file, `~/.portfolio-showcase/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(app_dir()?.join(CONFIG_FILE))
}

/// Path of the local persistent store, `~/.portfolio-showcase/local_storage.json`.
pub fn get_store_path() -> Result<PathBuf, std::io::Error> {
    Ok(app_dir()?.join(STORE_FILE))
}

/// Diagnostic log written while the TUI owns the terminal.
pub fn get_log_path() -> Result<PathBuf, std::io::Error> {
    Ok(app_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("my-portfolio".to_string(), Some("key-123".to_string()));
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("my-portfolio".to_string(), None);
        assert!(config.save(&path).is_ok(), "Failed to save config");
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    // Command-line values override the saved file field by field.
    fn test_resolve_prefers_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("saved-project".to_string(), Some("saved-key".to_string()))
            .save(&path)
            .unwrap();

        let resolved = Config::resolve(&path, Some("flag-project".to_string()), None).unwrap();
        assert_eq!(resolved.project_id, "flag-project");
        assert_eq!(resolved.api_key.as_deref(), Some("saved-key"));
    }

    #[test]
    fn test_resolve_without_project_id_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = Config::resolve(&path, None, None).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("No project ID"));
    }

    #[test]
    fn test_app_files_share_one_directory() {
        let config = get_config_path().unwrap();
        let store = get_store_path().unwrap();
        let log = get_log_path().unwrap();
        assert_eq!(config.parent(), store.parent());
        assert_eq!(config.parent(), log.parent());
        assert!(log.ends_with(".portfolio-showcase/portfolio-showcase.log"));
    }
}
