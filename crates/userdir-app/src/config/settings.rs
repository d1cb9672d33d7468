//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use super::types::Settings;
use userdir_core::prelude::*;

const APP_DIR: &str = "userdir";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# User Directory Configuration

[source]
# Endpoint serving randomly generated users
base_url = "https://randomuser.me/api/"

# Records fetched per request
results = 100

# Fixed seed for a reproducible directory (omit for a fresh batch each fetch)
# seed = "directory"

# Seconds before a request is abandoned
timeout_secs = 10
"#;

/// Default configuration directory (`<config dir>/userdir`)
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Path of the settings file inside `config_dir`
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

/// Load settings from `config_dir/config.toml`.
///
/// A missing file yields defaults; unreadable or invalid files yield defaults
/// with a warning. Out-of-range values are corrected.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_file_path(config_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let mut settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    settings.sanitize();
    settings
}

/// Create `config_dir` and a commented default `config.toml` if missing
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_file_path(config_dir);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[source]
base_url = "http://localhost:8080/api/"
results = 25
seed = "fixed"
timeout_secs = 3
"#;
        std::fs::write(temp.path().join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.source.base_url, "http://localhost:8080/api/");
        assert_eq!(settings.source.results, 25);
        assert_eq!(settings.source.seed.as_deref(), Some("fixed"));
        assert_eq!(settings.source.timeout_secs, 3);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[source\nresults = ").unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_corrects_zero_results() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[source]\nresults = 0\n").unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.source.results, 100);
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join("userdir");

        init_config_dir(&dir).unwrap();

        assert!(dir.join("config.toml").exists());
        assert_eq!(load_settings(&dir), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[source]\nresults = 7\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).source.results, 7);
    }
}
