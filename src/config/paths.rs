//! Platform-specific configuration paths.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/reelcut/`
/// - macOS: `~/Library/Application Support/reelcut/`
/// - Windows: `%APPDATA%\reelcut\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the default config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Config file to use: the explicit `--config` path, else the platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(config_file_path, |path| Ok(path.to_path_buf()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_path_is_under_app_dir() {
        let path = config_file_path().unwrap();
        assert!(path.to_string_lossy().contains(APP_NAME));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/tmp/custom/reelcut.toml");
        assert_eq!(resolve_config_path(Some(explicit)).unwrap(), explicit);
    }

    #[test]
    fn test_default_path_when_not_given() {
        assert_eq!(
            resolve_config_path(None).unwrap(),
            config_file_path().unwrap()
        );
    }
}
