//! Filesystem locations for the app bundle and configuration
//!
//! The app bundle ships next to the installed executable, so its
//! absolute path is derived from the executable's own location rather
//! than the working directory.

use std::path::PathBuf;

use super::{Error, Result};

/// Application name used for platform config directories
const APP_NAME: &str = "uidump";

/// Resolve the absolute path of a bundle shipped alongside the executable
pub fn bundled_app_path(file_name: &str) -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::PathResolution(format!("cannot locate the running executable: {e}")))?;
    let dir = exe
        .parent()
        .ok_or_else(|| Error::PathResolution("executable has no containing directory".to_string()))?;
    Ok(dir.join(file_name))
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/uidump/`
/// - macOS: `~/Library/Application Support/uidump/`
/// - Windows: `%APPDATA%\uidump\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_app_path_is_absolute() {
        let path = bundled_app_path("TheApp.app.zip").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "TheApp.app.zip");
    }

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }
}
