//! Configuration file handling
//!
//! Every value has a built-in default matching the shipped target, so a
//! run with no config file present needs nothing on disk besides the app
//! bundle itself.

use std::time::Duration;

use serde::Deserialize;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Appium server endpoint
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Seconds to wait after session start before inspecting the app
    #[serde(default = "default_settle_secs")]
    pub settle_secs: u64,

    /// Target device and application
    #[serde(default)]
    pub target: TargetConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            settle_secs: default_settle_secs(),
            target: TargetConfig::default(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:4723".to_string()
}

fn default_settle_secs() -> u64 {
    4
}

/// Target device and application under test
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Platform name capability (W3C-standard)
    #[serde(default = "default_platform_name")]
    pub platform_name: String,

    /// Platform version capability
    #[serde(default = "default_platform_version")]
    pub platform_version: String,

    /// Device name capability
    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// Automation engine capability
    #[serde(default = "default_automation_name")]
    pub automation_name: String,

    /// App bundle file name, resolved next to the executable
    #[serde(default = "default_app_bundle")]
    pub app_bundle: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            platform_name: default_platform_name(),
            platform_version: default_platform_version(),
            device_name: default_device_name(),
            automation_name: default_automation_name(),
            app_bundle: default_app_bundle(),
        }
    }
}

fn default_platform_name() -> String {
    "iOS".to_string()
}

fn default_platform_version() -> String {
    "16.2".to_string()
}

fn default_device_name() -> String {
    "iPhone 14 Pro".to_string()
}

fn default_automation_name() -> String {
    "XCUITest".to_string()
}

fn default_app_bundle() -> String {
    "TheApp.app.zip".to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    super::Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    }
                })?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }

    /// Settle interval as a duration
    pub fn settle(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_target() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:4723");
        assert_eq!(config.settle_secs, 4);
        assert_eq!(config.target.platform_name, "iOS");
        assert_eq!(config.target.platform_version, "16.2");
        assert_eq!(config.target.device_name, "iPhone 14 Pro");
        assert_eq!(config.target.automation_name, "XCUITest");
        assert_eq!(config.target.app_bundle, "TheApp.app.zip");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            settle_secs = 0

            [target]
            device_name = "iPhone 15"
            "#,
        )
        .unwrap();
        assert_eq!(config.settle(), Duration::ZERO);
        assert_eq!(config.server_url, "http://localhost:4723");
        assert_eq!(config.target.device_name, "iPhone 15");
        assert_eq!(config.target.automation_name, "XCUITest");
    }
}
