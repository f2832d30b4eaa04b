//! Config loading and validation.

use super::model::Config;
use crate::error::{PhyslockError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "PHYSLOCK_CONFIG";

/// Config file read when `$PHYSLOCK_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/physlock.yaml";

/// Highest console log level the kernel accepts.
const MAX_CONSOLE_LEVEL: i32 = 8;

impl Config {
    /// Load the config from `$PHYSLOCK_CONFIG` or the default location.
    ///
    /// A missing default file means "use defaults". A file named explicitly
    /// through the environment must exist.
    pub fn resolve() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)),
            _ => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PhyslockError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults if it is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PhyslockError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| PhyslockError::Config(format!("failed to parse YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PhyslockError::Config(format!("failed to serialize YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - all paths must be non-empty
    /// - `quiet_console_level` must be within the kernel's 0..=8 range
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("sysrq_path", &self.sysrq_path),
            ("printk_path", &self.printk_path),
            ("state_path", &self.state_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(PhyslockError::Config(format!(
                    "validation failed: {} must not be empty",
                    name
                )));
            }
        }

        if !(0..=MAX_CONSOLE_LEVEL).contains(&self.quiet_console_level) {
            return Err(PhyslockError::Config(format!(
                "validation failed: quiet_console_level must be between 0 and {}, got {}",
                MAX_CONSOLE_LEVEL, self.quiet_console_level
            )));
        }

        Ok(())
    }
}
