pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".zoneaudit.toml";

/// Get the global config file path (~/.zoneaudit.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (cwd/.zoneaudit.toml)
pub fn local_config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE_NAME)
}

/// Load configuration. An explicit `--config` path must exist and parse;
/// otherwise the local config is tried, then the global one, then defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    if let Ok(cwd) = std::env::current_dir() {
        let local = local_config_path(&cwd);
        if local.exists() {
            return load_file(&local);
        }
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            return load_file(&global);
        }
    }

    Ok(types::Config::default())
}

fn load_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParsingFailed(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}

/// Save configuration to the global config file
pub fn save_global_config(config: &types::Config) -> Result<()> {
    if let Some(path) = global_config_path() {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
        fs::write(&path, content)?;
    }
    Ok(())
}
