pub mod schema;

pub use schema::ToolpromptConfig;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default toolprompt home directory (~/.toolprompt).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".toolprompt"))
        .unwrap_or_else(|| PathBuf::from(".toolprompt"))
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<ToolpromptConfig> {
    if path.exists() {
        let contents =
            std::fs::read_to_string(path).context("Failed to read toolprompt config file")?;
        let config: ToolpromptConfig =
            toml::from_str(&contents).context("Failed to parse toolprompt config (TOML)")?;
        Ok(config)
    } else {
        Ok(ToolpromptConfig::default())
    }
}

/// Save config to the given path (TOML format).
pub fn save_config(config: &ToolpromptConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).context("Failed to write config file")?;
    Ok(())
}
