use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::GeneratorConfig;

/// Name of the config file looked up in a project root.
pub const CONFIG_FILE_NAME: &str = "modelgen.json";

/// Load config from a specific path.
pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found at: {}", path.display());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: GeneratorConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<GeneratorConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    };

    if config_path.exists() {
        load_config_from_path(&config_path)
    } else {
        Ok(GeneratorConfig::default())
    }
}
