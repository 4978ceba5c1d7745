use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "shoe_wear.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShoewearConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("shoewear.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ShoewearConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ShoewearConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ShoewearConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Database path by precedence: explicit flag, then config file, then default
pub fn resolve_database(flag: Option<&Path>, config: Option<&ShoewearConfig>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
