use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;

pub(crate) const LOG_ENV: &str = "FINDASH_LOG";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) log_level: Level,
    /// Set when `FINDASH_LOG` held something that isn't a level name.
    pub(crate) rejected_level: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let data_dir = data_dir()?;
        let (log_level, rejected_level) = parse_level(std::env::var(LOG_ENV).ok().as_deref());
        Ok(Self {
            data_dir,
            log_level,
            rejected_level,
        })
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join("findash.log")
    }
}

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "findash", "findash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

/// Unset or blank means `info`. Anything unparsable also falls back to `info`
/// and is handed back so the caller can warn about it.
pub(crate) fn parse_level(raw: Option<&str>) -> (Level, Option<String>) {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => (Level::INFO, None),
        Some(s) => match s.parse::<Level>() {
            Ok(level) => (level, None),
            Err(_) => (Level::INFO, Some(s.to_string())),
        },
    }
}
