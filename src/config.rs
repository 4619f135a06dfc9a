use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

use crate::Error;

const CONFIG_FILE: &str = "scoreboard.toml";

#[derive(Debug, Deserialize, Clone, Default)]
struct FileConfig {
    pub teams_path: Option<String>,
    pub log: Option<FileLogConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
struct FileLogConfig {
    pub level: Option<String>,
    pub path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    /// Optional log file; stderr only when absent.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// The persisted slot holding the team collection.
    pub teams_path: PathBuf,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            teams_path: PathBuf::from("teams.json"),
            log: LogConfig {
                level: "info".to_string(),
                path: None,
            },
        }
    }
}

fn expand_tilde(path: &str) -> Result<PathBuf, Error> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen('~', &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Looks for `scoreboard.toml` in the working directory first, then next to
/// the executable (the build copies the per-profile config there). A missing
/// file yields defaults; a present-but-invalid file is a startup error.
pub fn load_config() -> Result<AppConfig, Error> {
    // Running without a config file is the normal case; defaults apply.
    let Some(config_path) = find_config_file()? else {
        return Ok(AppConfig::default());
    };

    let s = fs::read_to_string(&config_path)?;
    let cfg: FileConfig = toml::from_str(&s)
        .map_err(|e| format!("Invalid config {}: {}", config_path.display(), e))?;

    let defaults = AppConfig::default();
    let teams_path = match cfg.teams_path {
        Some(raw) => expand_tilde(&raw)?,
        None => defaults.teams_path,
    };
    let file_log = cfg.log.unwrap_or_default();
    let log = LogConfig {
        level: file_log.level.unwrap_or(defaults.log.level),
        path: match file_log.path {
            Some(raw) => Some(expand_tilde(&raw)?),
            None => None,
        },
    };

    Ok(AppConfig { teams_path, log })
}

fn find_config_file() -> Result<Option<PathBuf>, Error> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return Ok(Some(local));
    }

    let exe_path = env::current_exe()?;
    if let Some(dir) = exe_path.parent() {
        let beside_exe = dir.join(CONFIG_FILE);
        if beside_exe.is_file() {
            return Ok(Some(beside_exe));
        }
    }

    Ok(None)
}
