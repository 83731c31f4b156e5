use crate::core::error::GitPermalinkError;
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "GIT_PERMALINK_CONFIG";

pub fn get_config_directory() -> Result<PathBuf, GitPermalinkError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::config_dir().unwrap_or_default(),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("git-permalink"))
}

/// Config file location, honoring the GIT_PERMALINK_CONFIG override
pub fn get_config_file() -> Result<PathBuf, GitPermalinkError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(get_config_directory()?.join("config.json"))
}
