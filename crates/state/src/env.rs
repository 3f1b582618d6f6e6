use anyhow::Result;
use std::path::PathBuf;

/// Directory under the home directory holding data and config.
const APP_DIR: &str = ".teamassess";

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns `~/.teamassess`.
pub fn app_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(APP_DIR))
}

/// Store directory from `TEAMASSESS_DATA_DIR`, if set.
pub fn data_dir_from_env() -> Option<PathBuf> {
    std::env::var("TEAMASSESS_DATA_DIR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Default store directory (`~/.teamassess/data`).
pub fn default_data_dir() -> Result<PathBuf> {
    Ok(app_dir()?.join("data"))
}

/// Returns the path to the config file.
///
/// `TEAMASSESS_CONFIG` wins over `~/.teamassess/config.toml`.
pub fn config_file() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var("TEAMASSESS_CONFIG") {
        return Some(PathBuf::from(custom));
    }
    app_dir().ok().map(|dir| dir.join("config.toml"))
}

/// Reads `TEAMASSESS_SEED_SAMPLES`; `None` when unset.
pub fn env_seed_samples() -> Option<bool> {
    env_flag("TEAMASSESS_SEED_SAMPLES")
}

fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
}
