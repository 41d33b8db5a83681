// src/infra/paths.rs — Config location
//
// HACKJUDGE_HOME overrides the config directory for isolation.
// When unset, config lives in ~/.hackjudge/.

use std::path::PathBuf;

/// Returns the HACKJUDGE_HOME override, if set.
fn hackjudge_home() -> Option<PathBuf> {
    std::env::var_os("HACKJUDGE_HOME").map(PathBuf::from)
}

/// Configuration directory: $HACKJUDGE_HOME/ or ~/.hackjudge/
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = hackjudge_home() {
        return Some(home);
    }
    dirs_home().map(|home| home.join(".hackjudge"))
}

/// Home directory, if one can be determined for the current user.
pub fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
