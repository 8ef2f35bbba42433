//! Filesystem locations for configuration.
//!
//! Resolves where the configuration file lives, following the XDG base
//! directory convention with a `~/.config` fallback.

use std::env;
use std::path::PathBuf;

/// Returns the directory holding the configuration file.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/litscope`
/// 2. `$HOME/.config/litscope`
///
/// Returns `None` when neither environment variable is set.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("litscope"));
        }
    }
    env::var("HOME")
        .ok()
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join("litscope"))
}

/// Returns the default configuration file path, when resolvable.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
