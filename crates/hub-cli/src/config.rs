//! Shell configuration
//!
//! Optional `config.toml` in the platform config directory. An absent file
//! means defaults; a present but unparseable file is an error (unlike lost
//! state, a broken config is something the user wrote and should fix).

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Shell-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Directory holding ToolHub state (wishlist etc.).
    ///
    /// Defaults to the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Location of the shell config file, e.g.
/// `~/.config/toolhub/config.toml` on Linux.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(hub_store::paths::APP_DIR).join("config.toml"))
}

/// Load the shell config, defaulting when no file exists.
pub fn load() -> Result<ShellConfig> {
    let Some(path) = config_path() else {
        return Ok(ShellConfig::default());
    };
    if !path.exists() {
        return Ok(ShellConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| CliError::Config {
        path,
        message: e.to_string(),
    })
}

/// Resolve the state-document path from the command line, config, and
/// platform default, in that priority order.
pub fn resolve_state_path(
    flag_data_dir: Option<&PathBuf>,
    config: &ShellConfig,
) -> Result<PathBuf> {
    if let Some(dir) = flag_data_dir {
        return Ok(dir.join(hub_store::paths::STATE_FILE));
    }
    if let Some(dir) = &config.data_dir {
        return Ok(dir.join(hub_store::paths::STATE_FILE));
    }
    Ok(hub_store::default_state_path()?)
}
