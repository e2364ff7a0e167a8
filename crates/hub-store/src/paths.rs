//! Default filesystem locations for ToolHub state

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Application directory name under the platform data/config roots.
pub const APP_DIR: &str = "toolhub";

/// File name of the state document.
pub const STATE_FILE: &str = "state.json";

/// Default path of the state document, e.g.
/// `~/.local/share/toolhub/state.json` on Linux.
pub fn default_state_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(STATE_FILE))
        .ok_or(Error::NoDataDir)
}
