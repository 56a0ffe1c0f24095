//! Run configuration loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, CONFIG_FILE_NAME};
use crate::domain::{AppConfig, AppError};

/// Load configuration from `explicit`, or from `copydeck.toml` in `root`.
///
/// An explicit path must exist. The implicit file is optional; without it
/// every setting takes its default.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(AppError::InputNotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let implicit = root.join(CONFIG_FILE_NAME);
            if !implicit.exists() {
                debug!("no {} found; using defaults", CONFIG_FILE_NAME);
                return Ok(AppConfig::default());
            }
            implicit
        }
    };

    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(&path)?;
    config::parse_config_content(&content)
}
