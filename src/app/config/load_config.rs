//! Scaffold configuration loading from the working directory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, ScaffoldConfig};

/// Load configuration for a run started in `cwd`.
///
/// An explicit `path` must exist. Without one, `mkcomponent.toml` in `cwd`
/// is used when present, otherwise built-in defaults. A relative `root` is
/// resolved against the directory holding the config file.
pub fn load_config(cwd: &Path, path: Option<&Path>) -> Result<ScaffoldConfig, AppError> {
    let config_path = match path {
        Some(explicit) => {
            let explicit = cwd.join(explicit);
            if !explicit.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    explicit.display()
                )));
            }
            explicit
        }
        None => {
            let default = cwd.join(CONFIG_FILE);
            if !default.is_file() {
                debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(ScaffoldConfig::default().rooted_at(cwd));
            }
            default
        }
    };

    debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    let base = config_path.parent().unwrap_or(cwd);
    Ok(parse_config_content(&content)?.rooted_at(base))
}
