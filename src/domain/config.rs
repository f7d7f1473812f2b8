//! Scaffold configuration: source root and per-kind file extensions.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{AppError, FileKind};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "mkcomponent.toml";

/// Default source root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "src";

/// File extensions for each generated file kind, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Extensions {
    pub script: String,
    pub style: String,
    pub index: String,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            script: "tsx".to_string(),
            style: "module.css".to_string(),
            index: "ts".to_string(),
        }
    }
}

impl Extensions {
    pub fn for_kind(&self, kind: FileKind) -> &str {
        match kind {
            FileKind::Script => &self.script,
            FileKind::Style => &self.style,
            FileKind::Index => &self.index,
        }
    }
}

/// Resolved scaffold configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Source root holding `components/` and `pages/`.
    pub root: PathBuf,
    pub extensions: Extensions,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_ROOT), extensions: Extensions::default() }
    }
}

impl ScaffoldConfig {
    /// Anchor a relative `root` at `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.root.is_relative() {
            self.root = base.join(&self.root);
        }
        self
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }
}

/// Parse config TOML and validate extensions.
pub fn parse_config_content(content: &str) -> Result<ScaffoldConfig, AppError> {
    let config: ScaffoldConfig = toml::from_str(content)?;
    for kind in FileKind::ALL {
        validate_extension(kind, config.extensions.for_kind(kind))?;
    }
    Ok(config)
}

fn validate_extension(kind: FileKind, ext: &str) -> Result<(), AppError> {
    if ext.is_empty() {
        return Err(AppError::config_error(format!("{} extension must not be empty", kind.label())));
    }
    if ext.starts_with('.') || ext.contains('/') {
        return Err(AppError::config_error(format!(
            "{} extension '{}' must not start with '.' or contain '/'",
            kind.label(),
            ext
        )));
    }
    Ok(())
}
