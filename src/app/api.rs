//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::adapters::{LineConsole, MinijinjaTemplateRenderer, TerminalConsole};
use crate::app::{AppContext, commands::scaffold};
use crate::ports::Console;

pub use crate::app::commands::scaffold::ScaffoldOutcome;
pub use crate::domain::{AppError, ScaffoldConfig};

/// Options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Overrides the configured source root.
    pub root: Option<PathBuf>,
    /// Explicit config file instead of `mkcomponent.toml`.
    pub config: Option<PathBuf>,
}

/// Run the interactive scaffold flow in the current directory on stdin/stdout.
pub fn scaffold(options: ScaffoldOptions) -> Result<ScaffoldOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    let mut config = crate::app::config::load_config(&cwd, options.config.as_deref())?;
    if let Some(root) = options.root {
        config = config.with_root(root).rooted_at(&cwd);
    }

    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        scaffold_at(config, TerminalConsole::new())
    } else {
        scaffold_at(config, LineConsole::stdio())
    }
}

/// Run the scaffold flow with an explicit configuration and console.
pub fn scaffold_at<C: Console>(
    config: ScaffoldConfig,
    console: C,
) -> Result<ScaffoldOutcome, AppError> {
    let templates = MinijinjaTemplateRenderer::new()?;
    let mut ctx = AppContext::new(console, templates, config);
    scaffold::execute(&mut ctx)
}
