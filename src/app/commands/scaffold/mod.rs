//! Scaffold an element: ask, confirm, then write its files.

mod files;
mod prompts;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::AppContext;
use crate::app::palette::Palette;
use crate::domain::{AppError, Element};
use crate::ports::{Console, TemplateRenderer};

pub use files::{ElementFile, FileAction, element_files};
pub use prompts::Confirmation;

/// Result of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Files were created (or left in place per their policy).
    Created { element: Element, files: Vec<PathBuf> },
    /// The user declined at confirmation; nothing was written.
    Cancelled,
    /// Input was interrupted before confirmation; nothing was written.
    Interrupted,
}

pub fn execute<C, T>(ctx: &mut AppContext<C, T>) -> Result<ScaffoldOutcome, AppError>
where
    C: Console,
    T: TemplateRenderer,
{
    let palette = Palette::default();
    let root = ctx.config().root.clone();

    let Some(base) = prompts::ask_base_folder(ctx.console())? else {
        return Ok(ScaffoldOutcome::Interrupted);
    };
    let Some(element) = prompts::ask_element(ctx.console(), &palette, &root, base)? else {
        return Ok(ScaffoldOutcome::Interrupted);
    };
    debug!(name = element.name(), dir = %element.full_path().display(), "resolved element");

    let files = element_files(&element, &ctx.config().extensions, ctx.templates())?;
    let listing: Vec<String> =
        files.iter().map(|file| relative_display(&root, file.target_path())).collect();

    match prompts::ask_confirmation(ctx.console(), &palette, &listing)? {
        None => return Ok(ScaffoldOutcome::Interrupted),
        Some(false) => {
            ctx.console().say("Ok, exiting. Nothing was created.")?;
            return Ok(ScaffoldOutcome::Cancelled);
        }
        Some(true) => {}
    }

    for file in &files {
        file.create()?;
    }
    ctx.console().say(&palette.success("All files created."))?;

    Ok(ScaffoldOutcome::Created {
        element,
        files: files.iter().map(|file| file.target_path().to_path_buf()).collect(),
    })
}

/// Path shown to the user: `path` with the source root and separator stripped.
fn relative_display(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
