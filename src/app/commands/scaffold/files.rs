//! Per-kind file creators for a scaffolded element.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{AppError, Element, Extensions, FileKind, WritePolicy};
use crate::ports::{ElementTemplateContext, TemplateRenderer};

/// What happened to a file during creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Contents were written.
    Written,
    /// The file exists and its contents were left as they were.
    Kept,
}

/// A file generated for an element.
///
/// Implementors only describe the file; [`ElementFile::create`] applies the
/// [`WritePolicy`] of its kind.
pub trait ElementFile {
    fn kind(&self) -> FileKind;

    /// Absolute path of the file.
    fn target_path(&self) -> &Path;

    /// Rendered contents, if this kind carries any.
    fn contents(&self) -> Option<&str>;

    /// Create parent directories and the file itself, then fill it according
    /// to the kind's write policy.
    fn create(&self) -> Result<FileAction, AppError> {
        let path = self.target_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)?;

        let policy = self.kind().policy();
        debug!(
            kind = self.kind().label(),
            ?policy,
            path = %path.display(),
            "applying write policy"
        );

        let action = match policy {
            WritePolicy::TouchOnly => FileAction::Kept,
            WritePolicy::WriteIfBlank if !fs::read_to_string(path)?.trim().is_empty() => {
                FileAction::Kept
            }
            WritePolicy::AlwaysOverwrite | WritePolicy::WriteIfBlank => {
                let contents = self.contents().ok_or_else(|| {
                    let label = self.kind().label();
                    AppError::Template(format!("No contents rendered for {label} files"))
                })?;
                fs::write(path, contents)?;
                FileAction::Written
            }
        };
        info!(kind = self.kind().label(), path = %path.display(), ?action, "file ready");
        Ok(action)
    }
}

/// `<Name>.<ext>` component source, rewritten on every run.
pub struct ScriptFile {
    path: PathBuf,
    contents: String,
}

impl ElementFile for ScriptFile {
    fn kind(&self) -> FileKind {
        FileKind::Script
    }

    fn target_path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> Option<&str> {
        Some(&self.contents)
    }
}

/// `<Name>.<ext>` stylesheet, only ever touched.
pub struct StyleFile {
    path: PathBuf,
}

impl ElementFile for StyleFile {
    fn kind(&self) -> FileKind {
        FileKind::Style
    }

    fn target_path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> Option<&str> {
        None
    }
}

/// `index.<ext>` barrel, filled only while blank.
pub struct IndexFile {
    path: PathBuf,
    contents: String,
}

impl ElementFile for IndexFile {
    fn kind(&self) -> FileKind {
        FileKind::Index
    }

    fn target_path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> Option<&str> {
        Some(&self.contents)
    }
}

/// Build the creators for `element` in creation order: script, style, index.
pub fn element_files<T: TemplateRenderer>(
    element: &Element,
    extensions: &Extensions,
    templates: &T,
) -> Result<Vec<Box<dyn ElementFile>>, AppError> {
    let path_for = |kind: FileKind| {
        element.full_path().join(kind.file_name(element.name(), extensions.for_kind(kind)))
    };
    let context = ElementTemplateContext {
        name: element.name().to_string(),
        style_file: FileKind::Style.file_name(element.name(), &extensions.style),
    };
    let render = |kind: FileKind| -> Result<String, AppError> {
        templates.render(kind, &context)?.ok_or_else(|| {
            AppError::Template(format!("No template registered for {} files", kind.label()))
        })
    };

    let files: Vec<Box<dyn ElementFile>> = vec![
        Box::new(ScriptFile {
            path: path_for(FileKind::Script),
            contents: render(FileKind::Script)?,
        }),
        Box::new(StyleFile { path: path_for(FileKind::Style) }),
        Box::new(IndexFile { path: path_for(FileKind::Index), contents: render(FileKind::Index)? }),
    ];
    Ok(files)
}
