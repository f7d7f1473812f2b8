//! Element naming and path resolution.
//!
//! `Button` lands in `<root>/components/Button/`, while `MyCourses/AuthorCourses`
//! lands in `<root>/pages/MyCourses/` with `AuthorCourses` as the file base name.

use std::path::{Path, PathBuf};

use super::{AppError, BaseFolder};

/// The named unit being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    full_path: PathBuf,
    name: String,
}

impl Element {
    /// Directory holding the element's files.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Identifier used for the component and its file base name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Parse user input into an [`Element`] rooted at `root/<base>`.
///
/// The last `/`-separated segment is the name. A single segment gets its own
/// folder; otherwise the leading segments form the folder. Empty, `.` and `..`
/// segments are rejected so the folder never leaves `root/<base>`.
pub fn parse_element(root: &Path, base: BaseFolder, input: &str) -> Result<Element, AppError> {
    let segments: Vec<&str> = input.split('/').collect();
    if segments.iter().any(|segment| matches!(*segment, "" | "." | "..")) {
        return Err(AppError::InvalidElementPath(input.to_string()));
    }
    let name = segments[segments.len() - 1];

    let relative = if segments.len() > 1 {
        segments[..segments.len() - 1].join("/")
    } else {
        name.to_string()
    };

    Ok(Element { full_path: root.join(base.dir_name()).join(relative), name: name.to_string() })
}
