use serde::Serialize;

use crate::domain::{AppError, FileKind};

/// Values exposed to element templates.
#[derive(Debug, Clone, Serialize)]
pub struct ElementTemplateContext {
    /// Component identifier.
    pub name: String,
    /// File name of the sibling stylesheet, e.g. `Button.module.css`.
    pub style_file: String,
}

/// Port for rendering the contents of generated files.
pub trait TemplateRenderer {
    /// Render the template registered for `kind`.
    ///
    /// Returns `Ok(None)` for kinds that have no content template.
    fn render(
        &self,
        kind: FileKind,
        context: &ElementTemplateContext,
    ) -> Result<Option<String>, AppError>;
}
