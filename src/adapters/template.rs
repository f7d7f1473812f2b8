use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::{AppError, FileKind};
use crate::ports::{ElementTemplateContext, TemplateRenderer};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template renderer backed by Minijinja and the embedded template bundle.
pub struct MinijinjaTemplateRenderer {
    env: Environment<'static>,
}

impl MinijinjaTemplateRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for file in TEMPLATE_DIR.files() {
            let Some(name) = file.path().to_str() else {
                continue;
            };
            let content = file.contents_utf8().ok_or_else(|| {
                AppError::Template(format!("Template '{}' is not valid UTF-8", name))
            })?;
            env.add_template(name, content).map_err(|e| {
                AppError::Template(format!("Failed to register template '{}': {}", name, e))
            })?;
        }

        Ok(Self { env })
    }
}

fn template_name(kind: FileKind) -> Option<&'static str> {
    match kind {
        FileKind::Script => Some("script.j2"),
        FileKind::Style => None,
        FileKind::Index => Some("index.j2"),
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        kind: FileKind,
        context: &ElementTemplateContext,
    ) -> Result<Option<String>, AppError> {
        let Some(name) = template_name(kind) else {
            return Ok(None);
        };

        let template = self.env.get_template(name).map_err(|e| {
            AppError::Template(format!("Failed to load template '{}': {}", name, e))
        })?;

        template
            .render(context)
            .map(Some)
            .map_err(|e| AppError::Template(format!("Failed to render template '{}': {}", name, e)))
    }
}
