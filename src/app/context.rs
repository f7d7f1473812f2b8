use crate::domain::ScaffoldConfig;
use crate::ports::{Console, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Console, T: TemplateRenderer> {
    console: C,
    templates: T,
    config: ScaffoldConfig,
}

impl<C: Console, T: TemplateRenderer> AppContext<C, T> {
    /// Create a new application context.
    pub fn new(console: C, templates: T, config: ScaffoldConfig) -> Self {
        Self { console, templates, config }
    }

    /// Get a mutable reference to the console.
    pub fn console(&mut self) -> &mut C {
        &mut self.console
    }

    /// Get a reference to the template renderer.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the resolved configuration.
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Consume the context, returning the console.
    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }
}
