mod console;
mod template_renderer;

pub use console::Console;
pub use template_renderer::{ElementTemplateContext, TemplateRenderer};
