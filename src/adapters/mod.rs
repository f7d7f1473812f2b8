pub mod line_console;
pub mod template;
pub mod terminal_console;

pub use line_console::LineConsole;
pub use template::MinijinjaTemplateRenderer;
pub use terminal_console::TerminalConsole;
