use console::Style;

/// Styles for console output.
///
/// Colors are dropped automatically when stdout is not a terminal.
#[derive(Debug, Clone)]
pub struct Palette {
    heading: Style,
    file: Style,
    warning: Style,
    success: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            heading: Style::new().bold(),
            file: Style::new().magenta(),
            warning: Style::new().yellow(),
            success: Style::new().green(),
        }
    }
}

impl Palette {
    pub fn heading(&self, text: &str) -> String {
        self.heading.apply_to(text).to_string()
    }

    pub fn file(&self, text: &str) -> String {
        self.file.apply_to(text).to_string()
    }

    pub fn warning(&self, text: &str) -> String {
        self.warning.apply_to(text).to_string()
    }

    pub fn success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }
}
