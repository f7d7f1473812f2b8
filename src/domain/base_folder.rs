use std::fmt;

/// Top-level category an element is scaffolded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseFolder {
    /// Reusable building blocks shared across pages.
    Components,
    /// Route-level screens.
    Pages,
}

impl BaseFolder {
    /// All categories in prompt order.
    pub const ALL: [BaseFolder; 2] = [BaseFolder::Components, BaseFolder::Pages];

    /// Directory name under the source root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BaseFolder::Components => "components",
            BaseFolder::Pages => "pages",
        }
    }

    /// Single-character token typed at the category prompt.
    pub fn token(&self) -> char {
        match self {
            BaseFolder::Components => 'c',
            BaseFolder::Pages => 'p',
        }
    }

    /// Parse a category from a prompt answer (case-insensitive, trimmed).
    pub fn from_token(answer: &str) -> Option<BaseFolder> {
        match answer.trim().to_lowercase().as_str() {
            "c" => Some(BaseFolder::Components),
            "p" => Some(BaseFolder::Pages),
            _ => None,
        }
    }

    /// Prompt hint listing every token, e.g. `c - components, p - pages`.
    pub fn prompt_hint() -> String {
        BaseFolder::ALL
            .iter()
            .map(|folder| format!("{} - {}", folder.token(), folder.dir_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for BaseFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
