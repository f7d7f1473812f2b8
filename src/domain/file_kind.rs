/// Kinds of file generated for every element, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `<Name>.<script-ext>`: the component itself.
    Script,
    /// `<Name>.<style-ext>`: empty scoped stylesheet.
    Style,
    /// `index.<ext>`: barrel re-export shared by the folder.
    Index,
}

/// How existing file contents are treated when the file is created again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace contents on every run.
    AlwaysOverwrite,
    /// Create the file if missing; never write contents.
    TouchOnly,
    /// Write only while the file is empty or whitespace-only.
    WriteIfBlank,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Script, FileKind::Style, FileKind::Index];

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Script => "Script",
            FileKind::Style => "Style",
            FileKind::Index => "Index",
        }
    }

    pub fn policy(&self) -> WritePolicy {
        match self {
            FileKind::Script => WritePolicy::AlwaysOverwrite,
            FileKind::Style => WritePolicy::TouchOnly,
            FileKind::Index => WritePolicy::WriteIfBlank,
        }
    }

    /// File name for an element called `name` with extension `ext`.
    pub fn file_name(&self, name: &str, ext: &str) -> String {
        match self {
            FileKind::Script | FileKind::Style => format!("{name}.{ext}"),
            FileKind::Index => format!("index.{ext}"),
        }
    }
}
