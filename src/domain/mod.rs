pub mod base_folder;
pub mod config;
pub mod element;
pub mod error;
pub mod file_kind;

pub use base_folder::BaseFolder;
pub use config::{CONFIG_FILE, Extensions, ScaffoldConfig};
pub use element::{Element, parse_element};
pub use error::AppError;
pub use file_kind::{FileKind, WritePolicy};
