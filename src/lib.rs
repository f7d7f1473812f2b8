//! mkcomponent: scaffold React component and page files interactively.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::LineConsole;
pub use app::api::{ScaffoldOptions, ScaffoldOutcome, scaffold, scaffold_at};
pub use app::config::load_config;
pub use domain::{
    AppError, BaseFolder, Element, Extensions, FileKind, ScaffoldConfig, WritePolicy, parse_element,
};
pub use ports::Console;
