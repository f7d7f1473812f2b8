pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub(crate) mod palette;

pub use context::AppContext;
