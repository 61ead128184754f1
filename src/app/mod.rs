pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod view;

pub use context::AppContext;
