pub mod agents;
pub mod cli;
pub mod commands;
pub mod config;
mod context;

pub use context::{AppContext, build_engine};
