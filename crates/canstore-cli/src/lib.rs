mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod state;
pub mod types;

pub use args::{Cli, Commands, FilterArgs};
pub use commands::run;
