//! Command implementations for the CLI.

mod compute;
mod config;
mod reference;

pub use compute::cmd_compute;
pub use config::cmd_config;
pub use reference::{cmd_breakpoints, cmd_categories, cmd_pollutants, cmd_sub_index};
