//! CLI argument parsing for ccf-grid.

mod args;

pub use args::{CellSelector, Cli, Commands, ViewConfig, VERSION};
