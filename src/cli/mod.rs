pub mod menus;
pub mod output;
pub mod prompts;
mod shell;

pub use shell::{run_cli, CliError, CliMode};
