pub mod commands;
pub mod output;

pub use commands::{CliArgs, Commands, InitArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
