use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Artifact manifest generator for ML project directories
#[derive(Parser, Debug)]
#[command(
    name = "packfile",
    about = "Generate artifact manifests for ML project directories",
    version,
    author,
    long_about = "packfile inspects a project directory and describes its contents as a \
                  manifest: the primary model and its parts, datasets, documentation and \
                  code, along with any license it can detect."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate a manifest for a directory",
        long_about = "Scans the top level of a directory, classifies its files and \
                      subdirectories, and writes a manifest next to them.\n\n\
                      Examples:\n  \
                      packfile init .\n  \
                      packfile init ./my-model --name sentiment --author 'Jane Doe'\n  \
                      packfile init ./my-model --format json --stdout"
    )]
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[arg(value_name = "PATH", help = "Directory to describe")]
    pub path: PathBuf,

    #[arg(long, value_name = "NAME", help = "Package name")]
    pub name: Option<String>,

    #[arg(long = "desc", value_name = "TEXT", help = "Package description")]
    pub description: Option<String>,

    #[arg(
        long = "author",
        value_name = "AUTHOR",
        help = "Package author (can be used multiple times)"
    )]
    pub authors: Vec<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "yaml",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Print the manifest instead of writing it")]
    pub stdout: bool,

    #[arg(long, help = "Overwrite an existing manifest")]
    pub force: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Yaml,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}
