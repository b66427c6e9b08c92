use packfile::cli::commands::{CliArgs, Commands, InitArgs};
use packfile::cli::output::{OutputFormat, OutputFormatter};
use packfile::util::logging::{init_logging, parse_level, LoggingConfig};
use packfile::{ManifestGenerator, Package, PackfileConfig, NAME, VERSION};

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Init(init_args) => handle_init(init_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
}

fn handle_init(args: &InitArgs) -> i32 {
    match run_init(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

fn run_init(args: &InitArgs) -> Result<()> {
    let config = PackfileConfig::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    debug!("Configuration loaded:\n{}", config);

    let root: PathBuf = args
        .path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path {}", args.path.display()))?;
    debug!("Generating manifest for {}", root.display());

    let format: OutputFormat = args.format.into();
    let target = root.join(format.file_name(&config.manifest_name));
    if !args.stdout && target.exists() && !args.force {
        bail!(
            "Manifest already exists at {}; use --force to overwrite",
            target.display()
        );
    }

    let package = Package {
        name: args.name.clone(),
        description: args.description.clone(),
        authors: args.authors.clone(),
        license: None,
    };

    let generator = ManifestGenerator::new().with_config(config.generator_config());
    let manifest = generator
        .generate(&root, Some(package))
        .context("Failed to generate manifest")?;

    let rendered = OutputFormatter::new(format).format(&manifest)?;

    if args.stdout {
        io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write manifest to stdout")?;
        return Ok(());
    }

    info!("Generated manifest:\n{}", rendered);
    fs::write(&target, rendered)
        .with_context(|| format!("Failed to write manifest to {}", target.display()))?;
    info!("Manifest saved to {}", target.display());

    Ok(())
}
