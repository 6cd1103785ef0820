//! Fabric Bootstrap CLI
//!
//! Usage:
//!   fabric-bootstrap [OPTIONS] <TEMPLATE> <CONFIG> [OUTPUT]
//!
//! Options:
//!   -r, --resources <DIR>  Directory searched for static resources first
//!   -l, --list             List available templates
//!   -v, --verbose          Debug logging
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fabric_bootstrap::{generate_with_options, GenerateOptions};

#[derive(Parser)]
#[command(name = "fabric-bootstrap")]
#[command(about = "Generate message fabric applications and client libraries")]
struct Cli {
    /// Template to generate (see --list)
    #[arg(required_unless_present = "list")]
    template: Option<String>,

    /// Configuration file (TOML format)
    #[arg(required_unless_present = "list")]
    config: Option<PathBuf>,

    /// Output directory (created if needed)
    #[arg(default_value = ".")]
    output: PathBuf,

    /// Directory searched for static resources before the built-in set
    #[arg(short, long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// List available templates
    #[arg(short, long)]
    list: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = GenerateOptions::new();
    if let Some(dir) = &cli.resources {
        options = options.with_resource_dir(dir);
    }

    if cli.list {
        print_templates(&options);
        return;
    }

    let (Some(template), Some(config)) = (&cli.template, &cli.config) else {
        eprintln!("Error: a template and a configuration file are required");
        std::process::exit(1);
    };

    match generate_with_options(template, config, &cli.output, &options) {
        Ok(_) => {
            println!("Generation succeeded.");
        }
        Err(e) => {
            eprintln!("Error: {}", e.format());
            std::process::exit(1);
        }
    }
}

fn print_templates(options: &GenerateOptions) {
    println!("Available templates:");
    for name in options.registry.names() {
        if let Ok(template) = options.registry.create(name) {
            println!("    {:<24}{}", name, template.description());
        }
    }
}
