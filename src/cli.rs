//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use azdo_annotator::output::OutputMode;

/// azdo-annotator - Azure DevOps identity annotations for catalog entities
#[derive(Parser, Debug)]
#[command(
    name = "azdo-annotator",
    version,
    about = "Annotate catalog entities with their Azure DevOps repository identity",
    long_about = "Annotate catalog entities with their Azure DevOps repository identity.\n\n\
                  When an entity was read from a repository on dev.azure.com or a\n\
                  configured Azure DevOps Server host, the entity gains the\n\
                  dev.azure.com/host-org and dev.azure.com/project-repo annotations.\n\
                  Existing annotations are never replaced."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/azdo-annotator/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annotate an entity read from a file or stdin
    Annotate {
        /// Location target the entity was read from
        #[arg(short, long)]
        target: String,

        /// Location type
        #[arg(long = "type", default_value = "url")]
        location_type: String,

        /// Entity JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        entity: String,

        /// Additional Azure DevOps host (repeatable)
        #[arg(long = "host")]
        hosts: Vec<String>,

        /// Only annotate these kinds (repeatable, overrides config)
        #[arg(short, long = "kind")]
        kinds: Vec<String>,
    },

    /// Show the identity extracted from a repository URL
    Parse {
        /// Repository URL
        url: String,

        /// Additional Azure DevOps host (repeatable)
        #[arg(long = "host")]
        hosts: Vec<String>,
    },

    /// List recognized Azure DevOps hosts
    Hosts,

    /// Show version information
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Annotate {
            target,
            location_type,
            entity,
            hosts,
            kinds,
        }) => commands::annotate(
            &commands::AnnotateArgs {
                target,
                location_type,
                entity,
                hosts,
                kinds,
            },
            config,
            output_mode,
        ),
        Some(Command::Parse { url, hosts }) => commands::parse(&url, &hosts, config, output_mode),
        Some(Command::Hosts) => commands::hosts(config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("azdo-annotator v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("azdo-annotator v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'azdo-annotator --help' for usage");
            }
            Ok(())
        },
    }
}
