//! CLI command definitions for bonfire.

use clap::Parser;
use tracing::info;

use crate::burn::{self, BurnMetrics, RunConfig};
use crate::engine::DockerEngine;
use crate::error::BonfireError;

/// A controlled fire for resetting your local Docker environment.
#[derive(Parser)]
#[command(name = "bonfire")]
#[command(about = "A controlled fire for resetting your local Docker environment")]
#[command(version)]
#[command(
    long_about = "bonfire burns Docker resources (images, containers, networks, and volumes) from a local development environment.\n\nExample usage:\n  bonfire ignite --images --containers\n  bonfire ignite --all --smolder"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Start the fire.
    Ignite(IgniteArgs),
}

/// Arguments for `bonfire ignite`.
#[derive(Parser, Debug)]
pub struct IgniteArgs {
    /// Burn everything (images, containers, networks, volumes).
    #[arg(long)]
    pub all: bool,

    /// Burn all images (not just dangling ones).
    #[arg(long)]
    pub all_images: bool,

    /// Burn dangling images only.
    #[arg(long)]
    pub images: bool,

    /// Burn all containers.
    #[arg(long)]
    pub containers: bool,

    /// Burn all networks (excluding default: bridge, host, none).
    #[arg(long)]
    pub networks: bool,

    /// Burn all volumes.
    #[arg(long)]
    pub volumes: bool,

    /// Non destructive dry run.
    #[arg(long)]
    pub smolder: bool,
}

impl IgniteArgs {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            all: self.all,
            all_images: self.all_images,
            images: self.images,
            containers: self.containers,
            networks: self.networks,
            volumes: self.volumes,
            smolder: self.smolder,
        }
    }
}

/// Parses CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the parsed CLI command.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    println!("{}", banner());

    match cli.command {
        Commands::Ignite(args) => ignite(args).await,
    }
}

async fn ignite(args: IgniteArgs) -> anyhow::Result<()> {
    match run_ignite(&args).await {
        Ok(metrics) => {
            print_report(&metrics);
            Ok(())
        }
        Err(e) => {
            println!("[!] {e}");
            std::process::exit(1);
        }
    }
}

async fn run_ignite(args: &IgniteArgs) -> Result<BurnMetrics, BonfireError> {
    let engine = DockerEngine::connect()?;
    let config = args.run_config();
    info!(?config, "igniting");
    burn::process(&engine, config).await
}

fn print_report(metrics: &BurnMetrics) {
    println!("\n[*] The bonfire is over!");
    for (kind, count) in metrics.iter() {
        if count > 0 {
            println!("[-] {count} {kind}s burned");
        }
    }
}

fn banner() -> &'static str {
    r"
      (  .      )
   )           (              )
         .  '   .   '  .  '  .
  (    , )       (.   )  (   ',    )
   .' ) ( . )    ,  ( ,     )   ( .
)_ . , ( .   ) ( )   ,. ) ( . )  ( .
"
}
