mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wasted_core::config::StoreConfig;

#[derive(Parser)]
#[command(name = "wasted", about = "Wasted storefront tooling")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Store config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products in the catalog
    Catalog(commands::catalog::CatalogArgs),
    /// Show one product with its color variants
    Show(commands::show::ShowArgs),
    /// Print the 3D viewer link for a product image
    Link(commands::link::LinkArgs),
    /// Split shirt print layouts into front and back panels
    Split(commands::split::SplitArgs),
    /// Replay viewport input events and print the resulting transforms
    Simulate(commands::simulate::SimulateArgs),
    /// Print or save the default config and catalog
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StoreConfig::default(),
    };

    match &cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &config),
        Commands::Show(args) => commands::show::run(args, &config),
        Commands::Link(args) => commands::link::run(args, &config),
        Commands::Split(args) => commands::split::run(args),
        Commands::Simulate(args) => commands::simulate::run(args, &config),
        Commands::Config(args) => commands::config::run(args),
    }
}
