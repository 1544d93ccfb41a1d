use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wasted_core::catalog::Catalog;
use wasted_core::config::StoreConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the built-in catalog instead of the store config
    #[arg(long)]
    pub catalog: bool,
}

/// Print or save the default StoreConfig (or the built-in catalog) as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let (what, toml_str) = if args.catalog {
        ("Catalog", Catalog::builtin().to_toml_string()?)
    } else {
        ("Default config", StoreConfig::default().to_toml_string()?)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        println!("{what} saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
