use anyhow::Result;
use clap::Args;
use wasted_core::config::StoreConfig;

#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products that come in several colors
    #[arg(long)]
    pub with_variants: bool,
}

pub fn run(args: &CatalogArgs, config: &StoreConfig) -> Result<()> {
    let catalog = config.catalog()?;
    let products: Vec<_> = catalog
        .iter()
        .filter(|p| !args.with_variants || p.has_variants())
        .collect();

    crate::summary::print_catalog(&products);
    Ok(())
}
