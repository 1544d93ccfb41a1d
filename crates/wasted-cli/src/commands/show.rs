use anyhow::Result;
use clap::Args;
use wasted_core::config::StoreConfig;

#[derive(Args)]
pub struct ShowArgs {
    /// Product id
    pub id: u32,
}

pub fn run(args: &ShowArgs, config: &StoreConfig) -> Result<()> {
    let catalog = config.catalog()?;
    let product = catalog.get(args.id)?;
    crate::summary::print_product(product);
    Ok(())
}
