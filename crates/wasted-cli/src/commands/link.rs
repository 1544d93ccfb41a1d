use anyhow::{bail, Result};
use clap::Args;
use wasted_core::config::StoreConfig;
use wasted_core::share::viewer_link;

#[derive(Args)]
pub struct LinkArgs {
    /// Product id
    pub id: u32,

    /// Color variant to link instead of the initial image
    #[arg(long)]
    pub color: Option<String>,
}

pub fn run(args: &LinkArgs, config: &StoreConfig) -> Result<()> {
    let catalog = config.catalog()?;
    let product = catalog.get(args.id)?;

    let image = match &args.color {
        Some(color) => match product.colors.iter().find(|v| v.color == *color) {
            Some(variant) => variant.image.as_str(),
            None => {
                let known: Vec<_> = product.colors.iter().map(|v| v.color.as_str()).collect();
                if known.is_empty() {
                    bail!("{} has no color variants", product.name);
                }
                bail!("Unknown color '{color}' (available: {})", known.join(", "));
            }
        },
        None => product.initial_image(),
    };

    println!("{}", viewer_link(&config.site()?, image)?);
    Ok(())
}
