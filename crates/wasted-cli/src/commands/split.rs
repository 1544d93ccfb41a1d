use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use wasted_core::texture::split_texture_files;

#[derive(Args)]
pub struct SplitArgs {
    /// Print layout images (front on the left half, back on the right)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory for the `<name>_front.png` / `<name>_back.png` panels
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

pub fn run(args: &SplitArgs) -> Result<()> {
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Splitting [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let results = split_texture_files(&args.files, &args.output, |done| {
        pb.set_position(done as u64);
    });
    pb.finish();

    let mut failed = 0;
    for (input, result) in args.files.iter().zip(&results) {
        match result {
            Ok((front, back)) => {
                println!("{} -> {}, {}", input.display(), front.display(), back.display())
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}: {e}", input.display());
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} textures could not be split", args.files.len());
    }
    Ok(())
}
