use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lapse_core::align::estimate_offset;
use lapse_core::io::image_io::load_image;

use super::parse_region;

#[derive(Args)]
pub struct OffsetArgs {
    /// Reference image file
    #[arg(short, long)]
    pub reference: PathBuf,

    /// Target image file
    #[arg(short, long)]
    pub target: PathBuf,

    /// Compare only this region of the reference (x1,y1,x2,y2)
    #[arg(long)]
    pub region: Option<String>,

    /// Skip the Hamming window
    #[arg(long)]
    pub no_window: bool,
}

pub fn run(args: &OffsetArgs) -> Result<()> {
    let reference = load_image(&args.reference)
        .with_context(|| format!("Failed to load {}", args.reference.display()))?;
    let target = load_image(&args.target)
        .with_context(|| format!("Failed to load {}", args.target.display()))?;

    let region = args.region.as_deref().map(parse_region).transpose()?;
    let offset = estimate_offset(&reference, &target, region.as_ref(), None, !args.no_window)?;

    println!("dx = {}, dy = {}", offset.dx, offset.dy);
    Ok(())
}
