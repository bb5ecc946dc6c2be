use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lapse_core::align::{estimate_offset_array_detailed, shift_frame};
use lapse_core::io::image_io::{load_image, save_correlation_png, save_image};

use super::parse_region;

#[derive(Args)]
pub struct AlignArgs {
    /// Reference image file
    #[arg(short, long)]
    pub reference: PathBuf,

    /// Target image file
    #[arg(short, long)]
    pub target: PathBuf,

    /// Compare only this region of the reference (x1,y1,x2,y2)
    #[arg(long)]
    pub region: Option<String>,

    /// Save the correlation surface next to the output
    #[arg(long)]
    pub dump_correlation: bool,

    /// Output file path
    #[arg(short, long, default_value = "aligned.png")]
    pub output: PathBuf,
}

pub fn run(args: &AlignArgs) -> Result<()> {
    let reference = load_image(&args.reference)
        .with_context(|| format!("Failed to load {}", args.reference.display()))?;
    let target = load_image(&args.target)
        .with_context(|| format!("Failed to load {}", args.target.display()))?;

    let region = args.region.as_deref().map(parse_region).transpose()?;
    let (offset, surface) =
        estimate_offset_array_detailed(&reference.data, &target.data, region.as_ref(), None, true)?;
    println!("Estimated offset: dx = {}, dy = {}", offset.dx, offset.dy);

    if args.dump_correlation {
        let path = args.output.with_extension("correlation.png");
        save_correlation_png(&surface, &path)?;
        println!("Correlation map saved to {}", path.display());
    }

    let aligned = shift_frame(&target, offset.inverse());
    save_image(&aligned, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
