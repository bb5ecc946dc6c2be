use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lapse_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut sum = 0.0f64;
    for &v in frame.data.iter() {
        min = min.min(v);
        max = max.max(v);
        sum += v as f64;
    }
    let mean = sum / frame.data.len() as f64;

    println!("{}", args.file.display());
    println!("  Dimensions: {}x{}", frame.width(), frame.height());
    println!("  Bit depth:  {}", frame.original_bit_depth);
    println!("  Intensity:  min {:.4}, max {:.4}, mean {:.4}", min, max, mean);

    Ok(())
}
