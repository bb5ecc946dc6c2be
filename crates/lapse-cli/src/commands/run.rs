use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use lapse_core::align::align_sequence;
use lapse_core::config::AlignConfig;
use lapse_core::filters::deflicker::deflicker;
use lapse_core::io::image_io::{load_image, save_image};
use tracing::debug;

#[derive(Args)]
pub struct RunArgs {
    /// Directory of input frames
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for aligned frames
    #[arg(short, long)]
    pub output: PathBuf,

    /// Index of the reference frame within the sorted input list
    #[arg(long, default_value = "0")]
    pub reference_index: usize,

    /// Alignment config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Apply flicker correction before aligning
    #[arg(long)]
    pub deflicker: bool,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => AlignConfig::default(),
    };
    debug!(?config, "Alignment config");

    let files = frame_files(&args.input)?;
    if files.is_empty() {
        bail!("No image files found in {}", args.input.display());
    }
    if args.reference_index >= files.len() {
        bail!(
            "Reference index {} out of range ({} frames)",
            args.reference_index,
            files.len()
        );
    }

    let header = Style::new().cyan().bold();
    println!("{}", header.apply_to("Lapse alignment"));
    println!(
        "  {} frames, reference #{}",
        files.len(),
        args.reference_index
    );

    let mut frames = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        let mut frame =
            load_image(file).with_context(|| format!("Failed to load {}", file.display()))?;
        frame.metadata.frame_index = i;
        frames.push(frame);
    }

    let frames = if args.deflicker {
        deflicker(&frames)?
    } else {
        frames
    };

    let pb = ProgressBar::new(frames.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Aligning [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let aligned = align_sequence(&frames, args.reference_index, &config, |done| {
        pb.set_position(done as u64)
    })?;
    pb.finish();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for (file, frame) in files.iter().zip(&aligned) {
        let name = file.file_name().expect("listed files have names");
        save_image(frame, &args.output.join(name))?;
    }

    println!(
        "Saved {} aligned frames to {}",
        aligned.len(),
        args.output.display()
    );
    Ok(())
}

/// Sorted list of image files in a directory.
fn frame_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("png" | "tif" | "tiff" | "jpg" | "jpeg") => files.push(path),
            _ => {}
        }
    }
    files.sort();
    Ok(files)
}
