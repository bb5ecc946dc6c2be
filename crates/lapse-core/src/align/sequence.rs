use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::AlignConfig;
use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::error::{LapseError, Result};
use crate::frame::{Frame, Offset};
use crate::io::image_io::save_correlation_png;

use super::correlation::{estimate_offset_array, estimate_offset_array_detailed};
use super::shift::shift_array;

/// Align every frame of a sequence to the frame at `reference_idx`.
///
/// Output order matches input order; `on_frame_done` receives the running
/// completion count. Sequences at or above `PARALLEL_FRAME_THRESHOLD`
/// frames are processed with Rayon, which does not change per-pair results.
pub fn align_sequence<F>(
    frames: &[Frame],
    reference_idx: usize,
    config: &AlignConfig,
    on_frame_done: F,
) -> Result<Vec<Frame>>
where
    F: Fn(usize) + Send + Sync,
{
    if frames.is_empty() {
        return Err(LapseError::EmptySequence);
    }

    let reference = &frames[reference_idx];
    let counter = AtomicUsize::new(0);

    let align_one = |i: usize, frame: &Frame| -> Result<Frame> {
        let result = if i == reference_idx {
            frame.clone()
        } else {
            let (offset, surface) = estimate_offset_array_detailed(
                &reference.data,
                &frame.data,
                config.reference_region.as_ref(),
                None,
                config.use_window,
            )?;
            debug!(frame = i, dx = offset.dx, dy = offset.dy, "Frame offset");
            save_debug_surface(config, i, &surface);
            Frame::new(
                shift_array(&frame.data, offset.inverse()),
                frame.original_bit_depth,
            )
        };
        let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
        on_frame_done(done);
        Ok(result)
    };

    let aligned: Result<Vec<Frame>> = if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames
            .par_iter()
            .enumerate()
            .map(|(i, frame)| align_one(i, frame))
            .collect()
    } else {
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| align_one(i, frame))
            .collect()
    };

    let aligned = aligned?;
    info!(count = aligned.len(), "Sequence aligned");
    Ok(aligned)
}

/// Compute the per-frame offsets of a sequence without shifting anything.
/// The reference frame reports (0, 0).
pub fn compute_offsets<F>(
    frames: &[Frame],
    reference_idx: usize,
    config: &AlignConfig,
    on_frame_done: F,
) -> Result<Vec<Offset>>
where
    F: Fn(usize) + Send + Sync,
{
    if frames.is_empty() {
        return Err(LapseError::EmptySequence);
    }

    let reference = &frames[reference_idx];
    let counter = AtomicUsize::new(0);

    let offset_one = |i: usize, frame: &Frame| -> Result<Offset> {
        let offset = if i == reference_idx {
            Offset::default()
        } else {
            estimate_offset_array(
                &reference.data,
                &frame.data,
                config.reference_region.as_ref(),
                None,
                config.use_window,
            )?
        };
        let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
        on_frame_done(done);
        Ok(offset)
    };

    if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames
            .par_iter()
            .enumerate()
            .map(|(i, frame)| offset_one(i, frame))
            .collect()
    } else {
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| offset_one(i, frame))
            .collect()
    }
}

/// Best-effort save of a correlation surface when debug output is enabled.
fn save_debug_surface(config: &AlignConfig, index: usize, surface: &Array2<f64>) {
    if !config.debug.save_correlation {
        return;
    }
    if let Some(dir) = &config.debug.output_dir {
        let path = dir.join(format!("correlation_{:04}.png", index));
        if let Err(err) = save_correlation_png(surface, &path) {
            warn!(frame = index, error = %err, "Failed to save correlation map");
        }
    }
}
