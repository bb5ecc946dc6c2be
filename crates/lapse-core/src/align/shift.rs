use ndarray::Array2;

use crate::error::Result;
use crate::frame::{Frame, Offset, Region};

use super::correlation::estimate_offset_array;

/// Translate an array by an integer offset, filling vacated samples with 0.
///
/// Each output position is sourced from `arr[row - dy, col - dx]`: `dy`
/// moves content down the rows, `dx` right along the columns. The (dx, dy)
/// tuple is x-first while the array is row-first, so the pairing of `dy`
/// with the row index is part of the contract, not an implementation
/// detail. The input is never mutated.
pub fn shift_array(data: &Array2<f32>, offset: Offset) -> Array2<f32> {
    let (h, w) = data.dim();
    let mut result = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        let src_row = row as i64 - offset.dy;
        if src_row < 0 || src_row >= h as i64 {
            continue;
        }
        for col in 0..w {
            let src_col = col as i64 - offset.dx;
            if src_col >= 0 && src_col < w as i64 {
                result[[row, col]] = data[[src_row as usize, src_col as usize]];
            }
        }
    }

    result
}

/// Translate a frame by an integer offset.
pub fn shift_frame(frame: &Frame, offset: Offset) -> Frame {
    Frame::new(shift_array(&frame.data, offset), frame.original_bit_depth)
}

/// Register `target` onto `reference`: estimate the displacement with
/// windowing enabled, then pull the target content back by its inverse.
pub fn align_array(
    reference: &Array2<f32>,
    target: &Array2<f32>,
    reference_region: Option<&Region>,
) -> Result<Array2<f32>> {
    let offset = estimate_offset_array(reference, target, reference_region, None, true)?;
    Ok(shift_array(target, offset.inverse()))
}

/// Register a target frame onto a reference frame.
pub fn align_frame(
    reference: &Frame,
    target: &Frame,
    reference_region: Option<&Region>,
) -> Result<Frame> {
    let data = align_array(&reference.data, &target.data, reference_region)?;
    Ok(Frame::new(data, target.original_bit_depth))
}
