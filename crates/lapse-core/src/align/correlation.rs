use ndarray::{s, Array2, ArrayView2};
use num_complex::Complex;
use rustfft::FftPlanner;

use crate::consts::MAX_CORRELATION_ELEMENTS;
use crate::error::{LapseError, Result};
use crate::frame::{Frame, Offset, Region};

use super::window::apply_hamming;

/// Estimate the integer translation of `target` relative to `reference`
/// from the peak of their full linear cross-correlation.
///
/// Optional regions restrict the comparison to a sub-rectangle of either
/// array; omitted regions default to the whole array. With `use_window` the
/// sub-arrays are tapered by a separable Hamming window first, which
/// suppresses edge content that can bias the peak toward the border (at
/// some cost in accuracy on very small regions).
///
/// The returned pair follows one fixed convention: a target that is an
/// exact copy of the reference shifted down-right by (sx, sy) yields
/// (dx, dy) = (sx, sy).
pub fn estimate_offset_array(
    reference: &Array2<f32>,
    target: &Array2<f32>,
    reference_region: Option<&Region>,
    target_region: Option<&Region>,
    use_window: bool,
) -> Result<Offset> {
    estimate_offset_array_detailed(reference, target, reference_region, target_region, use_window)
        .map(|(offset, _)| offset)
}

/// Same as [`estimate_offset_array`], additionally returning the
/// correlation surface for debug inspection.
pub fn estimate_offset_array_detailed(
    reference: &Array2<f32>,
    target: &Array2<f32>,
    reference_region: Option<&Region>,
    target_region: Option<&Region>,
    use_window: bool,
) -> Result<(Offset, Array2<f64>)> {
    if reference.is_empty() || target.is_empty() {
        return Err(LapseError::EmptyInput);
    }

    let ref_region = resolve_region(reference_region, reference)?;
    let tgt_region = resolve_region(target_region, target)?;

    let ref_sub = reference.slice(s![
        ref_region.y1..ref_region.y2,
        ref_region.x1..ref_region.x2
    ]);
    let tgt_sub = target.slice(s![
        tgt_region.y1..tgt_region.y2,
        tgt_region.x1..tgt_region.x2
    ]);

    let surface = if use_window {
        let ref_windowed = apply_hamming(ref_sub);
        let tgt_windowed = apply_hamming(tgt_sub);
        cross_correlate(tgt_windowed.view(), ref_windowed.view())?
    } else {
        cross_correlate(tgt_sub, ref_sub)?
    };

    let (peak_row, peak_col, _) = find_peak(&surface);

    // Zero displacement puts the peak at lag (h1-1, w1-1) of the reference
    // sub-array; the region corners translate sub-array lags back into
    // image coordinates.
    let dx = peak_col as i64 + tgt_region.x1 as i64 - (ref_region.x2 as i64 - 1);
    let dy = peak_row as i64 + tgt_region.y1 as i64 - (ref_region.y2 as i64 - 1);

    Ok((Offset { dx, dy }, surface))
}

/// Estimate the offset between two frames.
pub fn estimate_offset(
    reference: &Frame,
    target: &Frame,
    reference_region: Option<&Region>,
    target_region: Option<&Region>,
    use_window: bool,
) -> Result<Offset> {
    estimate_offset_array(
        &reference.data,
        &target.data,
        reference_region,
        target_region,
        use_window,
    )
}

fn resolve_region(region: Option<&Region>, data: &Array2<f32>) -> Result<Region> {
    let (h, w) = data.dim();
    match region {
        Some(r) => {
            r.validate(w, h)?;
            Ok(r.clone())
        }
        None => Ok(Region::full(w, h)),
    }
}

/// Full 2D linear cross-correlation of `target` against `reference`.
///
/// Both inputs are zero padded to (h1+h2-1) x (w1+w2-1) so no wraparound
/// occurs; the reference enters reversed along both axes, which turns the
/// FFT convolution into a correlation. The lag origin (zero displacement)
/// sits at (h1-1, w1-1) for an h1 x w1 reference.
fn cross_correlate(target: ArrayView2<f32>, reference: ArrayView2<f32>) -> Result<Array2<f64>> {
    let (h1, w1) = reference.dim();
    let (h2, w2) = target.dim();
    let out_h = h1 + h2 - 1;
    let out_w = w1 + w2 - 1;

    if out_h
        .checked_mul(out_w)
        .map_or(true, |n| n > MAX_CORRELATION_ELEMENTS)
    {
        return Err(LapseError::ResourceExhausted(format!(
            "correlation surface {}x{} exceeds the {} element limit",
            out_w, out_h, MAX_CORRELATION_ELEMENTS
        )));
    }

    let mut tgt = Array2::<Complex<f64>>::zeros((out_h, out_w));
    for row in 0..h2 {
        for col in 0..w2 {
            tgt[[row, col]] = Complex::new(target[[row, col]] as f64, 0.0);
        }
    }

    let mut rev = Array2::<Complex<f64>>::zeros((out_h, out_w));
    for row in 0..h1 {
        for col in 0..w1 {
            rev[[h1 - 1 - row, w1 - 1 - col]] = Complex::new(reference[[row, col]] as f64, 0.0);
        }
    }

    fft2d(&mut tgt);
    fft2d(&mut rev);

    for (t, r) in tgt.iter_mut().zip(rev.iter()) {
        *t *= *r;
    }

    ifft2d(&mut tgt);

    let mut result = Array2::<f64>::zeros((out_h, out_w));
    for row in 0..out_h {
        for col in 0..out_w {
            result[[row, col]] = tgt[[row, col]].re;
        }
    }

    Ok(result)
}

/// Locate the maximum of a correlation surface.
///
/// Ties resolve to the first occurrence in row-major order (lowest row,
/// then lowest column), which keeps repeated runs deterministic.
pub fn find_peak(data: &Array2<f64>) -> (usize, usize, f64) {
    let (h, w) = data.dim();
    let mut best_row = 0;
    let mut best_col = 0;
    let mut best_val = f64::NEG_INFINITY;

    for row in 0..h {
        for col in 0..w {
            if data[[row, col]] > best_val {
                best_val = data[[row, col]];
                best_row = row;
                best_col = col;
            }
        }
    }

    (best_row, best_col, best_val)
}

/// 2D FFT in place: row-wise pass, then column-wise pass.
fn fft2d(data: &mut Array2<Complex<f64>>) {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft_forward(w);
    let fft_col = planner.plan_fft_forward(h);

    for row in 0..h {
        let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| data[[row, c]]).collect();
        fft_row.process(&mut row_data);
        for col in 0..w {
            data[[row, col]] = row_data[col];
        }
    }

    for col in 0..w {
        let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| data[[r, col]]).collect();
        fft_col.process(&mut col_data);
        for row in 0..h {
            data[[row, col]] = col_data[row];
        }
    }
}

/// Inverse 2D FFT in place, including the 1/(h*w) normalization.
fn ifft2d(data: &mut Array2<Complex<f64>>) {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let ifft_row = planner.plan_fft_inverse(w);
    let ifft_col = planner.plan_fft_inverse(h);

    for col in 0..w {
        let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| data[[r, col]]).collect();
        ifft_col.process(&mut col_data);
        for row in 0..h {
            data[[row, col]] = col_data[row];
        }
    }

    for row in 0..h {
        let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| data[[row, c]]).collect();
        ifft_row.process(&mut row_data);
        for col in 0..w {
            data[[row, col]] = row_data[col];
        }
    }

    let scale = 1.0 / (h * w) as f64;
    data.mapv_inplace(|v| v * scale);
}
