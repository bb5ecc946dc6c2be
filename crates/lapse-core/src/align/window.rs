use ndarray::{Array2, ArrayView2};

/// 1D Hamming window: w[n] = 0.54 - 0.46*cos(2*pi*n/(N-1)).
pub(crate) fn hamming(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    (0..n)
        .map(|i| 0.54 - 0.46 * (std::f64::consts::TAU * i as f64 / (n - 1) as f64).cos())
        .collect()
}

/// Multiply a sub-array by the outer product of Hamming windows sized to
/// its dimensions.
pub(crate) fn apply_hamming(data: ArrayView2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let wy = hamming(h);
    let wx = hamming(w);

    let mut result = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = data[[row, col]] * (wy[row] * wx[col]) as f32;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn single_sample_window_is_unity() {
        assert_eq!(hamming(1), vec![1.0]);
    }

    #[test]
    fn window_is_symmetric_with_low_endpoints() {
        let w = hamming(5);
        assert_relative_eq!(w[0], 0.08, epsilon = 1e-12);
        assert_relative_eq!(w[4], 0.08, epsilon = 1e-12);
        assert_relative_eq!(w[2], 1.0, epsilon = 1e-12);
        assert_relative_eq!(w[1], w[3], epsilon = 1e-12);
    }

    #[test]
    fn window_is_separable_over_the_array() {
        let data = Array2::<f32>::ones((3, 4));
        let windowed = apply_hamming(data.view());
        let wy = hamming(3);
        let wx = hamming(4);
        for row in 0..3 {
            for col in 0..4 {
                assert_relative_eq!(
                    windowed[[row, col]] as f64,
                    wy[row] * wx[col],
                    epsilon = 1e-6
                );
            }
        }
    }
}
