use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{LapseError, Result};

/// A single grayscale image frame.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
            metadata: FrameMetadata::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    pub frame_index: usize,
    pub timestamp_us: Option<u64>,
}

/// Integer translation of a target frame relative to a reference.
///
/// `dx` counts columns, `dy` counts rows; a positive pair means the target
/// content sits down-right of the reference content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub dx: i64,
    pub dy: i64,
}

impl Offset {
    /// The displacement that moves shifted content back onto the reference.
    pub fn inverse(self) -> Offset {
        Offset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Half-open rectangular region of a frame: columns `x1..x2`, rows `y1..y2`.
/// The top-left corner is inclusive, the bottom-right exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Region {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Region covering a whole width x height buffer.
    pub fn full(width: usize, height: usize) -> Self {
        Region::new(0, 0, width, height)
    }

    pub fn width(&self) -> usize {
        self.x2 - self.x1
    }

    pub fn height(&self) -> usize {
        self.y2 - self.y1
    }

    /// Check the region against the dimensions of the buffer it indexes.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        if self.x1 >= self.x2 || self.y1 >= self.y2 {
            return Err(LapseError::InvalidRegion(format!(
                "degenerate region ({},{})-({},{})",
                self.x1, self.y1, self.x2, self.y2
            )));
        }
        if self.x2 > width || self.y2 > height {
            return Err(LapseError::InvalidRegion(format!(
                "region ({},{})-({},{}) exceeds {}x{} buffer",
                self.x1, self.y1, self.x2, self.y2, width, height
            )));
        }
        Ok(())
    }
}
