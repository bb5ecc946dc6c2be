pub mod correlation;
pub mod sequence;
pub mod shift;
mod window;

pub use correlation::{
    estimate_offset, estimate_offset_array, estimate_offset_array_detailed, find_peak,
};
pub use sequence::{align_sequence, compute_offsets};
pub use shift::{align_array, align_frame, shift_array, shift_frame};
