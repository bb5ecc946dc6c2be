use crate::error::{LapseError, Result};
use crate::frame::Frame;

/// Normalize brightness flicker across a frame sequence.
///
/// The correction algorithm was never specified; callers must handle the
/// error rather than assume corrected frames.
pub fn deflicker(_frames: &[Frame]) -> Result<Vec<Frame>> {
    Err(LapseError::NotImplemented("deflicker"))
}
