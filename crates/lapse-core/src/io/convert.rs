use crate::error::{LapseError, Result};
use crate::frame::Frame;

/// Encode a frame into an external interchange format.
///
/// No conversion algorithm was ever specified; callers get an explicit
/// error instead of a silent no-op.
pub fn convert_to(_frame: &Frame, _format: &str) -> Result<Vec<u8>> {
    Err(LapseError::NotImplemented("format conversion"))
}

/// Build a frame from an external interchange format.
///
/// See [`convert_to`].
pub fn convert_from(_bytes: &[u8], _format: &str) -> Result<Frame> {
    Err(LapseError::NotImplemented("format conversion"))
}
