use ndarray::Array2;

use lapse_core::error::LapseError;
use lapse_core::filters::deflicker::deflicker;
use lapse_core::frame::Frame;
use lapse_core::io::convert::{convert_from, convert_to};

#[test]
fn deflicker_fails_loudly() {
    let frames = vec![Frame::new(Array2::<f32>::zeros((4, 4)), 8)];
    let err = deflicker(&frames).unwrap_err();
    assert!(matches!(err, LapseError::NotImplemented(_)));
}

#[test]
fn format_conversion_fails_loudly() {
    let frame = Frame::new(Array2::<f32>::zeros((4, 4)), 8);
    assert!(matches!(
        convert_to(&frame, "fits").unwrap_err(),
        LapseError::NotImplemented(_)
    ));
    assert!(matches!(
        convert_from(&[], "fits").unwrap_err(),
        LapseError::NotImplemented(_)
    ));
}
