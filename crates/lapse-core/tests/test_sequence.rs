use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array2;

use lapse_core::align::{align_sequence, compute_offsets};
use lapse_core::config::{AlignConfig, DebugConfig};
use lapse_core::error::LapseError;
use lapse_core::frame::{Frame, Offset};

fn spike_frame(h: usize, w: usize, row: usize, col: usize, value: f32) -> Frame {
    let mut data = Array2::<f32>::zeros((h, w));
    data[[row, col]] = value;
    Frame::new(data, 8)
}

#[test]
fn serial_sequence_aligns_to_reference() {
    // Three frames stays below the parallel threshold.
    let frames = vec![
        spike_frame(16, 16, 8, 8, 1.0),
        spike_frame(16, 16, 9, 8, 0.5),
        spike_frame(16, 16, 8, 10, 0.25),
    ];

    let count = AtomicUsize::new(0);
    let aligned = align_sequence(&frames, 0, &AlignConfig::default(), |_| {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();

    assert_eq!(count.load(Ordering::Relaxed), 3);
    assert_eq!(aligned.len(), 3);
    for (i, value) in [1.0f32, 0.5, 0.25].iter().enumerate() {
        assert_eq!(aligned[i].data[[8, 8]], *value, "frame {i}");
    }
}

#[test]
fn parallel_sequence_preserves_order() {
    // Five frames crosses the parallel threshold; distinct intensities
    // prove the output order matches the input order.
    let mut frames = vec![spike_frame(32, 32, 16, 16, 1.0)];
    for i in 1..5usize {
        let value = 1.0 / (i + 1) as f32;
        frames.push(spike_frame(32, 32, 16 + i, 16 - i, value));
    }

    let aligned = align_sequence(&frames, 0, &AlignConfig::default(), |_| {}).unwrap();

    for (i, frame) in aligned.iter().enumerate() {
        let expected = if i == 0 { 1.0 } else { 1.0 / (i + 1) as f32 };
        assert_eq!(frame.data[[16, 16]], expected, "frame {i}");
    }
}

#[test]
fn offsets_report_reference_as_zero() {
    let frames = vec![
        spike_frame(16, 16, 8, 8, 1.0),
        spike_frame(16, 16, 10, 11, 1.0),
    ];

    let offsets = compute_offsets(&frames, 0, &AlignConfig::default(), |_| {}).unwrap();
    assert_eq!(offsets[0], Offset { dx: 0, dy: 0 });
    assert_eq!(offsets[1], Offset { dx: 3, dy: 2 });
}

#[test]
fn nonzero_reference_index_is_honored() {
    let frames = vec![
        spike_frame(16, 16, 9, 9, 1.0),
        spike_frame(16, 16, 8, 8, 1.0),
    ];

    let offsets = compute_offsets(&frames, 1, &AlignConfig::default(), |_| {}).unwrap();
    assert_eq!(offsets[1], Offset { dx: 0, dy: 0 });
    assert_eq!(offsets[0], Offset { dx: 1, dy: 1 });
}

#[test]
fn empty_sequence_is_rejected() {
    let err = align_sequence(&[], 0, &AlignConfig::default(), |_| {}).unwrap_err();
    assert!(matches!(err, LapseError::EmptySequence));

    let err = compute_offsets(&[], 0, &AlignConfig::default(), |_| {}).unwrap_err();
    assert!(matches!(err, LapseError::EmptySequence));
}

#[test]
fn debug_config_saves_correlation_maps() {
    let dir = tempfile::tempdir().unwrap();
    let frames = vec![
        spike_frame(16, 16, 8, 8, 1.0),
        spike_frame(16, 16, 9, 9, 1.0),
    ];

    let config = AlignConfig {
        debug: DebugConfig {
            save_correlation: true,
            output_dir: Some(dir.path().to_path_buf()),
        },
        ..AlignConfig::default()
    };
    align_sequence(&frames, 0, &config, |_| {}).unwrap();

    // The reference frame is never correlated against itself.
    assert!(dir.path().join("correlation_0001.png").exists());
    assert!(!dir.path().join("correlation_0000.png").exists());
}
