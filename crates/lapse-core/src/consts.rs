/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Maximum element count of a full correlation surface. The padded surface
/// for h1 x w1 and h2 x w2 inputs holds (h1+h2-1)*(w1+w2-1) elements; this
/// cap keeps the transient FFT buffers within a few GiB while still
/// admitting a pair of 4096x4096 frames.
pub const MAX_CORRELATION_ELEMENTS: usize = 1 << 26;
