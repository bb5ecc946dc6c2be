use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::frame::Region;

/// Settings for sequence alignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Apply a Hamming window before correlating. Attenuates edge content
    /// that otherwise biases the correlation peak toward the border.
    #[serde(default = "default_use_window")]
    pub use_window: bool,

    /// Restrict the comparison to a region of the reference frame.
    #[serde(default)]
    pub reference_region: Option<Region>,

    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            use_window: true,
            reference_region: None,
            debug: DebugConfig::default(),
        }
    }
}

/// Debug output settings, passed in explicitly rather than read from a
/// process-wide flag.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Save each correlation surface as a grayscale PNG.
    #[serde(default)]
    pub save_correlation: bool,

    /// Directory for debug output files.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_use_window() -> bool {
    true
}
