pub mod align;
pub mod config;
pub mod info;
pub mod offset;
pub mod run;

use anyhow::{bail, Result};
use lapse_core::frame::Region;

/// Parse an `x1,y1,x2,y2` region argument.
pub fn parse_region(text: &str) -> Result<Region> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        bail!("Region must be x1,y1,x2,y2, got '{text}'");
    }
    let mut values = [0usize; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid region coordinate '{part}'"))?;
    }
    Ok(Region::new(values[0], values[1], values[2], values[3]))
}
