//! Grow-and-retry orchestration over the skyline packer.

use crate::error::{AtlasError, Result};
use crate::packer::SkylinePacker;
use tracing::debug;

/// Drives placement across an ordered asset list on a square canvas that
/// doubles whenever a rectangle fails to fit.
///
/// Each growth cycle owns a fresh packer: prior placements are replayed into
/// it in their original insertion order, so coordinates recorded before a
/// growth event are provisional. Only the positions after the last
/// successful pass are final.
pub struct AtlasBuilder {
    packer: SkylinePacker,
    sizes: Vec<(u32, u32)>,
    positions: Vec<(u32, u32)>,
}

impl AtlasBuilder {
    pub fn new(seed_size: u32) -> Self {
        Self {
            packer: SkylinePacker::new(seed_size, seed_size),
            sizes: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Current canvas side length.
    pub fn canvas_size(&self) -> u32 {
        self.packer.width()
    }

    /// Positions of all placed rectangles, in insertion order, valid for the
    /// current canvas size.
    pub fn positions(&self) -> &[(u32, u32)] {
        &self.positions
    }

    /// Places one rectangle, growing the canvas as needed.
    ///
    /// Fails with `CanvasUnbounded` if doubling would overflow the
    /// representable side length.
    pub fn place(&mut self, w: u32, h: u32) -> Result<(u32, u32)> {
        if let Some(pos) = self.packer.try_place(w, h) {
            self.sizes.push((w, h));
            self.positions.push(pos);
            return Ok(pos);
        }

        let mut size = self.canvas_size();
        loop {
            size = size
                .checked_mul(2)
                .ok_or(AtlasError::CanvasUnbounded {
                    width: size,
                    height: size,
                })?;
            debug!(size, "rectangle did not fit; canvas doubled");

            let mut packer = SkylinePacker::new(size, size);
            let mut positions = Vec::with_capacity(self.sizes.len() + 1);
            for &(pw, ph) in &self.sizes {
                match packer.try_place(pw, ph) {
                    Some(pos) => positions.push(pos),
                    None => break,
                }
            }
            // The replay itself can come up short on a layout-sensitive
            // boundary; keep doubling until both the replay and the new
            // rectangle succeed.
            if positions.len() < self.sizes.len() {
                continue;
            }
            let Some(pos) = packer.try_place(w, h) else {
                continue;
            };
            positions.push(pos);

            self.packer = packer;
            self.positions = positions;
            self.sizes.push((w, h));
            return Ok(pos);
        }
    }
}
