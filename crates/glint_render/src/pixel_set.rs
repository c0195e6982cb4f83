//! Pending-pixel bookkeeping for the progressive scheduler.

use rand::{Rng, RngCore};

/// The set of pixel coordinates still awaiting a finalized color.
///
/// Picks are uniform without replacement: the chosen coordinate is
/// swap-removed, so a pick is O(1) and a coordinate never comes back.
pub struct PixelSet {
    pending: Vec<(u32, u32)>,
}

impl PixelSet {
    /// Every pixel of a `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        let mut pending = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pending.push((x, y));
            }
        }
        Self { pending }
    }

    /// Number of coordinates still pending.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if every coordinate has been picked.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return a uniformly random pending coordinate.
    pub fn pick(&mut self, rng: &mut dyn RngCore) -> Option<(u32, u32)> {
        if self.pending.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.pending.len());
        Some(self.pending.swap_remove(index))
    }
}
