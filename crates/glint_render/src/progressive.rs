//! Progressive, budgeted pixel scheduling.

use crate::{gen_f32, trace, Camera, Color, Hittable, PixelSet, PixelSink, RenderSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What one tick accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Pixels finalized during the tick
    pub resolved: u32,
    /// Pixels still pending afterwards
    pub remaining: usize,
}

/// Resolves a film a few randomly chosen pixels per tick.
///
/// Driven by an external display loop: each tick finalizes a budgeted
/// number of pixels and returns, so the driver can repaint between ticks
/// and the image fills in as scattered points that gradually close up.
///
/// Pixels are finalized all or nothing. A color is written only after every
/// sample for that pixel has resolved, so a run can stop between ticks with
/// no partial state to clean up, and no pixel is ever visited twice.
pub struct ProgressiveRenderer {
    width: u32,
    height: u32,
    pending: PixelSet,
    settings: RenderSettings,
    rng: StdRng,
}

impl ProgressiveRenderer {
    /// Schedule every pixel of a `width` x `height` film, entropy-seeded.
    pub fn new(width: u32, height: u32, settings: RenderSettings) -> Self {
        Self::with_rng(width, height, settings, StdRng::from_entropy())
    }

    /// Like `new`, but with a caller-supplied engine for deterministic runs.
    pub fn with_rng(width: u32, height: u32, settings: RenderSettings, rng: StdRng) -> Self {
        Self {
            width,
            height,
            pending: PixelSet::full(width, height),
            settings,
            rng,
        }
    }

    /// Check if every pixel has been finalized.
    pub fn finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pixels not yet finalized.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Pixel budget for one tick at the given display magnification.
    ///
    /// Higher magnification means each resolved pixel covers more screen
    /// area, so the budget shrinks to keep a tick's cost roughly level
    /// however large the driver scales the output.
    fn budget(&self, magnification: f32) -> f32 {
        let scale = if magnification.is_finite() && magnification > 0.0 {
            magnification
        } else {
            1.0
        };
        (self.settings.tick_budget as f32 / scale).max(1.0)
    }

    /// Run one tick: finalize up to the budgeted number of pixels.
    ///
    /// Each picked pixel gets `samples_per_pixel` jittered primary rays and
    /// the averaged color lands at `(x, height - 1 - y)`, flipping between
    /// the camera's upward v and the sink's downward rows. A tick on a
    /// finished renderer is a no-op.
    pub fn tick(
        &mut self,
        world: &dyn Hittable,
        camera: &Camera,
        film: &mut dyn PixelSink,
        magnification: f32,
    ) -> TickReport {
        debug_assert_eq!(film.width(), self.width);
        debug_assert_eq!(film.height(), self.height);

        let budget = self.budget(magnification);
        let samples = self.settings.samples_per_pixel.max(1);
        let mut resolved = 0u32;

        while let Some((x, y)) = self.pending.pick(&mut self.rng) {
            let mut color = Color::ZERO;
            for _ in 0..samples {
                let u = (x as f32 + gen_f32(&mut self.rng)) / self.width as f32;
                let v = (y as f32 + gen_f32(&mut self.rng)) / self.height as f32;
                color += trace(world, camera.ray(u, v), &self.settings, &mut self.rng);
            }
            color /= samples as f32;

            film.set_pixel(x, self.height - 1 - y, color);

            resolved += 1;
            if resolved as f32 > budget {
                break;
            }
        }

        if resolved > 0 && self.pending.is_empty() {
            log::debug!(
                "progressive render complete: {}x{} film fully resolved",
                self.width,
                self.height
            );
        }

        TickReport {
            resolved,
            remaining: self.pending.len(),
        }
    }
}
