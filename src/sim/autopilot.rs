//! Demo mode - seeded input that drags the sliders on its own
//!
//! Same seed, same sequence of pointer inputs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::controls::{ControlPanel, PointerInput};

/// Default number of ticks between slider moves (one second at 60 Hz)
pub const DEFAULT_INTERVAL: u32 = 60;

/// Deterministic input generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    interval: u32,
    counter: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self::with_interval(seed, DEFAULT_INTERVAL)
    }

    pub fn with_interval(seed: u64, interval: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            interval: interval.max(1),
            counter: 0,
        }
    }

    /// Input for the next tick: a press inside a random slider every
    /// `interval` ticks, otherwise an idle pointer
    pub fn next_input(&mut self, panel: &ControlPanel) -> PointerInput {
        self.counter += 1;
        if self.counter < self.interval {
            return PointerInput::default();
        }
        self.counter = 0;

        let sliders = panel.sliders();
        if sliders.is_empty() {
            return PointerInput::default();
        }
        let slider = &sliders[self.rng.random_range(0..sliders.len())];
        let rect = slider.rect;
        // Whole pixels, like a real pointer
        let x = rect.origin.x + self.rng.random_range(0..rect.size.x as u32) as f32;
        let y = rect.origin.y + rect.size.y * 0.5;

        log::debug!("Autopilot moving {} slider to x={:.1}", slider.control.label(), x);
        PointerInput::press(x, y)
    }
}
