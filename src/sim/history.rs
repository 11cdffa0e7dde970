//! Rolling position/velocity history for the live plot

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::PLOT_CAPACITY;

/// Padding applied to each side of a degenerate (flat) y-range
pub const FLAT_RANGE_PADDING: f64 = 0.1;

/// Fixed-capacity FIFO of the most recent samples (oldest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotHistory {
    capacity: usize,
    positions: VecDeque<f64>,
    velocities: VecDeque<f64>,
}

impl Default for PlotHistory {
    fn default() -> Self {
        Self::new(PLOT_CAPACITY)
    }
}

impl PlotHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            positions: VecDeque::with_capacity(capacity + 1),
            velocities: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Append a sample, evicting the oldest once over capacity
    pub fn record(&mut self, position: f64, velocity: f64) {
        self.positions.push_back(position);
        self.velocities.push_back(velocity);
        if self.positions.len() > self.capacity {
            self.positions.pop_front();
        }
        if self.velocities.len() > self.capacity {
            self.velocities.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.velocities.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &VecDeque<f64> {
        &self.positions
    }

    pub fn velocities(&self) -> &VecDeque<f64> {
        &self.velocities
    }

    /// Shared y-axis range across both series.
    ///
    /// A flat range is widened so the plot never collapses to a line.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut samples = self.positions.iter().chain(self.velocities.iter()).copied();
        let first = samples.next()?;
        let (mut min_y, mut max_y) = samples.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min_y == max_y {
            min_y -= FLAT_RANGE_PADDING;
            max_y += FLAT_RANGE_PADDING;
        }
        Some((min_y, max_y))
    }
}
