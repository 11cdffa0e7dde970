//! Fixed timestep integration
//!
//! One semi-implicit Euler step on the incline followed by the wall clamp.

use serde::{Deserialize, Serialize};

use super::history::PlotHistory;
use super::state::{SimulationState, Wall};
use crate::controls::{ControlPanel, PointerInput};
use crate::sign;

/// What happened during a single step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Acceleration applied this tick
    pub acceleration: f64,
    /// Wall the cart was clamped against, if any
    pub wall: Option<Wall>,
}

impl SimulationState {
    /// Acceleration along the incline for the current state.
    ///
    /// Kinetic friction opposes the current velocity; at `velocity == 0` it
    /// contributes nothing. The along-slope gravity component always points
    /// down the slope.
    pub fn acceleration(&self) -> f64 {
        let theta = self.angle.to_radians();
        let mass = self.effective_mass();
        let normal_force = mass * self.gravity * theta.cos();
        let friction_force = self.friction_coefficient * normal_force;
        let applied_force = self.net_force - friction_force * sign(self.velocity);
        applied_force / mass - self.gravity * theta.sin()
    }

    /// Advance the cart by one fixed time step
    pub fn step(&mut self) -> StepReport {
        let acceleration = self.acceleration();
        self.velocity += acceleration * self.time_step;
        // Position uses the updated velocity
        self.position += self.velocity * self.time_step;
        self.tick += 1;

        log::trace!(
            "Before collision check: Position={}, Velocity={}, Acceleration={}",
            self.position,
            self.velocity,
            acceleration
        );

        let wall = if self.position <= self.left_wall {
            self.position = self.left_wall;
            self.velocity = 0.0;
            Some(Wall::Left)
        } else if self.position >= self.right_wall {
            self.position = self.right_wall;
            self.velocity = 0.0;
            Some(Wall::Right)
        } else {
            None
        };

        log::trace!(
            "After collision check: Position={}, Velocity={}",
            self.position,
            self.velocity
        );

        StepReport { acceleration, wall }
    }
}

/// One frame of the interactive loop: apply input, step once, record a plot sample
pub fn tick(
    state: &mut SimulationState,
    panel: &mut ControlPanel,
    input: &PointerInput,
    history: &mut PlotHistory,
) -> StepReport {
    panel.apply(input, state);
    let report = state.step();
    history.record(state.position, state.velocity);
    report
}
