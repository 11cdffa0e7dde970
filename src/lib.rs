//! Incline Cart - a cart on an inclined plane
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integrator, snapshots, plot history, autopilot)
//! - `controls`: Slider decoding from pointer input
//! - `view`: Scene geometry and HUD text for any front end
//! - `runner`: Optional background simulation thread
//! - `settings`: Data-driven environment and loop configuration

pub mod controls;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod view;

pub use controls::{ControlPanel, PointerInput};
pub use runner::{Command, SimulationThread};
pub use settings::{Settings, SettingsError};
pub use sim::{PlotHistory, SimulationState, Snapshot, StepReport};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed integration interval
    pub const SIM_DT: f64 = 0.01;
    /// Target frame rate of the interactive loop
    pub const TICK_RATE_HZ: u32 = 60;

    /// Wall positions along the incline (distance units)
    pub const LEFT_WALL: f64 = 0.0;
    pub const RIGHT_WALL: f64 = 80.0;

    /// Environment defaults
    pub const DEFAULT_MASS: f64 = 1.0;
    pub const DEFAULT_GRAVITY: f64 = 9.81;
    pub const DEFAULT_FRICTION: f64 = 0.1;
    pub const DEFAULT_ANGLE: f64 = 0.0;

    /// Mass substituted in the force computation when the stored mass is not positive
    pub const MIN_MASS: f64 = 1e-6;

    /// Number of samples kept for the position/velocity plot
    pub const PLOT_CAPACITY: usize = 100;
}

/// Sign of a value, with `sign(0) == 0` (NaN stays NaN)
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        // 0.0, -0.0 and NaN all pass through unchanged in magnitude
        value * 0.0
    }
}

/// Point at `distance` along a line tilted `angle_deg` above the horizontal,
/// in screen coordinates (y grows downward)
#[inline]
pub fn along_incline(origin: Vec2, distance: f32, angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    origin + Vec2::new(distance * theta.cos(), -distance * theta.sin())
}
