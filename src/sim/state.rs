//! Cart state and environment parameters
//!
//! Everything the integrator reads or writes lives in one record. Setters
//! store their arguments verbatim; only `step` interprets them.

use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use crate::consts::*;
use crate::settings::Settings;

/// Which wall, if any, stopped the cart during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
}

/// Kinematic, force and environment state of the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Displacement along the incline
    pub position: f64,
    /// Signed rate of change of position
    pub velocity: f64,
    /// `right_force - left_force`
    pub net_force: f64,
    pub left_force: f64,
    pub right_force: f64,
    pub mass: f64,
    pub gravity: f64,
    pub friction_coefficient: f64,
    /// Incline angle in degrees
    pub angle: f64,
    /// Fixed integration interval
    pub time_step: f64,
    pub left_wall: f64,
    pub right_wall: f64,
    /// Steps taken since construction or the last reset
    pub tick: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            net_force: 0.0,
            left_force: 0.0,
            right_force: 0.0,
            mass: DEFAULT_MASS,
            gravity: DEFAULT_GRAVITY,
            friction_coefficient: DEFAULT_FRICTION,
            angle: DEFAULT_ANGLE,
            time_step: SIM_DT,
            left_wall: LEFT_WALL,
            right_wall: RIGHT_WALL,
            tick: 0,
        }
    }
}

impl SimulationState {
    /// Create a state at rest with default environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state at rest using the environment, time step and walls from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            mass: settings.mass,
            gravity: settings.gravity,
            friction_coefficient: settings.friction_coefficient,
            angle: settings.angle,
            time_step: settings.time_step,
            left_wall: settings.left_wall,
            right_wall: settings.right_wall,
            ..Self::default()
        }
    }

    /// Set both push forces and recompute the net force
    pub fn set_forces(&mut self, left: f64, right: f64) {
        self.left_force = left;
        self.right_force = right;
        self.net_force = self.right_force - self.left_force;
        log::debug!(
            "Left Force: {}, Right Force: {}, Net Force: {}",
            self.left_force,
            self.right_force,
            self.net_force
        );
    }

    /// Overwrite gravity, friction coefficient and incline angle (degrees)
    pub fn set_environment(&mut self, gravity: f64, friction_coefficient: f64, angle: f64) {
        self.gravity = gravity;
        self.friction_coefficient = friction_coefficient;
        self.angle = angle;
        log::debug!(
            "Gravity: {}, Friction Coefficient: {}, Angle: {}",
            self.gravity,
            self.friction_coefficient,
            self.angle
        );
    }

    /// Overwrite the cart mass. Not validated; see [`Self::effective_mass`].
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        log::debug!("Updated Weight: {}", self.mass);
    }

    /// Zero kinematic and force state. Environment, time step and walls are kept.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.velocity = 0.0;
        self.net_force = 0.0;
        self.left_force = 0.0;
        self.right_force = 0.0;
        self.tick = 0;
        log::debug!("Simulation reset.");
    }

    /// Mass used as the divisor in the force computation.
    ///
    /// Equal to `mass` whenever it is strictly positive, otherwise `MIN_MASS`.
    #[inline]
    pub fn effective_mass(&self) -> f64 {
        if self.mass > 0.0 { self.mass } else { MIN_MASS }
    }

    /// Whether the cart is resting against either wall
    pub fn wall_contact(&self) -> Option<Wall> {
        if self.position <= self.left_wall {
            Some(Wall::Left)
        } else if self.position >= self.right_wall {
            Some(Wall::Right)
        } else {
            None
        }
    }

    /// Immutable copy of the observable fields
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            position: self.position,
            velocity: self.velocity,
            net_force: self.net_force,
            left_force: self.left_force,
            right_force: self.right_force,
            gravity: self.gravity,
            friction_coefficient: self.friction_coefficient,
            angle: self.angle,
            mass: self.mass,
        }
    }
}
