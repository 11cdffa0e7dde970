//! Read-only view of the cart for one frame

use serde::{Deserialize, Serialize};

/// Observable fields copied out of [`super::SimulationState`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub position: f64,
    pub velocity: f64,
    pub net_force: f64,
    pub left_force: f64,
    pub right_force: f64,
    pub gravity: f64,
    pub friction_coefficient: f64,
    pub angle: f64,
    pub mass: f64,
}

impl Snapshot {
    /// Serialize as a single JSON line
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
