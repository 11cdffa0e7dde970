//! Deterministic simulation module
//!
//! The cart model lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (autopilot)
//! - No rendering, threading or platform dependencies

pub mod autopilot;
pub mod command;
pub mod history;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use command::Command;
pub use history::PlotHistory;
pub use snapshot::Snapshot;
pub use state::{SimulationState, Wall};
pub use tick::{StepReport, tick};
