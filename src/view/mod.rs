//! Presentation data
//!
//! Produces geometry and text from a snapshot; drawing is left to the caller.

pub mod hud;
pub mod scene;

pub use hud::{crosses_interval, hud_lines, plot_lines, sparkline};
pub use scene::{Scene, Segment};
