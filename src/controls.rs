//! Slider controls
//!
//! Maps pointer positions over six horizontal sliders to force, environment
//! and mass values, and forwards them to the simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Command, SimulationState};

/// Pointer state for one polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
    /// Primary button held
    pub pressed: bool,
    /// Reset key held
    pub reset: bool,
}

impl PointerInput {
    /// Pointer pressed at a screen position
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            pressed: true,
            reset: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Which quantity a slider drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    LeftForce,
    RightForce,
    Gravity,
    Friction,
    Angle,
    Weight,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::LeftForce,
        Control::RightForce,
        Control::Gravity,
        Control::Friction,
        Control::Angle,
        Control::Weight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Control::LeftForce => "Left Force",
            Control::RightForce => "Right Force",
            Control::Gravity => "Gravity",
            Control::Friction => "Friction",
            Control::Angle => "Angle",
            Control::Weight => "Weight",
        }
    }
}

/// Axis-aligned screen rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Left/top edges inclusive, right/bottom exclusive
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.size.x
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.size.y
    }
}

/// A horizontal slider mapping `[rect.x, rect.x + width)` onto `[0, max)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    pub control: Control,
    pub rect: Rect,
    pub max: f64,
    pub value: f64,
}

impl Slider {
    pub fn new(control: Control, rect: Rect, max: f64, value: f64) -> Self {
        Self {
            control,
            rect,
            max,
            value,
        }
    }

    /// Value for a pointer x-coordinate
    pub fn value_at(&self, x: f32) -> f64 {
        (x - self.rect.origin.x) as f64 / self.rect.size.x as f64 * self.max
    }

    /// Filled fraction of the track, for drawing
    pub fn fill(&self) -> f64 {
        self.value / self.max
    }
}

/// The full set of sliders and their current values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPanel {
    sliders: Vec<Slider>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    /// Standard layout with the default environment values
    pub fn new() -> Self {
        Self::with_values(DEFAULT_GRAVITY, DEFAULT_FRICTION, DEFAULT_ANGLE, DEFAULT_MASS)
    }

    /// Standard layout with environment sliders pre-set (e.g. from settings)
    pub fn with_values(gravity: f64, friction: f64, angle: f64, mass: f64) -> Self {
        Self {
            sliders: vec![
                Slider::new(Control::LeftForce, Rect::new(50.0, 50.0, 200.0, 20.0), 100.0, 0.0),
                Slider::new(Control::RightForce, Rect::new(950.0, 50.0, 200.0, 20.0), 100.0, 0.0),
                Slider::new(Control::Gravity, Rect::new(50.0, 300.0, 200.0, 20.0), 20.0, gravity),
                Slider::new(Control::Friction, Rect::new(50.0, 350.0, 200.0, 20.0), 1.0, friction),
                Slider::new(Control::Angle, Rect::new(50.0, 400.0, 200.0, 20.0), 90.0, angle),
                Slider::new(Control::Weight, Rect::new(50.0, 450.0, 200.0, 20.0), 50.0, mass),
            ],
        }
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, control: Control) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.control == control)
    }

    /// Current value of a control
    pub fn value(&self, control: Control) -> f64 {
        self.slider(control).map(|s| s.value).unwrap_or(0.0)
    }

    /// Slider under a screen position, if any
    pub fn hit(&self, p: Vec2) -> Option<Control> {
        self.sliders.iter().find(|s| s.rect.contains(p)).map(|s| s.control)
    }

    /// Panel mirroring every slider-backed field of `state`, forces included
    pub fn from_state(state: &SimulationState) -> Self {
        let mut panel = Self::with_values(state.gravity, state.friction_coefficient, state.angle, state.mass);
        panel.set_value(Control::LeftForce, state.left_force);
        panel.set_value(Control::RightForce, state.right_force);
        panel
    }

    /// Move a slider without going through the pointer
    pub fn set_value(&mut self, control: Control, value: f64) {
        if let Some(slider) = self.sliders.iter_mut().find(|s| s.control == control) {
            slider.value = value;
        }
    }

    /// Update the slider under a pressed pointer.
    ///
    /// Returns the control that changed, if any. The reset key is not handled here.
    pub fn decode(&mut self, input: &PointerInput) -> Option<Control> {
        if !input.pressed {
            return None;
        }
        let slider = self.sliders.iter_mut().find(|s| s.rect.contains(input.pos()))?;
        slider.value = slider.value_at(input.x);
        Some(slider.control)
    }

    /// Setter call carrying the panel's current values for `control`
    pub fn command_for(&self, control: Control) -> Command {
        match control {
            Control::LeftForce | Control::RightForce => Command::SetForces {
                left: self.value(Control::LeftForce),
                right: self.value(Control::RightForce),
            },
            Control::Gravity | Control::Friction | Control::Angle => Command::SetEnvironment {
                gravity: self.value(Control::Gravity),
                friction: self.value(Control::Friction),
                angle: self.value(Control::Angle),
            },
            Control::Weight => Command::SetMass(self.value(Control::Weight)),
        }
    }

    /// Decode one polling cycle of pointer input and forward it to the state.
    ///
    /// Returns the control that changed, if any.
    pub fn apply(&mut self, input: &PointerInput, state: &mut SimulationState) -> Option<Control> {
        let changed = self.decode(input);
        if let Some(control) = changed {
            self.command_for(control).apply(state);
        }
        if input.reset {
            state.reset();
        }
        changed
    }
}
