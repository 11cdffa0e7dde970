//! Setter calls as values, for forwarding across threads

use serde::{Deserialize, Serialize};

use super::state::SimulationState;

/// A setter call on [`SimulationState`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    SetForces { left: f64, right: f64 },
    SetEnvironment { gravity: f64, friction: f64, angle: f64 },
    SetMass(f64),
    Reset,
}

impl Command {
    pub fn apply(&self, state: &mut SimulationState) {
        match *self {
            Command::SetForces { left, right } => state.set_forces(left, right),
            Command::SetEnvironment {
                gravity,
                friction,
                angle,
            } => state.set_environment(gravity, friction, angle),
            Command::SetMass(mass) => state.set_mass(mass),
            Command::Reset => state.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_apply() {
        let mut state = SimulationState::new();
        Command::SetForces { left: 1.0, right: 4.0 }.apply(&mut state);
        Command::SetMass(2.0).apply(&mut state);
        Command::SetEnvironment {
            gravity: 1.0,
            friction: 0.0,
            angle: 5.0,
        }
        .apply(&mut state);
        assert_eq!(state.net_force, 3.0);
        assert_eq!(state.mass, 2.0);
        assert_eq!(state.angle, 5.0);

        Command::Reset.apply(&mut state);
        assert_eq!(state.net_force, 0.0);
        assert_eq!(state.mass, 2.0);
    }
}
