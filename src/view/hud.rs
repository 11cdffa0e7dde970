//! HUD text and a character-cell plot of the history buffer

use crate::controls::{Control, ControlPanel};
use crate::sim::{PlotHistory, Snapshot};

/// Label/value lines shown on screen each frame.
///
/// Slider-bound quantities show the slider value; derived quantities come
/// from the snapshot.
pub fn hud_lines(snap: &Snapshot, panel: &ControlPanel) -> Vec<String> {
    let mut lines = Vec::with_capacity(9);
    lines.push(format!("{}: {:.2}", Control::LeftForce.label(), panel.value(Control::LeftForce)));
    lines.push(format!("{}: {:.2}", Control::RightForce.label(), panel.value(Control::RightForce)));
    lines.push(format!("Net Force: {:.2}", snap.net_force));
    lines.push(format!("Velocity: {:.2}", snap.velocity));
    lines.push(format!("Position: {:.2}", snap.position));
    for control in [Control::Gravity, Control::Friction, Control::Angle, Control::Weight] {
        lines.push(format!("{}: {:.2}", control.label(), panel.value(control)));
    }
    lines
}

/// Whether a multiple of `every` lies in `(prev_tick, tick]`.
///
/// A sampling consumer can skip ticks, so testing `tick % every` alone misses frames.
pub fn crosses_interval(prev_tick: u64, tick: u64, every: u64) -> bool {
    every > 0 && tick / every > prev_tick / every
}

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One row of block characters per series, scaled to a shared y-range
pub fn sparkline(series: impl IntoIterator<Item = f64>, range: (f64, f64)) -> String {
    let (lo, hi) = range;
    let span = hi - lo;
    series
        .into_iter()
        .map(|v| {
            let t = if span > 0.0 { ((v - lo) / span).clamp(0.0, 1.0) } else { 0.0 };
            LEVELS[(t * (LEVELS.len() - 1) as f64).round() as usize]
        })
        .collect()
}

/// Position and velocity rows plus the axis range, or nothing when empty
pub fn plot_lines(history: &PlotHistory) -> Vec<String> {
    let Some(range) = history.y_range() else {
        return Vec::new();
    };
    vec![
        format!("Position {}", sparkline(history.positions().iter().copied(), range)),
        format!("Velocity {}", sparkline(history.velocities().iter().copied(), range)),
        format!("y: [{:.2}, {:.2}]", range.0, range.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulationState;

    #[test]
    fn test_hud_labels() {
        let mut state = SimulationState::new();
        state.set_forces(0.0, 50.0);
        state.step();
        let lines = hud_lines(&state.snapshot(), &ControlPanel::new());

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Left Force: 0.00");
        assert_eq!(lines[2], "Net Force: 50.00");
        assert_eq!(lines[3], "Velocity: 0.50");
        assert_eq!(lines[4], "Position: 0.01");
        assert_eq!(lines[5], "Gravity: 9.81");
        assert_eq!(lines[8], "Weight: 1.00");
    }

    #[test]
    fn test_sparkline_levels() {
        let line = sparkline([0.0, 5.0, 10.0], (0.0, 10.0));
        assert_eq!(line.chars().count(), 3);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
    }

    #[test]
    fn test_plot_lines() {
        let mut history = PlotHistory::new(10);
        assert!(plot_lines(&history).is_empty());

        history.record(1.0, 0.5);
        history.record(2.0, 0.5);
        let lines = plot_lines(&history);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "y: [0.50, 2.00]");
    }

    #[test]
    fn test_hud_shows_seeded_forces() {
        let mut state = SimulationState::new();
        state.set_forces(0.0, 50.0);
        let lines = hud_lines(&state.snapshot(), &ControlPanel::from_state(&state));
        assert_eq!(lines[1], "Right Force: 50.00");
        assert_eq!(lines[2], "Net Force: 50.00");
    }

    #[test]
    fn test_crosses_interval() {
        assert!(crosses_interval(59, 60, 60));
        assert!(!crosses_interval(60, 61, 60));
        // Sampled ticks that jump over the boundary
        assert!(crosses_interval(58, 63, 60));
        assert!(crosses_interval(100, 250, 60));
        assert!(!crosses_interval(61, 119, 60));
        assert!(!crosses_interval(0, 600, 0));
        // After a reset the counter restarts below the previous sample
        assert!(!crosses_interval(500, 3, 60));
    }
}
