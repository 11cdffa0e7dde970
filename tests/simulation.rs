use std::thread;
use std::time::{Duration, Instant};

use incline_cart::controls::{ControlPanel, PointerInput};
use incline_cart::sim::{Autopilot, PlotHistory, SimulationState, Wall, tick};
use incline_cart::view::{Scene, hud_lines, plot_lines};
use incline_cart::{Settings, SimulationThread};

/// Flat, frictionless track with a unit mass
fn scenario_state() -> SimulationState {
    let mut state = SimulationState::new();
    state.set_environment(9.81, 0.0, 0.0);
    state.set_mass(1.0);
    state
}

#[test]
fn push_right_reaches_wall_and_stays() {
    let mut state = scenario_state();
    state.set_forces(0.0, 50.0);

    state.step();
    assert!((state.velocity - 0.5).abs() < 1e-12);
    assert!((state.position - 0.005).abs() < 1e-12);

    let mut hit_at = None;
    for _ in 0..1000 {
        let report = state.step();
        if report.wall == Some(Wall::Right) {
            hit_at = Some(state.tick);
            break;
        }
    }
    let hit_at = hit_at.expect("cart never reached the right wall");
    // x = a t^2 / 2 with a = 50 reaches 80 after roughly 1.8 time units
    assert!((170..=190).contains(&hit_at), "hit wall at tick {}", hit_at);
    assert_eq!(state.position, 80.0);
    assert_eq!(state.velocity, 0.0);

    for _ in 0..100 {
        state.step();
        assert_eq!(state.position, 80.0);
        assert_eq!(state.velocity, 0.0);
    }
}

#[test]
fn interactive_loop_with_autopilot_is_reproducible() {
    let run = |seed: u64| {
        let mut state = SimulationState::new();
        let mut panel = ControlPanel::new();
        let mut history = PlotHistory::default();
        let mut pilot = Autopilot::with_interval(seed, 10);
        for _ in 0..600 {
            let input = pilot.next_input(&panel);
            tick(&mut state, &mut panel, &input, &mut history);
            assert!(state.position >= 0.0 && state.position <= 80.0);
        }
        (state, history)
    };

    let (a, history_a) = run(99);
    let (b, history_b) = run(99);
    assert_eq!(a, b);
    assert_eq!(history_a.positions(), history_b.positions());
    assert_eq!(history_a.len(), 100);
    assert_eq!(plot_lines(&history_a).len(), 3);
}

#[test]
fn settings_drive_state_and_panel() {
    let settings = Settings::from_json(r#"{ "gravity": 3.0, "friction_coefficient": 0.0, "angle": 30, "right_wall": 50 }"#)
        .unwrap();
    let mut state = SimulationState::from_settings(&settings);
    let mut panel = ControlPanel::with_values(state.gravity, state.friction_coefficient, state.angle, state.mass);
    let mut history = PlotHistory::new(settings.plot_capacity);

    // Push up the slope with the right slider at 50
    tick(&mut state, &mut panel, &PointerInput::press(1050.0, 60.0), &mut history);
    for _ in 0..2000 {
        tick(&mut state, &mut panel, &PointerInput::default(), &mut history);
    }
    assert_eq!(state.position, 50.0);

    let lines = hud_lines(&state.snapshot(), &panel);
    assert!(lines.contains(&"Right Force: 50.00".to_string()));
    assert!(lines.contains(&"Angle: 30.00".to_string()));

    let scene = Scene::layout(&state.snapshot());
    assert!(scene.cart_center().y < 500.0);
}

#[test]
fn threaded_runner_reports_latest_snapshot() {
    let runner = SimulationThread::spawn(scenario_state(), 0, 4).unwrap();
    runner.set_forces(0.0, 50.0).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut at_wall = false;
    while Instant::now() < deadline {
        if let Some(snap) = runner.latest() {
            if snap.position == 80.0 {
                assert_eq!(snap.velocity, 0.0);
                at_wall = true;
                break;
            }
        }
        thread::sleep(Duration::from_millis(1));
    }
    assert!(at_wall, "runner never reached the wall");

    runner.reset().unwrap();
    let state = runner.join().unwrap();
    assert!(state.position <= 80.0);
    assert_eq!(state.gravity, 9.81);
}

#[test]
fn panel_commands_drive_threaded_runner() {
    let state = scenario_state();
    let mut panel = ControlPanel::from_state(&state);
    let runner = SimulationThread::spawn(state, 0, 4).unwrap();

    // Right force slider to 50, forwarded the way the threaded CLI does
    let control = panel.decode(&PointerInput::press(1050.0, 60.0)).unwrap();
    runner.send(panel.command_for(control)).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = None;
    while Instant::now() < deadline {
        if let Some(snap) = runner.latest().filter(|s| s.right_force == 50.0) {
            seen = Some(snap);
            break;
        }
        thread::sleep(Duration::from_millis(1));
    }
    let snap = seen.expect("slider change never reached the runner");
    assert_eq!(snap.net_force, 50.0);

    let lines = hud_lines(&snap, &panel);
    assert!(lines.contains(&"Right Force: 50.00".to_string()));
    assert!(lines.contains(&"Net Force: 50.00".to_string()));
    assert!(runner.is_running());
    runner.join().unwrap();
}
