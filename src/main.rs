//! Incline Cart entry point
//!
//! Headless driver: runs the interactive loop against scripted or autopilot
//! input and prints the HUD, or one JSON snapshot per tick.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use incline_cart::controls::{ControlPanel, PointerInput};
use incline_cart::sim::{Autopilot, PlotHistory, SimulationState, Snapshot, tick};
use incline_cart::view::{crosses_interval, hud_lines, plot_lines};
use incline_cart::{Settings, SimulationThread};

#[derive(Parser, Debug)]
#[command(name = "incline-cart", version, about = "Cart on an inclined plane, driven from the command line")]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings to this file and continue
    #[arg(long)]
    save_settings: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Left push force
    #[arg(long, default_value_t = 0.0)]
    left: f64,

    /// Right push force
    #[arg(long, default_value_t = 0.0)]
    right: f64,

    /// Override gravity
    #[arg(long)]
    gravity: Option<f64>,

    /// Override friction coefficient
    #[arg(long)]
    friction: Option<f64>,

    /// Override incline angle (degrees)
    #[arg(long)]
    angle: Option<f64>,

    /// Override cart mass
    #[arg(long)]
    mass: Option<f64>,

    /// Let the autopilot drag the sliders (forwarded as commands when threaded)
    #[arg(long)]
    demo: bool,

    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Step on a background thread and sample the latest snapshot each frame
    #[arg(long)]
    threaded: bool,

    /// Sleep between frames to hold the configured tick rate
    #[arg(long)]
    realtime: bool,

    /// Print one JSON snapshot per tick instead of the HUD
    #[arg(long)]
    json: bool,

    /// Print the HUD whenever the tick count passes a multiple of N
    #[arg(long, default_value_t = 60)]
    every: u64,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn effective_settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path).with_context(|| format!("loading {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(gravity) = self.gravity {
            settings.gravity = gravity;
        }
        if let Some(friction) = self.friction {
            settings.friction_coefficient = friction;
        }
        if let Some(angle) = self.angle {
            settings.angle = angle;
        }
        if let Some(mass) = self.mass {
            settings.mass = mass;
        }
        settings.validate().context("invalid settings")?;
        Ok(settings)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Print the JSON line, or the HUD when a multiple of `every` falls in `(prev_tick, snap.tick]`
fn print_frame(args: &Args, prev_tick: u64, snap: &Snapshot, panel: &ControlPanel) -> Result<()> {
    if args.json {
        println!("{}", snap.to_json_line().context("serializing snapshot")?);
    } else if crosses_interval(prev_tick, snap.tick, args.every) {
        println!("-- tick {} --", snap.tick);
        for line in hud_lines(snap, panel) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Single-threaded loop: input, step, record, draw
fn run_inline(args: &Args, settings: &Settings) -> Result<PlotHistory> {
    let mut state = SimulationState::from_settings(settings);
    state.set_forces(args.left, args.right);
    let mut panel = ControlPanel::from_state(&state);
    let mut history = PlotHistory::new(settings.plot_capacity);
    let mut autopilot = args.demo.then(|| Autopilot::new(args.seed));
    let frame = Duration::from_secs_f64(1.0 / settings.tick_rate_hz as f64);

    for _ in 0..args.ticks {
        let started = Instant::now();
        let prev_tick = state.tick;
        let input = match autopilot.as_mut() {
            Some(pilot) => pilot.next_input(&panel),
            None => PointerInput::default(),
        };
        tick(&mut state, &mut panel, &input, &mut history);
        print_frame(args, prev_tick, &state.snapshot(), &panel)?;

        if args.realtime {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
    Ok(history)
}

/// Threaded loop: the runner steps, this thread decodes input and samples at the frame rate
fn run_threaded(args: &Args, settings: &Settings) -> Result<PlotHistory> {
    let mut state = SimulationState::from_settings(settings);
    state.set_forces(args.left, args.right);
    let mut panel = ControlPanel::from_state(&state);
    let mut history = PlotHistory::new(settings.plot_capacity);
    let mut autopilot = args.demo.then(|| Autopilot::new(args.seed));
    let frame = Duration::from_secs_f64(1.0 / settings.tick_rate_hz as f64);

    let runner = SimulationThread::spawn(state, settings.tick_rate_hz, settings.queue_capacity)
        .context("starting simulation thread")?;

    let mut last_tick = 0;
    while last_tick < args.ticks {
        if !runner.is_running() {
            anyhow::bail!("simulation thread exited at tick {}", last_tick);
        }

        if let Some(pilot) = autopilot.as_mut() {
            let input = pilot.next_input(&panel);
            if let Some(control) = panel.decode(&input) {
                runner.send(panel.command_for(control)).context("forwarding slider change")?;
            }
            if input.reset {
                runner.reset().context("forwarding reset")?;
            }
        }

        if let Some(snap) = runner.latest() {
            history.record(snap.position, snap.velocity);
            print_frame(args, last_tick, &snap, &panel)?;
            last_tick = snap.tick;
        }
        thread::sleep(frame);
    }

    let state = runner.join().context("stopping simulation thread")?;
    log::info!("Runner finished at tick {}", state.tick);
    Ok(history)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = args.effective_settings()?;
    if let Some(path) = &args.save_settings {
        settings.save(path).with_context(|| format!("saving {}", path.display()))?;
    }

    log::info!(
        "Incline Cart starting: {} ticks, dt={}, walls=[{}, {}]",
        args.ticks,
        settings.time_step,
        settings.left_wall,
        settings.right_wall
    );

    let history = if args.threaded {
        run_threaded(&args, &settings)?
    } else {
        run_inline(&args, &settings)?
    };

    if !args.json {
        for line in plot_lines(&history) {
            println!("{}", line);
        }
    }
    Ok(())
}
