//! Headless driver for the gravity sandbox
//!
//! Plays a scripted session against the simulation core without a window:
//! jittery frame times, one press-drag-release spawn gesture, and periodic
//! energy and momentum logging.
//!
//! Usage: `gravity_sandbox [--config config.toml] [--frames N] [--log-interval N]`
//! Set `RUST_LOG=info` (or `debug`) to see the output.

use clap::Parser;
use gravity_sandbox::{Scalar, Simulation, SimulationConfig, SpawnParams, Vector};
use rand::Rng;
use std::path::PathBuf;

const TARGET_FRAME_TIME: Scalar = 1.0 / 60.0;

const SCREEN_CENTER: Vector = Vector::new(960.0, 540.0);

const PRESS_FRAME: u32 = 300;
const RELEASE_FRAME: u32 = 360;

/// Headless fixed-step gravity sandbox
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of host frames to play
    #[arg(short, long, default_value_t = 1200)]
    frames: u32,

    /// Log diagnostics every N frames
    #[arg(short, long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..))]
    log_interval: u32,
}

struct App {
    simulation: Simulation,
    press_position: Vector,
    paused: bool,
}

impl App {
    fn new(config: SimulationConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut simulation = Simulation::new(config)?;
        simulation.init_default_system(SCREEN_CENTER)?;

        Ok(Self {
            simulation,
            press_position: SCREEN_CENTER + Vector::new(0.0, -700.0),
            paused: false,
        })
    }

    fn update(&mut self, frame: u32, dt: Scalar, rng: &mut impl Rng) {
        self.drive_spawn_gesture(frame, rng);

        // A paused host reports zero elapsed time
        let dt = if self.paused { 0.0 } else { dt };
        self.simulation.advance(dt);
    }

    /// Drag rightwards for one second, then let go
    fn drive_spawn_gesture(&mut self, frame: u32, rng: &mut impl Rng) {
        match frame {
            PRESS_FRAME => {
                let params = SpawnParams::random(rng);
                if let Err(e) = self.simulation.on_press_start(self.press_position, params) {
                    log::warn!("Spawn gesture rejected: {}", e);
                }
            }
            f if f > PRESS_FRAME && f < RELEASE_FRAME => {
                let progress = (f - PRESS_FRAME) as Scalar / (RELEASE_FRAME - PRESS_FRAME) as Scalar;
                self.simulation
                    .on_drag(self.press_position + Vector::new(250.0 * progress, 0.0));
            }
            RELEASE_FRAME => {
                if let Some(path) = self.simulation.preview() {
                    if let Some(end) = path.last() {
                        log::info!("Preview of {} points ends at {}", path.len(), end);
                    }
                }
                match self.simulation.on_release(self.press_position + Vector::new(250.0, 0.0)) {
                    Ok(Some(id)) => log::info!("Spawned body {}", id.index()),
                    Ok(None) => {}
                    Err(e) => log::warn!("Spawn failed: {}", e),
                }
            }
            _ => {}
        }
    }

    fn report(&self, frame: u32) {
        let energy = self.simulation.energy();
        log::info!(
            "frame {:>5} | t = {:>7.3}s | bodies {} | E = {:.6e} (K {:.6e}, U {:.6e}) | p = {}",
            frame,
            self.simulation.simulated_time(),
            self.simulation.bodies().len(),
            energy.total(),
            energy.kinetic,
            energy.potential,
            self.simulation.total_momentum(),
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config {
        Some(path) => SimulationConfig::load_or_default(path),
        None => SimulationConfig::default(),
    };
    log::info!(
        "Integrator: {}, fixed dt = {:.6}s",
        config.physics.integrator.name(),
        config.physics.fixed_dt
    );

    let mut app = App::new(config)?;
    let mut rng = rand::thread_rng();
    let initial = app.simulation.energy().total();

    for frame in 0..args.frames {
        // Pause for a short stretch to exercise zero-length frames
        app.paused = (900..960).contains(&frame);

        let jitter: Scalar = rng.gen_range(-0.25..0.25);
        app.update(frame, TARGET_FRAME_TIME * (1.0 + jitter), &mut rng);

        if frame % args.log_interval == 0 {
            app.report(frame);
        }
    }

    app.report(args.frames);
    log::info!(
        "{} steps taken, {:.3}s dropped by the step cap, energy {:.6e} -> {:.6e}",
        app.simulation.steps_taken(),
        app.simulation.dropped_time(),
        initial,
        app.simulation.energy().total()
    );

    Ok(())
}
