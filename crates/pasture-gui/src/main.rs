//! Pasture GUI: macroquad entry point.
//!
//! Ticks the simulation at the configured rate, replays the last tick's
//! draw calls every frame, and stops when the run time is up or the player
//! presses Escape or closes the window.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use macroquad::prelude::*;

use pasture_gui::backend::{MacroquadBackend, SpriteSource, check_field, ticks_due, window_field};
use pasture_sim::{Backend, SimConfig, Simulation, Species};

/// Most ticks run in one frame when the window falls behind.
const MAX_CATCH_UP: u64 = 4;

#[derive(Parser)]
#[command(
    name = "pasture-gui",
    about = "Pasture: watch the flock and steer the shepherd with the arrow keys",
    version
)]
struct Args {
    /// Initial number of sheep
    sheep: usize,

    /// Initial number of wolves
    wolves: usize,

    /// Run length in seconds
    seconds: u64,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the media/ paths are resolved against
    #[arg(short, long, default_value = ".")]
    media: PathBuf,

    /// Paint stand-in sprites instead of loading images
    #[arg(long)]
    placeholder: bool,
}

fn window_conf() -> Conf {
    let field = window_field();
    Conf {
        window_title: "Pasture".to_owned(),
        window_width: field.width,
        window_height: field.height,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn setup(args: &Args) -> Result<(Simulation, MacroquadBackend), String> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path).map_err(|e| e.to_string())?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    check_field(config.field).map_err(|e| e.to_string())?;

    let source = if args.placeholder {
        SpriteSource::Placeholder {
            config: Box::new(config.clone()),
        }
    } else {
        SpriteSource::Files {
            root: args.media.clone(),
        }
    };
    let mut backend = MacroquadBackend::new(source);
    let mut sim = Simulation::new(config, &mut backend).map_err(|e| e.to_string())?;
    sim.populate(args.sheep, args.wolves);
    Ok((sim, backend))
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let (mut sim, mut backend) = match setup(&args) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    prevent_quit();
    let duration = Duration::from_secs(args.seconds);
    let tick = sim.clock().tick_duration();
    backend.reset_clock();

    loop {
        if backend.quit_requested() || backend.elapsed() >= duration {
            break;
        }

        let due = ticks_due(backend.elapsed(), tick);
        let mut ran = 0;
        while sim.current_tick() < due && ran < MAX_CATCH_UP {
            backend.begin_tick();
            sim.tick(&mut backend);
            ran += 1;
        }

        backend.present();
        next_frame().await;
    }

    tracing::info!(
        ticks = sim.current_tick(),
        sheep = sim.world().count(Species::Sheep),
        wolves = sim.world().count(Species::Wolf),
        "window closed"
    );
}
