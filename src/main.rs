//! Headless demo harness
//!
//! Stands in for the real host runtime: owns a pixel buffer on the heap,
//! feeds a scripted input sequence at a fixed timestep, and logs world
//! statistics. Useful for smoke-testing balance changes:
//!
//! ```sh
//! RUST_LOG=debug TOROIDS_TUNING=balance.json cargo run
//! ```

use toroids::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use toroids::render::Frame;
use toroids::{TickInput, Tuning, World};

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

fn load_tuning() -> Tuning {
    let Ok(path) = std::env::var("TOROIDS_TUNING") else {
        return Tuning::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("cannot read tuning file {path}: {err}");
            std::process::exit(1);
        }
    };
    match Tuning::from_json(&text) {
        Ok(tuning) => {
            log::info!("tuning overrides loaded from {path}");
            tuning
        }
        Err(err) => {
            log::error!("bad tuning file {path}: {err}");
            std::process::exit(1);
        }
    }
}

/// Canned pilot: bursts of thrust, a periodic sweep left, constant fire
fn scripted_input(frame_index: u32) -> TickInput {
    TickInput {
        left: frame_index % 120 < 30,
        right: false,
        thrust: frame_index % 60 < 45,
        fire: frame_index % 15 == 0,
        quit: false,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::var("TOROIDS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xA57E_F01D);
    let mut world = World::with_tuning(seed, load_tuning());
    world.initialize();
    log::info!("world initialized, seed {seed}");

    let mut pixels = vec![0u32; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize];
    for frame_index in 0..FRAMES {
        world.act(&scripted_input(frame_index), DT);
        let mut frame = Frame::new(&mut pixels);
        world.draw(&mut frame);
        if world.quit_requested() {
            break;
        }
    }

    let lit = pixels.iter().filter(|&&p| p != 0).count();
    log::info!(
        "{} ticks simulated: {} live objects, ship health {:.1}, {} lit pixels",
        world.ticks(),
        world.objects().len(),
        world.ship().health(),
        lit
    );
    world.finalize();
    println!("toroids demo complete");
}
