//! Headless velocity sweep of the fluidized bed.
//! Runs the engine for a fixed number of ticks at each velocity and prints
//! how far the bed actually spreads, without opening a window.

use reactor_core::ReactorConfig;
use reactor_core::constants::REACTOR_HEIGHT;
use reactor_sim::ReactorState;

fn main() {
    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let velocities = [0.0, 10.0, 15.0, 25.0, 40.0, 60.0, 80.0];

    println!("Fluidized bed sweep: {ticks} ticks per velocity, seed {seed}");
    println!();
    println!(
        "{:>8}  {:>10}  {:>8}  {:>8}  {:>8}  {:>8}",
        "m/h", "bed (px)", "top y", "mean y", "bottom y", "x spread"
    );

    for velocity in velocities {
        let config = ReactorConfig {
            velocity,
            seed,
            ..Default::default()
        };
        let mut reactor = match ReactorState::new(config) {
            Ok(reactor) => reactor,
            Err(e) => {
                eprintln!("Invalid configuration at {velocity} m/h: {e}");
                std::process::exit(1);
            }
        };

        for _ in 0..ticks {
            reactor.tick();
        }

        let particles = reactor.particles();
        let n = particles.len() as f32;
        let top = particles.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let bottom = particles.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let mean = particles.iter().map(|p| p.y).sum::<f32>() / n;
        let x_min = particles.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let x_max = particles.iter().map(|p| p.x).fold(f32::MIN, f32::max);

        println!(
            "{velocity:>8.0}  {:>10.0}  {:>8.1}  {:>8.1}  {:>8.1}  {:>8.1}",
            reactor.bed_height(),
            top,
            mean,
            bottom,
            x_max - x_min,
        );
    }

    println!();
    println!("(y is measured from the vessel top; the floor is at {REACTOR_HEIGHT})");
}
