use rand::Rng;
use reactor_core::constants::{MOVEMENT_SCALE, WALL_X_MAX};
use reactor_core::{Particle, ReactorConfig};

use crate::bed::fluidization_factor;

/// Advance every particle by one tick, in place.
///
/// Each particle moves independently: a random vertical kick biased toward
/// its equilibrium height (large particles settle low, small ones ride
/// high), plus pure lateral jitter. Smaller particles are more mobile —
/// the per-tick displacement budget scales with `min_size / size`. Both
/// axes are then clamped to the current bed envelope.
///
/// Below the fluidization threshold the factor is 0 and the pass returns
/// immediately, so a settled bed is exactly a no-op.
pub fn step(
    particles: &mut [Particle],
    config: &ReactorConfig,
    bed_height: f32,
    reactor_height: f32,
    rng: &mut impl Rng,
) {
    let factor = fluidization_factor(config.velocity);
    if factor <= 0.0 {
        return;
    }

    let size_range = config.max_particle_size - config.min_particle_size;
    let bed_top = reactor_height - bed_height;

    for p in particles.iter_mut() {
        let distribution = distribution_score(p, config, size_range, bed_top, bed_height);
        let max_movement = MOVEMENT_SCALE * factor * (config.min_particle_size / p.size);

        let u: f32 = rng.gen_range(0.0..1.0);
        let vertical = factor * (u - 0.5 + (0.5 - distribution)) * 2.0 * max_movement;
        let u2: f32 = rng.gen_range(0.0..1.0);
        let horizontal = factor * (u2 - 0.5) * max_movement;

        // Upper bound first, then lower: the floor wins if they ever cross
        // (a particle larger than the bed envelope).
        p.y = (p.y - vertical)
            .min(reactor_height - p.size / 2.0)
            .max(bed_top + p.size / 2.0);
        p.x = (p.x + horizontal)
            .min(WALL_X_MAX - p.size / 2.0)
            .max(p.size / 2.0);
    }
}

/// How far a particle sits from its size-implied equilibrium height.
///
/// 0 means the particle is exactly where the stratification model wants it;
/// larger scores produce a stronger restoring component in the vertical kick.
fn distribution_score(
    p: &Particle,
    config: &ReactorConfig,
    size_range: f32,
    bed_top: f32,
    bed_height: f32,
) -> f32 {
    let normalized_size = if size_range > f32::EPSILON {
        (p.size - config.min_particle_size) / size_range
    } else {
        // Uniform sizes carry no stratification signal
        0.5
    };
    let normalized_position = (p.y - bed_top) / bed_height;
    (normalized_position - (1.0 - normalized_size)).abs()
}
