use reactor_core::constants::{FULL_FLUIDIZATION_VELOCITY, MIN_FLUIDIZATION_VELOCITY};

/// Bed height for a given fluidization velocity.
///
/// Settled below 10 m/h, saturated at 40 m/h, linear in between. Total over
/// all inputs: out-of-range velocities just fall into the nearest plateau.
pub fn bed_height(velocity: f32, min_bed_height: f32, max_bed_height: f32) -> f32 {
    if velocity <= MIN_FLUIDIZATION_VELOCITY {
        return min_bed_height;
    }
    if velocity >= FULL_FLUIDIZATION_VELOCITY {
        return max_bed_height;
    }
    let t = (velocity - MIN_FLUIDIZATION_VELOCITY)
        / (FULL_FLUIDIZATION_VELOCITY - MIN_FLUIDIZATION_VELOCITY);
    min_bed_height + t * (max_bed_height - min_bed_height)
}

/// Motion intensity scalar: 0 for a settled bed, 1 at 40 m/h, and —
/// unlike the bed height — NOT capped above that. Jitter keeps growing
/// past the point where the bed height saturates.
pub fn fluidization_factor(velocity: f32) -> f32 {
    ((velocity - MIN_FLUIDIZATION_VELOCITY)
        / (FULL_FLUIDIZATION_VELOCITY - MIN_FLUIDIZATION_VELOCITY))
        .max(0.0)
}
