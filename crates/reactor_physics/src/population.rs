use rand::Rng;
use reactor_core::constants::{SEED_BAND_NUMERATOR, SPAWN_X_MAX, SPAWN_X_MIN};
use reactor_core::{Particle, ReactorConfig};

/// Generate a fresh particle population.
///
/// Sizes are assigned deterministically by index: index 0 gets the maximum
/// size and the last index the minimum, with the exponent skewing how fast
/// sizes fall off in between. Positions seed the whole bed into a thin band
/// at the vessel floor — the band is `3 / bed_height` pixels tall, so taller
/// beds seed tighter — and the motion updater spreads it upward over the
/// following ticks.
pub fn generate(
    config: &ReactorConfig,
    bed_height: f32,
    reactor_height: f32,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let count = config.particle_count as usize;
    let size_range = config.max_particle_size - config.min_particle_size;
    let seed_band = SEED_BAND_NUMERATOR / bed_height;

    let mut particles = Vec::with_capacity(count);
    for i in 0..count {
        // A lone particle takes the maximum size (i / (count - 1) is 0/0)
        let distribution_factor = if count > 1 {
            (i as f32 / (count - 1) as f32).powf(config.size_distribution_exponent)
        } else {
            0.0
        };
        let size = config.max_particle_size - size_range * distribution_factor;

        let x = rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX);
        let y = reactor_height - rng.gen_range(0.0..seed_band);

        particles.push(Particle::new(i as u32, x, y, size));
    }

    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use reactor_core::constants::{MAX_BED_HEIGHT, MIN_BED_HEIGHT, REACTOR_HEIGHT};

    fn scenario_config() -> ReactorConfig {
        ReactorConfig {
            velocity: 10.0,
            size_distribution_exponent: 0.5,
            particle_count: 1000,
            min_particle_size: 0.05,
            max_particle_size: 5.0,
            seed: 42,
        }
    }

    #[test]
    fn population_size_matches_count() {
        let config = scenario_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);
        assert_eq!(particles.len(), 1000);
    }

    #[test]
    fn ids_follow_generation_order() {
        let config = scenario_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.id, i as u32);
        }
    }

    #[test]
    fn sizes_monotone_decreasing_with_extremes_at_ends() {
        let config = scenario_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);

        assert_eq!(particles[0].size, 5.0);
        assert!((particles[999].size - 0.05).abs() < 1e-4);

        for pair in particles.windows(2) {
            assert!(pair[0].size >= pair[1].size);
        }
        for p in &particles {
            assert!(p.size >= 0.05 && p.size <= 5.0);
        }
    }

    #[test]
    fn sizes_stay_in_range_across_exponents() {
        for exponent in [0.01, 0.2, 0.5, 1.0] {
            let config = ReactorConfig {
                size_distribution_exponent: exponent,
                ..scenario_config()
            };
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let particles = generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);
            assert_eq!(particles[0].size, config.max_particle_size);
            for p in &particles {
                assert!(p.size >= config.min_particle_size);
                assert!(p.size <= config.max_particle_size);
            }
        }
    }

    #[test]
    fn single_particle_population_takes_max_size() {
        let config = ReactorConfig {
            particle_count: 1,
            ..scenario_config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].size, 5.0);
        assert!(particles[0].size.is_finite());
    }

    #[test]
    fn particles_seed_in_a_thin_band_at_the_floor() {
        let config = scenario_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);

        let band = SEED_BAND_NUMERATOR / MIN_BED_HEIGHT;
        for p in &particles {
            assert!(p.y <= REACTOR_HEIGHT);
            assert!(p.y > REACTOR_HEIGHT - band);
            assert!(p.x >= SPAWN_X_MIN && p.x < SPAWN_X_MAX);
        }
    }

    #[test]
    fn taller_beds_seed_tighter_bands() {
        let config = scenario_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let tall = generate(&config, MAX_BED_HEIGHT, REACTOR_HEIGHT, &mut rng);

        let band = SEED_BAND_NUMERATOR / MAX_BED_HEIGHT;
        for p in &tall {
            assert!(p.y > REACTOR_HEIGHT - band);
        }
    }

    #[test]
    fn same_seed_reproduces_the_population() {
        let config = scenario_config();
        let mut a = ChaCha8Rng::seed_from_u64(config.seed);
        let mut b = ChaCha8Rng::seed_from_u64(config.seed);
        assert_eq!(
            generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut a),
            generate(&config, MIN_BED_HEIGHT, REACTOR_HEIGHT, &mut b)
        );
    }
}
