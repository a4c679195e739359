use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reactor_core::constants::{MAX_BED_HEIGHT, MIN_BED_HEIGHT, REACTOR_HEIGHT};
use reactor_core::{ConfigError, Particle, ReactorConfig};
use reactor_physics::{bed, motion, population};

/// Owned simulation state, tracked as a Bevy Resource.
///
/// Holds the current configuration, the derived bed height, the particle
/// population and the RNG driving all randomness. Systems access it through
/// `ResMut`, so a tick and a regeneration can never interleave on the same
/// population snapshot.
#[derive(Resource)]
pub struct ReactorState {
    /// Active configuration (already validated)
    config: ReactorConfig,
    /// Bed height derived from the configured velocity
    bed_height: f32,
    /// Current population, regenerated when population parameters change
    particles: Vec<Particle>,
    /// Whether ticks advance the bed
    pub paused: bool,
    /// Ticks applied since the last regeneration
    pub ticks: u64,
    /// Incremented on every regeneration (render respawns sprites on change)
    particles_generation: u32,
    rng: ChaCha8Rng,
}

impl ReactorState {
    /// Build a reactor with a freshly generated population.
    pub fn new(config: ReactorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let bed_height = bed::bed_height(config.velocity, MIN_BED_HEIGHT, MAX_BED_HEIGHT);
        let particles = population::generate(&config, bed_height, REACTOR_HEIGHT, &mut rng);
        Ok(Self {
            config,
            bed_height,
            particles,
            paused: false,
            ticks: 0,
            particles_generation: 0,
            rng,
        })
    }

    /// Install a new configuration.
    ///
    /// The population is regenerated only when a population-affecting
    /// parameter changed: the count, the size distribution, the size range,
    /// the seed, or the derived bed height. A velocity change inside a
    /// bed-height plateau just rescales the motion of the existing bed.
    pub fn apply_config(&mut self, config: ReactorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let new_bed_height = bed::bed_height(config.velocity, MIN_BED_HEIGHT, MAX_BED_HEIGHT);

        let regenerate = config.particle_count != self.config.particle_count
            || config.size_distribution_exponent != self.config.size_distribution_exponent
            || config.min_particle_size != self.config.min_particle_size
            || config.max_particle_size != self.config.max_particle_size
            || new_bed_height != self.bed_height
            || config.seed != self.config.seed;

        if config.seed != self.config.seed {
            self.rng = ChaCha8Rng::seed_from_u64(config.seed);
        }
        self.config = config;
        self.bed_height = new_bed_height;
        if regenerate {
            self.regenerate();
        }
        Ok(())
    }

    /// Discard the population and reseed it at the vessel floor.
    pub fn regenerate(&mut self) {
        self.particles =
            population::generate(&self.config, self.bed_height, REACTOR_HEIGHT, &mut self.rng);
        self.ticks = 0;
        self.particles_generation = self.particles_generation.wrapping_add(1);
        debug!(
            "Regenerated {} particles (bed height {:.1})",
            self.particles.len(),
            self.bed_height
        );
    }

    /// Advance the bed by one tick.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        motion::step(
            &mut self.particles,
            &self.config,
            self.bed_height,
            REACTOR_HEIGHT,
            &mut self.rng,
        );
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn config(&self) -> &ReactorConfig {
        &self.config
    }

    pub fn bed_height(&self) -> f32 {
        self.bed_height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Regeneration counter for the renderer.
    pub fn particles_generation(&self) -> u32 {
        self.particles_generation
    }
}
