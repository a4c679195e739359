use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation configuration
///
/// Ranges mirror the on-screen sliders; `validate` rejects anything a
/// slider could not produce so programmatic callers fail fast instead of
/// feeding NaN positions into the bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// Fluidization velocity in m/h, 0 to 80
    pub velocity: f32,
    /// Skew of the particle size histogram, 0.01 to 1
    pub size_distribution_exponent: f32,
    /// Number of particles in the bed
    pub particle_count: u32,
    /// Smallest particle diameter in pixels
    pub min_particle_size: f32,
    /// Largest particle diameter in pixels
    pub max_particle_size: f32,
    /// Random seed for deterministic runs
    pub seed: u64,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            velocity: 10.0,
            size_distribution_exponent: 0.5,
            particle_count: 4500,
            min_particle_size: 0.05,
            max_particle_size: 5.0,
            seed: 42,
        }
    }
}

/// Rejected configuration input
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("velocity must be within 0..=80 m/h, got {0}")]
    VelocityOutOfRange(f32),
    #[error("size distribution exponent must be within 0.01..=1, got {0}")]
    ExponentOutOfRange(f32),
    #[error("particle count must be within 1..=10000, got {0}")]
    ParticleCountOutOfRange(u32),
    #[error("particle size range is invalid: min {min} must be positive and below max {max}")]
    InvalidSizeRange { min: f32, max: f32 },
}

impl ReactorConfig {
    /// Slider domain for the particle count; the lower bound for
    /// programmatic input is 1 since a single-particle bed is well defined.
    pub const MAX_PARTICLE_COUNT: u32 = 10_000;

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("velocity", self.velocity),
            ("size_distribution_exponent", self.size_distribution_exponent),
            ("min_particle_size", self.min_particle_size),
            ("max_particle_size", self.max_particle_size),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if !(0.0..=80.0).contains(&self.velocity) {
            return Err(ConfigError::VelocityOutOfRange(self.velocity));
        }
        if !(0.01..=1.0).contains(&self.size_distribution_exponent) {
            return Err(ConfigError::ExponentOutOfRange(
                self.size_distribution_exponent,
            ));
        }
        if self.particle_count == 0 || self.particle_count > Self::MAX_PARTICLE_COUNT {
            return Err(ConfigError::ParticleCountOutOfRange(self.particle_count));
        }
        if self.min_particle_size <= 0.0 || self.min_particle_size >= self.max_particle_size {
            return Err(ConfigError::InvalidSizeRange {
                min: self.min_particle_size,
                max: self.max_particle_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ReactorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_velocity_out_of_range() {
        let config = ReactorConfig {
            velocity: 80.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::VelocityOutOfRange(80.5))
        );

        let config = ReactorConfig {
            velocity: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_velocity() {
        let config = ReactorConfig {
            velocity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "velocity",
                ..
            })
        ));
    }

    #[test]
    fn rejects_exponent_out_of_range() {
        for exponent in [0.0, 0.009, 1.01] {
            let config = ReactorConfig {
                size_distribution_exponent: exponent,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::ExponentOutOfRange(exponent))
            );
        }
    }

    #[test]
    fn rejects_bad_particle_count() {
        for count in [0, 10_001] {
            let config = ReactorConfig {
                particle_count: count,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::ParticleCountOutOfRange(count))
            );
        }
        // Single-particle beds are allowed even though the slider stops at 1000
        let config = ReactorConfig {
            particle_count: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_or_degenerate_size_range() {
        let config = ReactorConfig {
            min_particle_size: 5.0,
            max_particle_size: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ReactorConfig {
            min_particle_size: 6.0,
            max_particle_size: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ReactorConfig {
            min_particle_size: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
