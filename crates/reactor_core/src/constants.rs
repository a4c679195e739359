// Geometry is fixed in screen-pixel units: the vessel is a 200x400 column
// with y = 0 at the top, matching the renderer's container.

/// Inner height of the reactor vessel
pub const REACTOR_HEIGHT: f32 = 400.0;

/// Inner width of the reactor vessel
pub const CONTAINER_WIDTH: f32 = 200.0;

/// Bed height with no fluidization
pub const MIN_BED_HEIGHT: f32 = REACTOR_HEIGHT / 8.0;

/// Bed height at full fluidization (bed expands past the vessel top)
pub const MAX_BED_HEIGHT: f32 = REACTOR_HEIGHT * 1.3;

/// Velocity (m/h) below which the bed stays settled
pub const MIN_FLUIDIZATION_VELOCITY: f32 = 10.0;

/// Velocity (m/h) at which the bed height saturates
pub const FULL_FLUIDIZATION_VELOCITY: f32 = 40.0;

/// Horizontal band particles are seeded into (10 px margin each side)
pub const SPAWN_X_MIN: f32 = 10.0;
pub const SPAWN_X_MAX: f32 = 190.0;

/// Right-hand wall used when clamping horizontal motion
pub const WALL_X_MAX: f32 = 190.0;

/// Numerator of the near-bottom seeding band: fresh particles land within
/// `SEED_BAND_NUMERATOR / bed_height` pixels of the vessel floor
pub const SEED_BAND_NUMERATOR: f32 = 3.0;

/// Base per-tick displacement scale before size and velocity weighting
pub const MOVEMENT_SCALE: f32 = 10.0;
