/// A single solid particle in the bed.
///
/// Positions are container-local pixels with y = 0 at the vessel top.
/// `id` and `size` are assigned at generation and never change; the motion
/// updater only moves particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Stable identity, equal to the particle's generation index
    pub id: u32,
    /// Horizontal center position
    pub x: f32,
    /// Vertical position, 0 = container top
    pub y: f32,
    /// Diameter in pixels, fixed for the particle's lifetime
    pub size: f32,
}

impl Particle {
    pub fn new(id: u32, x: f32, y: f32, size: f32) -> Self {
        Self { id, x, y, size }
    }
}
