//! Galaxy shape parameters.

use crate::color::Color;

/// Parameters controlling the shape and coloring of the galaxy point cloud.
///
/// The defaults reproduce the stock look: 30 000 particles on 3 spiral arms
/// in a disk of radius 400, warm red core fading to blue rims. Parameters
/// are fixed for the lifetime of one visualization instance.
///
/// # Example
///
/// ```
/// use swirl::GalaxyParams;
///
/// let params = GalaxyParams::default().with_branches(5).with_spin(1.5);
/// assert_eq!(params.branches, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParams {
    /// Number of particles.
    pub count: u32,
    /// Rendered size of each point sprite, in world units.
    pub point_size: f32,
    /// Disk radius; every particle's base radius lies in `[0, radius)`.
    pub radius: f32,
    /// Number of evenly spaced spiral arms.
    pub branches: u32,
    /// How far particles at the rim wind around the center, in full turns.
    pub spin: f32,
    /// Magnitude of random scatter around the ideal arm position,
    /// proportional to each particle's radius.
    pub randomness: f32,
    /// Exponent shaping the scatter distribution. Higher values concentrate
    /// particles near their arm; a few outliers scatter far.
    pub randomness_power: f32,
    /// Particle color at the galactic center.
    pub inside_color: Color,
    /// Particle color at the rim.
    pub outside_color: Color,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 30_000,
            point_size: 3.0,
            radius: 400.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: Color::from_rgb8(0xEF, 0x55, 0x3B),
            outside_color: Color::from_rgb8(0x63, 0x6E, 0xFA),
        }
    }
}

impl GalaxyParams {
    /// Set the particle count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the point sprite size.
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Set the disk radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of spiral arms.
    pub fn with_branches(mut self, branches: u32) -> Self {
        self.branches = branches;
        self
    }

    /// Set the spin factor.
    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Set the scatter magnitude.
    pub fn with_randomness(mut self, randomness: f32) -> Self {
        self.randomness = randomness;
        self
    }

    /// Set the scatter falloff exponent.
    pub fn with_randomness_power(mut self, power: f32) -> Self {
        self.randomness_power = power;
        self
    }

    /// Set the center and rim colors.
    pub fn with_colors(mut self, inside: Color, outside: Color) -> Self {
        self.inside_color = inside;
        self.outside_color = outside;
        self
    }
}
