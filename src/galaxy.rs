//! Spiral galaxy point cloud generation.
//!
//! Deterministic shape, stochastic detail: each particle is assigned to one
//! of `branches` evenly spaced spiral arms by its index, winds further along
//! the arm the farther out it sits, and gets power-shaped random scatter so
//! most particles hug their arm while a few stray. Generation runs once at
//! setup; the buffers are uploaded to the GPU and never touched again.

use std::f32::consts::TAU;

use rand::Rng;

use crate::params::GalaxyParams;

/// Position and color buffers for a galaxy point cloud.
///
/// Both buffers hold `3 * count` floats and are index-aligned: particle `i`
/// occupies slots `3i..3i+3` in each.
#[derive(Debug, Clone)]
pub struct ParticleField {
    /// Interleaved xyz positions.
    pub positions: Vec<f32>,
    /// Interleaved rgb colors, 0.0-1.0.
    pub colors: Vec<f32>,
}

impl ParticleField {
    /// Generate a field from the given parameters using the thread-local RNG.
    pub fn generate(params: &GalaxyParams) -> Self {
        Self::generate_with(params, &mut rand::thread_rng())
    }

    /// Generate a field drawing all stochastic detail from `rng`.
    ///
    /// Seed the RNG for reproducible fields.
    pub fn generate_with<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> Self {
        assert!(params.branches > 0, "galaxy needs at least one branch");

        let count = params.count as usize;
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);

        for i in 0..params.count {
            let r = rng.gen::<f32>() * params.radius;
            let spin_angle = r / params.radius * params.spin * TAU;
            let branch_angle = arm_angle(i, params.branches);

            let offset_x = shaped_offset(rng, params.randomness_power, params.randomness * r);
            let offset_y =
                shaped_offset(rng, params.randomness_power, params.randomness * r * 0.5);
            let offset_z = shaped_offset(rng, params.randomness_power, params.randomness * r);

            let (arm_x, arm_z) = arm_position(r, branch_angle + spin_angle);
            positions.push(arm_x + offset_x);
            positions.push(offset_y);
            positions.push(arm_z + offset_z);

            let color = params
                .inside_color
                .lerp(params.outside_color, r / params.radius);
            colors.extend_from_slice(&color.to_array());
        }

        Self { positions, colors }
    }

    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Arm assignment by index residue: particle `i` belongs to arm
/// `i mod branches`, so membership is deterministic while radius is random.
fn arm_angle(index: u32, branches: u32) -> f32 {
    (index % branches) as f32 / branches as f32 * TAU
}

/// Ideal (un-scattered) position on an arm at radius `r` and total angle
/// `angle`; the XZ magnitude is exactly `r`.
fn arm_position(r: f32, angle: f32) -> (f32, f32) {
    (angle.cos() * r, angle.sin() * r)
}

/// A signed, power-shaped random offset in `[-scale, scale]`.
///
/// Raising a uniform draw to `power` concentrates mass near zero; the sign
/// flips with probability one half.
fn shaped_offset<R: Rng + ?Sized>(rng: &mut R, power: f32, scale: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powf(power);
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    magnitude * sign * scale
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::color::Color;

    #[test]
    fn test_buffers_index_aligned() {
        let params = GalaxyParams::default().with_count(1000);
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate_with(&params, &mut rng);

        assert_eq!(field.positions.len(), 3000);
        assert_eq!(field.colors.len(), 3000);
        assert_eq!(field.len(), 1000);
    }

    #[test]
    fn test_arm_assignment_exactly_uniform() {
        let mut counts = [0u32; 3];
        for i in 0..30_000u32 {
            let angle = arm_angle(i, 3);
            let arm = (angle / TAU * 3.0).round() as usize % 3;
            counts[arm] += 1;
        }
        assert_eq!(counts, [10_000, 10_000, 10_000]);
    }

    #[test]
    fn test_arm_position_magnitude_is_radius() {
        for &(r, angle) in &[(0.0f32, 1.0f32), (17.5, 0.3), (400.0, 5.9)] {
            let (x, z) = arm_position(r, angle);
            assert!(((x * x + z * z).sqrt() - r).abs() < r.max(1.0) * 1e-5);
        }
    }

    #[test]
    fn test_shaped_offset_bounded_and_concentrated() {
        let mut rng = StdRng::seed_from_u64(42);
        let scale = 80.0;
        let mut mean_abs = 0.0;
        for _ in 0..10_000 {
            let offset = shaped_offset(&mut rng, 3.0, scale);
            assert!(offset.abs() <= scale);
            mean_abs += offset.abs();
        }
        mean_abs /= 10_000.0;
        // E[U^3] = 0.25, so the mean magnitude sits well below scale/2
        assert!(mean_abs < scale * 0.35);
    }

    #[test]
    fn test_positions_within_scattered_disk() {
        let params = GalaxyParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::generate_with(&params, &mut rng);

        // r < radius and per-axis scatter <= randomness * r, so no coordinate
        // can leave the disk by more than the scatter bound.
        let bound = params.radius * (1.0 + params.randomness);
        for chunk in field.positions.chunks_exact(3) {
            assert!(chunk[0].abs() <= bound);
            assert!(chunk[1].abs() <= params.radius * params.randomness * 0.5);
            assert!(chunk[2].abs() <= bound);
        }
    }

    #[test]
    fn test_colors_bounded_by_endpoints() {
        let params = GalaxyParams::default();
        let inside = params.inside_color.to_array();
        let outside = params.outside_color.to_array();
        let mut rng = StdRng::seed_from_u64(11);
        let field = ParticleField::generate_with(&params, &mut rng);

        for chunk in field.colors.chunks_exact(3) {
            for axis in 0..3 {
                let lo = inside[axis].min(outside[axis]) - 1e-6;
                let hi = inside[axis].max(outside[axis]) + 1e-6;
                assert!(chunk[axis] >= lo && chunk[axis] <= hi);
            }
        }
    }

    #[test]
    fn test_center_particle_takes_inside_color() {
        // A zero RNG draws r = 0: position at the origin, pure inside color.
        let params = GalaxyParams::default().with_count(1);
        let mut rng = StepRng::new(0, 0);
        let field = ParticleField::generate_with(&params, &mut rng);

        assert_eq!(field.positions, vec![0.0, 0.0, 0.0]);
        assert_eq!(field.colors, params.inside_color.to_array().to_vec());
    }

    #[test]
    fn test_rim_particle_approaches_outside_color() {
        // A saturated RNG draws r just under radius: color converges to the
        // outside color.
        let params = GalaxyParams::default()
            .with_count(1)
            .with_randomness(0.0)
            .with_colors(Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0));
        let mut rng = StepRng::new(u64::MAX, 0);
        let field = ParticleField::generate_with(&params, &mut rng);

        assert!(field.colors[0] < 1e-3);
        assert!(field.colors[2] > 1.0 - 1e-3);
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let params = GalaxyParams::default().with_count(500);
        let a = ParticleField::generate_with(&params, &mut StdRng::seed_from_u64(99));
        let b = ParticleField::generate_with(&params, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.colors, b.colors);
    }
}
