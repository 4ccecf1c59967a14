//! Point sprite textures.
//!
//! Each particle is rendered as a small textured quad. The stock sprite is a
//! procedural radial glow (opaque white center falling off to transparent),
//! which combined with additive blending gives the galaxy its soft look.
//! Hosts that want a different footprint can supply raw RGBA data or load a
//! PNG/JPEG file.

use std::path::Path;

use crate::error::TextureError;

/// Filter mode for sprite sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Smooth linear filtering (default).
    #[default]
    Linear,
    /// Sharp nearest-neighbor filtering.
    Nearest,
}

/// Address mode for coordinates outside 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMode {
    /// Clamp to edge color (default).
    #[default]
    ClampToEdge,
    /// Repeat/tile the texture.
    Repeat,
}

/// Alpha stops of the stock glow sprite: opaque at the center, a soft
/// shoulder, then a long transparent tail.
const GLOW_STOPS: [(f32, [u8; 4]); 4] = [
    (0.0, [255, 255, 255, 255]),
    (0.2, [255, 255, 255, 204]),
    (0.5, [255, 255, 255, 26]),
    (1.0, [0, 0, 0, 0]),
];

/// A CPU-side sprite raster ready for GPU upload.
#[derive(Debug, Clone)]
pub struct SpriteTexture {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Filter mode for sampling.
    pub filter: FilterMode,
    /// Address mode for UV coordinates outside 0-1.
    pub address_mode: AddressMode,
}

impl SpriteTexture {
    /// Create a sprite from raw RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
            filter: FilterMode::Linear,
            address_mode: AddressMode::ClampToEdge,
        }
    }

    /// Load a sprite from a PNG or JPEG file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path.as_ref())?.into_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self::from_rgba(img.into_raw(), width, height))
    }

    /// The stock soft glow: a radial gradient from opaque white at the
    /// center through semi-transparent white to fully transparent at the
    /// edge.
    ///
    /// # Example
    ///
    /// ```
    /// use swirl::SpriteTexture;
    ///
    /// let glow = SpriteTexture::radial_glow(32);
    /// assert_eq!(glow.data.len(), 32 * 32 * 4);
    /// ```
    pub fn radial_glow(size: u32) -> Self {
        let center = size as f32 / 2.0;
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let t = ((dx * dx + dy * dy).sqrt() / center).min(1.0);
                data.extend_from_slice(&sample_glow(t));
            }
        }
        Self::from_rgba(data, size, size)
    }

    /// Set the filter mode.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Set the address mode.
    pub fn with_address_mode(mut self, mode: AddressMode) -> Self {
        self.address_mode = mode;
        self
    }
}

impl Default for SpriteTexture {
    fn default() -> Self {
        Self::radial_glow(32)
    }
}

/// Sample the glow gradient at `t` in 0-1 (distance from center over
/// radius), interpolating piecewise-linearly between stops.
fn sample_glow(t: f32) -> [u8; 4] {
    let mut prev = GLOW_STOPS[0];
    for &stop in &GLOW_STOPS[1..] {
        if t <= stop.0 {
            let span = stop.0 - prev.0;
            let local = if span > 0.0 { (t - prev.0) / span } else { 0.0 };
            return [
                lerp_u8(prev.1[0], stop.1[0], local),
                lerp_u8(prev.1[1], stop.1[1], local),
                lerp_u8(prev.1[2], stop.1[2], local),
                lerp_u8(prev.1[3], stop.1[3], local),
            ];
        }
        prev = stop;
    }
    GLOW_STOPS[GLOW_STOPS.len() - 1].1
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = a as f32;
    let b = b as f32;
    (a + (b - a) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(tex: &SpriteTexture, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * tex.width + x) * 4) as usize;
        [tex.data[i], tex.data[i + 1], tex.data[i + 2], tex.data[i + 3]]
    }

    #[test]
    fn test_glow_dimensions() {
        let glow = SpriteTexture::radial_glow(32);
        assert_eq!(glow.width, 32);
        assert_eq!(glow.height, 32);
        assert_eq!(glow.data.len(), 32 * 32 * 4);
        assert_eq!(glow.filter, FilterMode::Linear);
        assert_eq!(glow.address_mode, AddressMode::ClampToEdge);
    }

    #[test]
    fn test_glow_center_opaque_white() {
        let glow = SpriteTexture::radial_glow(32);
        let center = pixel(&glow, 16, 16);
        assert_eq!(&center[..3], &[255, 255, 255]);
        assert!(center[3] > 200);
    }

    #[test]
    fn test_glow_corner_transparent() {
        let glow = SpriteTexture::radial_glow(32);
        assert_eq!(pixel(&glow, 0, 0)[3], 0);
        assert_eq!(pixel(&glow, 31, 31)[3], 0);
        assert_eq!(pixel(&glow, 31, 0)[3], 0);
    }

    #[test]
    fn test_glow_alpha_falls_off_monotonically() {
        let glow = SpriteTexture::radial_glow(32);
        let mut last = 255u8;
        for x in 16..32 {
            let alpha = pixel(&glow, x, 16)[3];
            assert!(alpha <= last);
            last = alpha;
        }
        // The outermost pixel center sits just inside the radius
        assert!(last <= 2);
    }

    #[test]
    fn test_sample_glow_hits_stops() {
        assert_eq!(sample_glow(0.0), [255, 255, 255, 255]);
        assert_eq!(sample_glow(0.2), [255, 255, 255, 204]);
        assert_eq!(sample_glow(0.5), [255, 255, 255, 26]);
        assert_eq!(sample_glow(1.0), [0, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "RGBA data size mismatch")]
    fn test_from_rgba_size_mismatch_panics() {
        SpriteTexture::from_rgba(vec![0; 7], 2, 2);
    }

    #[test]
    fn test_from_file_roundtrip() {
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
        let path = std::env::temp_dir().join("swirl_sprite_test.png");
        img.save(&path).unwrap();

        let tex = SpriteTexture::from_file(&path).unwrap();
        assert_eq!((tex.width, tex.height), (4, 2));
        assert_eq!(&tex.data[..4], &[10, 20, 30, 255]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let err = SpriteTexture::from_file("/nonexistent/sprite.png");
        assert!(err.is_err());
    }
}
