//! # swirl
//!
//! GPU-rendered animated spiral galaxy point clouds.
//!
//! swirl builds a procedural galaxy (tens of thousands of additively blended
//! point sprites on spiral arms), themes it from a host-provided color
//! record, and spins it under a damped auto-rotating orbit camera until the
//! host tears it down.
//!
//! ## Quick Start
//!
//! ```ignore
//! use swirl::Visualization;
//!
//! fn main() {
//!     Visualization::new()
//!         .with_size(1280, 720)
//!         .run()
//!         .expect("visualization failed");
//! }
//! ```
//!
//! ## Theming
//!
//! The host hands over a theme record (JSON or the [`ThemeData`] struct) and
//! optionally a simple theme name. The only field read is the background
//! color; `"transparent"` (as the color or the theme name) renders with a
//! zero-opacity clear so the host can composite the galaxy over its own
//! surface. Missing or malformed colors fall back to a near-black default.
//!
//! ## Lifecycle
//!
//! [`Visualization::run_with`] delivers a [`Handle`] before the first frame.
//! Calling [`Handle::dispose`] cancels the frame loop and releases every
//! resource acquired at setup: camera controls, geometry buffers, the sprite
//! texture, the renderer, and the window. Disposal is idempotent and safe
//! even if no frame has rendered yet.
//!
//! ## Shape Parameters
//!
//! [`GalaxyParams`] controls the point cloud: particle count, disk radius,
//! arm count, spin, scatter, and the center/rim colors that get interpolated
//! per particle by radius. The defaults reproduce the stock three-armed
//! galaxy.

mod camera;
mod color;
mod error;
mod galaxy;
mod gpu;
mod params;
mod texture;
mod theme;
mod viz;

pub use camera::{Camera, OrbitControls};
pub use color::Color;
pub use error::{GpuError, TextureError, VizError};
pub use galaxy::ParticleField;
pub use glam::Vec3;
pub use params::GalaxyParams;
pub use texture::{AddressMode, FilterMode, SpriteTexture};
pub use theme::{Background, RendererTheme, ThemeData, DEFAULT_BACKGROUND};
pub use viz::{Handle, Visualization};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use swirl::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::{Camera, OrbitControls};
    pub use crate::color::Color;
    pub use crate::galaxy::ParticleField;
    pub use crate::params::GalaxyParams;
    pub use crate::texture::SpriteTexture;
    pub use crate::theme::{Background, ThemeData};
    pub use crate::viz::{Handle, Visualization};
    pub use crate::Vec3;
}
