//! Visualization builder, render loop, and lifecycle.
//!
//! [`Visualization`] collects everything the host injects (dimensions, theme
//! record, theme name, galaxy parameters) and [`run_with`] drives the winit
//! event loop until the window closes or the [`Handle`] it delivered is
//! disposed. The loop has exactly two states, Running and Disposed, and the
//! transition is one-way.
//!
//! [`run_with`]: Visualization::run_with

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

use crate::error::VizError;
use crate::galaxy::ParticleField;
use crate::gpu::GpuState;
use crate::params::GalaxyParams;
use crate::texture::SpriteTexture;
use crate::theme::{Background, ThemeData};

/// A galaxy visualization, configured with method chaining and started with
/// [`run`] or [`run_with`].
///
/// # Example
///
/// ```no_run
/// use swirl::{GalaxyParams, Visualization};
///
/// Visualization::new()
///     .with_size(1280, 720)
///     .with_theme_json(r##"{"threejs":{"backgroundColor":"#050505"}}"##)
///     .with_params(GalaxyParams::default().with_branches(5))
///     .run()
///     .expect("visualization failed");
/// ```
///
/// [`run`]: Visualization::run
/// [`run_with`]: Visualization::run_with
pub struct Visualization {
    params: GalaxyParams,
    theme_data: Option<ThemeData>,
    theme: Option<String>,
    sprite: SpriteTexture,
    width: u32,
    height: u32,
    title: String,
}

impl Visualization {
    /// Create a visualization with default parameters and theming.
    pub fn new() -> Self {
        Self {
            params: GalaxyParams::default(),
            theme_data: None,
            theme: None,
            sprite: SpriteTexture::default(),
            width: 1280,
            height: 720,
            title: "Galaxy".to_string(),
        }
    }

    /// Set the galaxy shape parameters.
    pub fn with_params(mut self, params: GalaxyParams) -> Self {
        self.params = params;
        self
    }

    /// Set the host's theme record.
    pub fn with_theme_data(mut self, data: ThemeData) -> Self {
        self.theme_data = Some(data);
        self
    }

    /// Set the host's theme record from its JSON form.
    ///
    /// Malformed JSON is ignored with a warning; theming then falls back to
    /// the documented defaults.
    pub fn with_theme_json(mut self, json: &str) -> Self {
        match ThemeData::from_json(json) {
            Ok(data) => self.theme_data = Some(data),
            Err(e) => tracing::warn!(error = %e, "ignoring malformed theme record"),
        }
        self
    }

    /// Set the simple theme name. The value `"transparent"` selects a
    /// transparent surface regardless of the theme record.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the surface dimensions in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the stock glow sprite.
    pub fn with_sprite(mut self, sprite: SpriteTexture) -> Self {
        self.sprite = sprite;
        self
    }

    /// Run the visualization. Blocks until the window is closed or a
    /// [`Handle`] disposes it.
    pub fn run(self) -> Result<(), VizError> {
        self.run_with(|_| {})
    }

    /// Run the visualization, handing a teardown [`Handle`] to `on_start`
    /// before the first frame.
    pub fn run_with<F>(self, on_start: F) -> Result<(), VizError>
    where
        F: FnOnce(Handle),
    {
        let background = Background::resolve(self.theme_data.as_ref(), self.theme.as_deref());
        tracing::info!(
            particles = self.params.count,
            branches = self.params.branches,
            ?background,
            "setting up galaxy visualization"
        );
        let field = ParticleField::generate(&self.params);

        let event_loop = EventLoop::<Dispose>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        on_start(Handle {
            proxy: event_loop.create_proxy(),
        });

        let mut app = App::new(
            field,
            self.params.point_size,
            self.sprite,
            background,
            (self.width, self.height),
            self.title,
        );
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Visualization {
    fn default() -> Self {
        Self::new()
    }
}

/// Teardown handle for a running visualization.
///
/// Disposing cancels the frame loop, releases the camera controls, GPU
/// buffers, and renderer, and closes the window. The handle is cloneable and
/// sendable; calling [`dispose`] more than once, or before the first frame
/// has rendered, is safe. Once the visualization has shut down, further
/// calls are ignored.
///
/// [`dispose`]: Handle::dispose
#[derive(Clone)]
pub struct Handle {
    proxy: EventLoopProxy<Dispose>,
}

impl Handle {
    /// Tear the visualization down.
    pub fn dispose(&self) {
        let _ = self.proxy.send_event(Dispose);
    }
}

#[derive(Debug, Clone, Copy)]
struct Dispose;

struct App {
    field: ParticleField,
    point_size: f32,
    sprite: SpriteTexture,
    background: Background,
    size: (u32, u32),
    title: String,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    disposed: bool,
    error: Option<VizError>,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    fn new(
        field: ParticleField,
        point_size: f32,
        sprite: SpriteTexture,
        background: Background,
        size: (u32, u32),
        title: String,
    ) -> Self {
        Self {
            field,
            point_size,
            sprite,
            background,
            size,
            title,
            window: None,
            gpu_state: None,
            disposed: false,
            error: None,
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    /// One-way Running -> Disposed transition. Drops every resource acquired
    /// at setup; safe before the first frame and on repeat calls.
    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.gpu_state = None;
        self.window = None;
        tracing::info!("galaxy visualization disposed");
    }
}

impl ApplicationHandler<Dispose> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.disposed || self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1))
            .with_transparent(self.background.is_transparent());

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(
            window,
            &self.field,
            self.point_size,
            &self.sprite,
            self.background,
        )) {
            Ok(gpu_state) => {
                self.gpu_state = Some(gpu_state);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "GPU setup failed");
                self.error = Some(e.into());
                self.dispose();
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, _event: Dispose) {
        self.dispose();
        event_loop.exit();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.dispose();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.controls.rotate(dx, dy);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.controls.zoom(steps);
                }
            }
            WindowEvent::RedrawRequested => {
                if self.disposed {
                    return;
                }
                if let Some(gpu_state) = &mut self.gpu_state {
                    match gpu_state.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            tracing::error!("surface out of memory");
                            self.dispose();
                            event_loop.exit();
                            return;
                        }
                        Err(e) => tracing::warn!(error = ?e, "skipping frame"),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn test_app() -> App {
        let params = GalaxyParams::default().with_count(10);
        let field = ParticleField::generate_with(&params, &mut StdRng::seed_from_u64(1));
        App::new(
            field,
            params.point_size,
            SpriteTexture::radial_glow(8),
            Background::resolve(None, None),
            (640, 480),
            "test".to_string(),
        )
    }

    #[test]
    fn test_dispose_before_any_frame_is_safe() {
        let mut app = test_app();
        app.dispose();
        assert!(app.disposed);
        assert!(app.window.is_none());
        assert!(app.gpu_state.is_none());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut app = test_app();
        app.dispose();
        app.dispose();
        assert!(app.disposed);
    }

    #[test]
    fn test_builder_accepts_theme_json() {
        let viz = Visualization::new()
            .with_theme_json(r#"{"threejs":{"backgroundColor":"transparent"}}"#);
        assert!(viz.theme_data.is_some());
    }

    #[test]
    fn test_builder_ignores_malformed_theme_json() {
        let viz = Visualization::new().with_theme_json("{nope");
        assert!(viz.theme_data.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let viz = Visualization::new()
            .with_size(320, 200)
            .with_theme("transparent")
            .with_title("nebula");
        assert_eq!((viz.width, viz.height), (320, 200));
        assert_eq!(viz.theme.as_deref(), Some("transparent"));
        assert_eq!(viz.title, "nebula");
    }
}
