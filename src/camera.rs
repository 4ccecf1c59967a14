//! Orbit camera and damped camera controls.

use glam::{Mat4, Vec3};

/// Vertical field of view in degrees.
const FOV_Y_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 2000.0;

/// Radians of yaw/pitch per pixel of pointer drag.
const ROTATE_SPEED: f32 = 0.005;
/// Distance multiplier per scroll step.
const ZOOM_BASE: f32 = 0.95;

/// Orbit camera looking at a fixed target.
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
}

impl Camera {
    /// Place the camera at `position`, looking at the origin.
    pub fn from_position(position: Vec3) -> Self {
        let distance = position.length();
        Self {
            yaw: position.x.atan2(position.z),
            pitch: if distance > 0.0 {
                (position.y / distance).asin()
            } else {
                0.0
            },
            distance,
            target: Vec3::ZERO,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Calculate the projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_position(Vec3::new(0.0, 300.0, 500.0))
    }
}

/// Damped, auto-rotating orbit manipulation.
///
/// Pointer drags and scroll steps are fed in as impulses; [`update`] is
/// called once per frame and applies them smoothed by `damping_factor`,
/// plus a steady idle rotation when `auto_rotate` is on.
///
/// [`update`]: OrbitControls::update
pub struct OrbitControls {
    pub camera: Camera,
    /// Smoothing coefficient in (0, 1]; 1.0 applies input immediately.
    pub damping_factor: f32,
    /// Rotate slowly around the target while idle.
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one orbit every 30 seconds at 60 ticks
    /// per second.
    pub auto_rotate_speed: f32,
    /// Closest allowed camera distance.
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    pub max_distance: f32,
    yaw_delta: f32,
    pitch_delta: f32,
}

impl OrbitControls {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            damping_factor: 0.05,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            min_distance: 50.0,
            max_distance: 1500.0,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
        }
    }

    /// Feed a pointer drag of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_delta -= dx * ROTATE_SPEED;
        self.pitch_delta += dy * ROTATE_SPEED;
    }

    /// Feed a scroll of `steps` (positive zooms in).
    pub fn zoom(&mut self, steps: f32) {
        self.camera.distance = (self.camera.distance * ZOOM_BASE.powf(steps))
            .clamp(self.min_distance, self.max_distance);
    }

    /// Advance damping and auto-rotation by one tick.
    ///
    /// Pending impulses are applied scaled by `damping_factor` and decay by
    /// the same factor, so a drag's full rotation lands over several frames.
    pub fn update(&mut self) {
        if self.auto_rotate {
            self.yaw_delta -= auto_rotation_angle(self.auto_rotate_speed);
        }

        self.camera.yaw += self.yaw_delta * self.damping_factor;
        self.camera.pitch =
            (self.camera.pitch + self.pitch_delta * self.damping_factor).clamp(-1.5, 1.5);

        self.yaw_delta *= 1.0 - self.damping_factor;
        self.pitch_delta *= 1.0 - self.damping_factor;
    }
}

/// Idle rotation per tick for a given speed, assuming 60 ticks per second.
fn auto_rotation_angle(speed: f32) -> f32 {
    std::f32::consts::TAU / 60.0 / 60.0 * speed
}
