//! Camera and view management.
//!
//! A perspective turntable camera orbiting a focus point. The default pose
//! frames a stock pack from slightly above and to the side, looking back at
//! the origin.

use std::fmt;

use glam::{Mat4, Vec3};

/// Default camera position, in scene units.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(115.0, 46.0, -81.0);

/// Default focus point.
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 35.0;

/// Input speed multipliers for orbit, zoom, and pan.
///
/// Touch input reports much larger deltas than mouse input for the same
/// gesture, so the touch profile damps everything down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpeeds {
    pub rotate: f32,
    pub zoom: f32,
    pub pan: f32,
}

impl CameraSpeeds {
    /// Speeds tuned for mouse and scroll-wheel input.
    #[must_use]
    pub fn desktop() -> Self {
        Self {
            rotate: 1.0,
            zoom: 1.0,
            pan: 1.0,
        }
    }

    /// Damped speeds for touch gestures.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            rotate: 0.6,
            zoom: 0.35,
            pan: 0.35,
        }
    }
}

impl Default for CameraSpeeds {
    fn default() -> Self {
        Self::desktop()
    }
}

/// A snapshot of the camera pose for the on-screen debug read-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
}

impl fmt::Display for CameraPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos ({:.1}, {:.1}, {:.1})  target ({:.1}, {:.1}, {:.1})",
            self.position.x,
            self.position.y,
            self.position.z,
            self.target.x,
            self.target.y,
            self.target.z
        )
    }
}

/// A perspective turntable camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Input speed multipliers.
    pub speeds: CameraSpeeds,
}

impl Camera {
    /// Creates a camera at the stock pack-framing pose.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: DEFAULT_TARGET,
            up: Vec3::Y,
            fov: DEFAULT_FOV_DEGREES.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 5000.0,
            speeds: CameraSpeeds::desktop(),
        }
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Sets the input speed profile.
    pub fn set_speeds(&mut self, speeds: CameraSpeeds) {
        self.speeds = speeds;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Returns the current pose snapshot.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }

    /// Orbits the camera around the target, keeping the radius fixed.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let delta_x = delta_x * self.speeds.rotate;
        let delta_y = delta_y * self.speeds.rotate;

        let radius = (self.position - self.target).length();
        let mut theta = (self.position.x - self.target.x).atan2(self.position.z - self.target.z);
        let mut phi = ((self.position.y - self.target.y) / radius).acos();

        theta -= delta_x;
        phi = (phi - delta_y).clamp(0.01, std::f32::consts::PI - 0.01);

        self.position = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }

    /// Pans the camera parallel to the view plane.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let right = self.right();
        let up = self.up;
        let offset = (right * delta_x + up * delta_y) * self.speeds.pan;
        self.position += offset;
        self.target += offset;
    }

    /// Dollies toward (positive delta) or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let direction = self.forward();
        let distance = (self.position - self.target).length();
        let new_distance = (distance - delta * self.speeds.zoom).max(0.1);
        self.position = self.target - direction * new_distance;
    }

    /// Re-aims at the given bounding box, keeping the current orbit direction.
    pub fn frame(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let size = (max - min).length().max(1.0);

        let mut direction = self.position - self.target;
        if direction.length_squared() < 1e-8 {
            direction = DEFAULT_POSITION - DEFAULT_TARGET;
        }
        let direction = direction.normalize();

        self.target = center;
        self.position = center + direction * size * 1.5;
        self.near = (size * 0.001).max(0.01);
        self.far = (size * 100.0).max(1000.0);
    }

    /// Restores the stock pose, preserving the aspect ratio and speeds.
    pub fn reset(&mut self) {
        let aspect_ratio = self.aspect_ratio;
        let speeds = self.speeds;
        *self = Self::new(aspect_ratio);
        self.speeds = speeds;
    }

    /// Sets the field of view in radians.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(0.1, std::f32::consts::PI - 0.1);
    }

    /// Returns FOV in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Sets FOV from degrees.
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.set_fov(degrees.to_radians());
    }

    /// Sets the near clipping plane.
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Sets the far clipping plane.
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 0.1);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
