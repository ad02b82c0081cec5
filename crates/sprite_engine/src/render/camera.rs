//! # 2D Camera
//!
//! Orthographic camera for sprite scenes. The projection maps a fixed
//! world-unit viewport onto clip space and is recomputed only when the
//! viewport changes; the view matrix follows the camera position and is
//! derived on demand.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Mat4, Point3, Vec2, Vec3};

/// Distance of the eye above the sprite plane
const EYE_HEIGHT: f32 = 20.0;

/// Orthographic viewport settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Visible width in world units
    pub view_width: f32,
    /// Visible height in world units
    pub view_height: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        // 40 x 21 tiles of 32 world units
        Self {
            view_width: 32.0 * 40.0,
            view_height: 32.0 * 21.0,
            near: 0.0,
            far: 100.0,
        }
    }
}

/// Orthographic camera looking down the -Z axis at the sprite plane
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec2,
    config: CameraConfig,
    projection: Mat4,
}

impl Camera {
    /// Create a camera at `position` with the default viewport
    pub fn new(position: Vec2) -> Self {
        Self::with_config(position, CameraConfig::default())
    }

    /// Create a camera at `position` with a custom viewport
    pub fn with_config(position: Vec2, config: CameraConfig) -> Self {
        let mut camera = Self {
            position,
            config,
            projection: Mat4::identity(),
        };
        camera.adjust_projection();
        camera
    }

    /// Recompute the projection matrix from the viewport settings
    pub fn adjust_projection(&mut self) {
        let c = &self.config;
        self.projection = Mat4::new_orthographic(0.0, c.view_width, 0.0, c.view_height, c.near, c.far);
    }

    /// Replace the viewport settings
    pub fn set_config(&mut self, config: CameraConfig) {
        self.config = config;
        self.adjust_projection();
    }

    /// Viewport settings
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the camera
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// View matrix for the current position
    pub fn view_matrix(&self) -> Mat4 {
        let eye = Point3::new(self.position.x, self.position.y, EYE_HEIGHT);
        let target = Point3::new(self.position.x, self.position.y, -1.0);
        Mat4::look_at_rh(&eye, &target, &Vec3::y())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}
