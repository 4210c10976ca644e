/// Camera: perspective camera owned by the scene context.
///
/// Unlike a passive matrix container, this camera derives its view and
/// projection from high-level settings and keeps them in sync on resize.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Authored camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 100.0,
            near: 1.0,
            far: 10000.0,
            position: Vec3::new(40.0, 200.0, 100.0),
            target: Vec3::new(0.0, 50.0, 0.0),
        }
    }
}

impl CameraSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(Error::ConfigError(format!(
                "camera fov must be in (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(Error::ConfigError(format!(
                "camera clip planes must satisfy 0 < near < far, got {} / {}",
                self.near, self.far
            )));
        }
        if !(self.position.is_finite() && self.target.is_finite()) || self.position == self.target {
            return Err(Error::ConfigError("camera position and target must differ".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    settings: CameraSettings,
    aspect: f32,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera for a surface of `width` x `height` pixels.
    ///
    /// A zero height falls back to a square aspect.
    pub fn new(settings: CameraSettings, width: u32, height: u32) -> Self {
        let aspect = if height == 0 { 1.0 } else { width as f32 / height as f32 };
        let mut camera = Self {
            settings,
            aspect,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_view();
        camera.update_projection();
        camera
    }

    // ===== GETTERS =====

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn position(&self) -> Vec3 {
        self.settings.position
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== SETTERS =====

    /// Update aspect and projection. Returns false (and changes nothing) for a
    /// zero-sized surface, as delivered by minimised windows.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        self.update_projection();
        true
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.settings.position = position;
        self.update_view();
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.settings.target = target;
        self.update_view();
    }

    fn update_view(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.settings.position, self.settings.target, Vec3::Y);
    }

    fn update_projection(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(
            self.settings.fov_degrees.to_radians(),
            self.aspect,
            self.settings.near,
            self.settings.far,
        );
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
