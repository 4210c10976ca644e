/// Animated water surface parameters.

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const DISTORTION_SCALE_RANGE: (f32, f32) = (0.0, 8.0);
pub const SIZE_RANGE: (f32, f32) = (0.1, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSurface {
    pub distortion_scale: f32,
    pub size: f32,
    /// Linear RGB
    pub water_color: Vec3,
    pub sun_color: Vec3,
    pub alpha: f32,
    /// Surface phase, advanced once per tick
    #[serde(skip)]
    pub time: f32,
    #[serde(skip)]
    pub sun_direction: Vec3,
}

impl Default for WaterSurface {
    fn default() -> Self {
        Self {
            distortion_scale: 3.7,
            size: 1.0,
            water_color: Vec3::new(0.0, 30.0 / 255.0, 15.0 / 255.0),
            sun_color: Vec3::ONE,
            alpha: 1.0,
            time: 0.0,
            sun_direction: Vec3::Y,
        }
    }
}

impl WaterSurface {
    pub fn set_distortion_scale(&mut self, value: f32) {
        self.distortion_scale = value.clamp(DISTORTION_SCALE_RANGE.0, DISTORTION_SCALE_RANGE.1);
    }

    pub fn set_size(&mut self, value: f32) {
        self.size = value.clamp(SIZE_RANGE.0, SIZE_RANGE.1);
    }

    /// Copy with sliders clamped to their ranges.
    pub fn clamped(mut self) -> Self {
        self.set_distortion_scale(self.distortion_scale);
        self.set_size(self.size);
        self.alpha = self.alpha.clamp(0.0, 1.0);
        self
    }

    /// Advance the surface phase by one tick.
    pub fn advance(&mut self, step: f32) {
        self.time += step;
    }
}
