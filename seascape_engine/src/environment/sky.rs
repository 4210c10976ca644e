/// Physical sky parameters and the sun direction derived from them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const ELEVATION_RANGE: (f32, f32) = (0.0, 90.0);
pub const AZIMUTH_RANGE: (f32, f32) = (-180.0, 180.0);
pub const TURBIDITY_RANGE: (f32, f32) = (0.0, 20.0);
pub const RAYLEIGH_RANGE: (f32, f32) = (0.0, 4.0);
pub const MIE_COEFFICIENT_RANGE: (f32, f32) = (0.0, 0.1);
pub const MIE_DIRECTIONAL_G_RANGE: (f32, f32) = (0.0, 1.0);

fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyParameters {
    /// Sun height above the horizon, degrees
    pub elevation: f32,
    /// Sun bearing, degrees
    pub azimuth: f32,
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    /// Sky dome scale
    pub scale: f32,
}

impl Default for SkyParameters {
    fn default() -> Self {
        Self {
            elevation: 2.0,
            azimuth: 180.0,
            turbidity: 10.0,
            rayleigh: 2.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.5,
            scale: 10000.0,
        }
    }
}

impl SkyParameters {
    /// Copy with every parameter clamped to its slider range.
    pub fn clamped(mut self) -> Self {
        self.elevation = clamp(self.elevation, ELEVATION_RANGE);
        self.azimuth = clamp(self.azimuth, AZIMUTH_RANGE);
        self.turbidity = clamp(self.turbidity, TURBIDITY_RANGE);
        self.rayleigh = clamp(self.rayleigh, RAYLEIGH_RANGE);
        self.mie_coefficient = clamp(self.mie_coefficient, MIE_COEFFICIENT_RANGE);
        self.mie_directional_g = clamp(self.mie_directional_g, MIE_DIRECTIONAL_G_RANGE);
        if !(self.scale.is_finite() && self.scale > 0.0) {
            self.scale = Self::default().scale;
        }
        self
    }

    /// Unit vector towards the sun.
    ///
    /// Spherical coordinates with polar angle `90 - elevation` measured from
    /// +Y and azimuth measured from +Z towards +X.
    pub fn sun_direction(&self) -> Vec3 {
        let phi = (90.0 - self.elevation).to_radians();
        let theta = self.azimuth.to_radians();
        Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos())
    }
}
