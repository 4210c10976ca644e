//! Environment module
//!
//! Sky and water parameters. The water's sun direction always follows the
//! sky, so the two are updated together through `Environment`.

mod sky;
mod water;

pub use sky::{
    SkyParameters, AZIMUTH_RANGE, ELEVATION_RANGE, MIE_COEFFICIENT_RANGE,
    MIE_DIRECTIONAL_G_RANGE, RAYLEIGH_RANGE, TURBIDITY_RANGE,
};
pub use water::{WaterSurface, DISTORTION_SCALE_RANGE, SIZE_RANGE};

use glam::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    sky: SkyParameters,
    water: WaterSurface,
}

impl Environment {
    /// Build from authored parameters, clamping both to their ranges.
    pub fn new(sky: SkyParameters, water: WaterSurface) -> Self {
        let mut environment = Self { sky: sky.clamped(), water: water.clamped() };
        environment.update_sun();
        environment
    }

    pub fn sky(&self) -> &SkyParameters {
        &self.sky
    }

    pub fn water(&self) -> &WaterSurface {
        &self.water
    }

    pub fn water_mut(&mut self) -> &mut WaterSurface {
        &mut self.water
    }

    pub fn sun_direction(&self) -> Vec3 {
        self.water.sun_direction
    }

    /// Replace the sky (clamped) and recompute the sun.
    pub fn set_sky(&mut self, sky: SkyParameters) {
        self.sky = sky.clamped();
        self.update_sun();
    }

    pub fn set_elevation(&mut self, degrees: f32) {
        self.set_sky(SkyParameters { elevation: degrees, ..self.sky });
    }

    pub fn set_azimuth(&mut self, degrees: f32) {
        self.set_sky(SkyParameters { azimuth: degrees, ..self.sky });
    }

    fn update_sun(&mut self) {
        self.water.sun_direction = self.sky.sun_direction().normalize_or(Vec3::Y);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(SkyParameters::default(), WaterSurface::default())
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
