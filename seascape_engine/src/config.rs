//! Scene configuration
//!
//! A scene file is JSON describing the camera, sky, water, frame settings,
//! and the asset descriptor table. Everything except `name` has a default.

use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::asset::AssetDescriptor;
use crate::camera::CameraSettings;
use crate::environment::{SkyParameters, WaterSurface};
use crate::error::{Error, Result};
use crate::frame::DEFAULT_SURFACE_STEP;
use crate::engine_error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
    /// Water phase advance per tick
    pub surface_step: f32,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self { surface_step: DEFAULT_SURFACE_STEP }
    }
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    /// Directory relative sources resolve against
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub sky: SkyParameters,
    #[serde(default)]
    pub water: WaterSurface,
    #[serde(default)]
    pub frame: FrameSettings,
    /// Bounded wait per asset load, seconds
    #[serde(default)]
    pub load_timeout_secs: Option<f32>,
    /// Seed for instance scattering
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub assets: Vec<AssetDescriptor>,
}

impl SceneConfig {
    /// Empty scene with default camera and environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset_root: default_asset_root(),
            camera: CameraSettings::default(),
            sky: SkyParameters::default(),
            water: WaterSurface::default(),
            frame: FrameSettings::default(),
            load_timeout_secs: None,
            seed: None,
            assets: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            engine_error!("seascape::SceneConfig", "Malformed scene file: {}", e);
            Error::ConfigError(format!("malformed scene file: {}", e))
        })
    }

    /// Read a scene file. A relative asset root is taken relative to the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            engine_error!("seascape::SceneConfig", "Cannot read '{}': {}", path.display(), e);
            Error::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let mut config = Self::from_json(&json)?;
        if config.asset_root.is_relative() {
            if let Some(dir) = path.parent() {
                config.asset_root = dir.join(&config.asset_root);
            }
        }
        Ok(config)
    }

    /// Bounded wait per load. Fails for values no `Duration` can hold.
    pub fn load_timeout(&self) -> Result<Option<Duration>> {
        self.load_timeout_secs
            .map(|secs| {
                Duration::try_from_secs_f32(secs).map_err(|_| {
                    Error::ConfigError(format!("load_timeout_secs is out of range, got {}", secs))
                })
            })
            .transpose()
    }

    pub fn validate(&self) -> Result<()> {
        self.check().map_err(|e| {
            engine_error!("seascape::SceneConfig", "Scene '{}' is invalid: {}", self.name, e);
            e
        })
    }

    fn check(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ConfigError("scene name is empty".to_string()));
        }
        self.camera.validate()?;
        if !(self.frame.surface_step.is_finite() && self.frame.surface_step >= 0.0) {
            return Err(Error::ConfigError(format!(
                "surface_step must be a non-negative number, got {}",
                self.frame.surface_step
            )));
        }
        if let Some(timeout) = self.load_timeout_secs {
            if !(timeout.is_finite() && timeout > 0.0) {
                return Err(Error::ConfigError(format!(
                    "load_timeout_secs must be positive, got {}",
                    timeout
                )));
            }
        }
        self.load_timeout()?;
        for descriptor in &self.assets {
            descriptor
                .validate()
                .map_err(|e| Error::ConfigError(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
