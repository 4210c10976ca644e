/// AssetDescriptor: declarative description of one asset placement.
///
/// Descriptors are authored in scene files and never mutated by the runtime.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::animation::Motion;
use crate::error::{Error, Result};
use crate::scene::Transform;

/// Where the clones of a multi-instance placement go.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstancePlacement {
    /// Every instance uses the declared transform
    #[default]
    Fixed,
    /// Positions sampled uniformly inside an axis-aligned box (inclusive).
    /// Rotation and scale come from the declared transform.
    Scatter { min: Vec3, max: Vec3 },
}

fn default_instance_count() -> u32 {
    1
}

fn default_gated() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub transform: Transform,
    /// Play the asset's embedded clips
    #[serde(default)]
    pub animated: bool,
    #[serde(default = "default_instance_count")]
    pub instance_count: u32,
    #[serde(default)]
    pub placement: InstancePlacement,
    #[serde(default)]
    pub motions: Vec<Motion>,
    /// Counts toward the load gate
    #[serde(default = "default_gated")]
    pub gated: bool,
}

impl AssetDescriptor {
    /// Single, gated, static instance at the origin.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            transform: Transform::IDENTITY,
            animated: false,
            instance_count: default_instance_count(),
            placement: InstancePlacement::Fixed,
            motions: Vec::new(),
            gated: default_gated(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }

    pub fn with_instances(mut self, count: u32, placement: InstancePlacement) -> Self {
        self.instance_count = count;
        self.placement = placement;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motions.push(motion);
        self
    }

    pub fn ungated(mut self) -> Self {
        self.gated = false;
        self
    }

    /// Check the descriptor can be realised.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| Err(Error::InvalidResource(format!("asset '{}': {}", self.name, reason)));

        if self.source.trim().is_empty() {
            return fail("source is empty".to_string());
        }
        if self.instance_count == 0 {
            return fail("instance_count must be at least 1".to_string());
        }
        if !self.transform.is_finite() {
            return fail("transform has non-finite components".to_string());
        }
        if let InstancePlacement::Scatter { min, max } = self.placement {
            if !(min.is_finite() && max.is_finite()) || min.cmpgt(max).any() {
                return fail(format!("scatter bounds {:?} .. {:?} are not ordered", min, max));
            }
        }
        for motion in &self.motions {
            if let Err(err) = motion.validate() {
                return fail(err.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
