/// AnimationBinding: per-node animation state driven by the frame driver.

use crate::scene::{NodeKey, SceneGraph};
use super::mixer::ClipMixer;
use super::motion::Motion;

#[derive(Debug, Clone)]
pub struct AnimationBinding {
    node: NodeKey,
    mixer: Option<ClipMixer>,
    motions: Vec<Motion>,
}

impl AnimationBinding {
    pub fn new(node: NodeKey, mixer: Option<ClipMixer>, motions: Vec<Motion>) -> Self {
        Self { node, mixer, motions }
    }

    pub fn node(&self) -> NodeKey {
        self.node
    }

    pub fn mixer(&self) -> Option<&ClipMixer> {
        self.mixer.as_ref()
    }

    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Advance motions and clips by one tick.
    ///
    /// Returns false once the bound node is gone from the scene; the caller
    /// drops the binding.
    pub fn advance(&mut self, elapsed: f32, scene: &mut SceneGraph) -> bool {
        if !scene.contains(self.node) {
            return false;
        }
        if !self.motions.is_empty() {
            let motions = &self.motions;
            scene.update_transform(self.node, |transform| {
                for motion in motions {
                    motion.apply(transform, elapsed);
                }
            });
        }
        if let Some(mixer) = &mut self.mixer {
            mixer.update(elapsed);
            scene.set_pose(self.node, mixer.sample());
        }
        true
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
