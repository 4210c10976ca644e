/// VisualAsset: a decoded, shareable visual.
///
/// One load produces one VisualAsset; every node placed from that load holds
/// an `Arc` to it. Geometry stays with the renderer; the runtime only keeps
/// what it needs for placement and animation.

use std::sync::Arc;
use crate::animation::AnimationClip;

#[derive(Debug, Clone)]
pub struct VisualAsset {
    source: String,
    node_count: usize,
    mesh_count: usize,
    clips: Vec<Arc<AnimationClip>>,
}

impl VisualAsset {
    pub fn new(source: impl Into<String>, node_count: usize, mesh_count: usize) -> Self {
        Self {
            source: source.into(),
            node_count,
            mesh_count,
            clips: Vec::new(),
        }
    }

    /// A visual with no geometry and no clips.
    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(source, 0, 0)
    }

    /// Builder: attach animation clips
    pub fn with_clips(mut self, clips: Vec<AnimationClip>) -> Self {
        self.clips = clips.into_iter().map(Arc::new).collect();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn mesh_count(&self) -> usize {
        self.mesh_count
    }

    pub fn clips(&self) -> &[Arc<AnimationClip>] {
        &self.clips
    }

    pub fn has_clips(&self) -> bool {
        !self.clips.is_empty()
    }
}
