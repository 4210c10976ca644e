/// Renderer trait: the presentation seam.
///
/// The frame driver calls `render` exactly once per tick with a read-only
/// snapshot of the scene. Renderers upload new nodes and refresh dirty ones
/// from the change sets carried by the frame; the driver drains those sets
/// from the scene graph before each call.

use rustc_hash::FxHashSet;
use crate::camera::{Camera, Viewport};
use crate::environment::Environment;
use crate::error::Result;
use crate::scene::{NodeKey, SceneGraph};

/// Everything a renderer may read for one redraw.
pub struct Frame<'a> {
    /// Zero-based tick counter
    pub index: u64,
    /// Seconds since the previous tick, as supplied by the host
    pub elapsed: f32,
    pub scene: &'a SceneGraph,
    /// Nodes inserted since the previous frame
    pub new_nodes: &'a FxHashSet<NodeKey>,
    /// Nodes whose world matrix changed since the previous frame
    pub dirty_nodes: &'a FxHashSet<NodeKey>,
    pub camera: &'a Camera,
    pub environment: &'a Environment,
    pub viewport: &'a Viewport,
    /// Live animation bindings
    pub binding_count: usize,
}

pub trait Renderer {
    /// Draw one frame. Must not block on asset I/O.
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Presentation surface changed size.
    fn resize(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }
}
