/// FrameDriver: the single per-frame update for every animated node.
///
/// Each tick advances all bindings, advances the water phase by a fixed
/// step, then asks the renderer for exactly one redraw. Bindings whose node
/// was despawned are dropped during the tick that notices it.

use slotmap::{new_key_type, SlotMap};
use crate::animation::AnimationBinding;
use crate::context::SceneContext;
use crate::error::Result;
use crate::renderer::{Frame, Renderer};
use crate::{engine_debug, engine_error, engine_trace, engine_warn};

/// Water phase step per tick
pub const DEFAULT_SURFACE_STEP: f32 = 1.0 / 60.0;

new_key_type! {
    /// Stable key for a binding registered with a FrameDriver.
    pub struct BindingKey;
}

#[derive(Debug)]
pub struct FrameDriver {
    bindings: SlotMap<BindingKey, AnimationBinding>,
    surface_step: f32,
    frame_index: u64,
    stopped: bool,
}

impl FrameDriver {
    pub fn new(surface_step: f32) -> Self {
        Self {
            bindings: SlotMap::with_key(),
            surface_step,
            frame_index: 0,
            stopped: false,
        }
    }

    /// Add a binding. Returns None once the driver is stopped.
    pub fn register(&mut self, binding: AnimationBinding) -> Option<BindingKey> {
        if self.stopped {
            engine_warn!("seascape::FrameDriver", "Binding rejected: driver is stopped");
            return None;
        }
        Some(self.bindings.insert(binding))
    }

    pub fn unregister(&mut self, key: BindingKey) -> Option<AnimationBinding> {
        self.bindings.remove(key)
    }

    pub fn binding(&self, key: BindingKey) -> Option<&AnimationBinding> {
        self.bindings.get(key)
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Ticks rendered so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn surface_step(&self) -> f32 {
        self.surface_step
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Stop driving. Later ticks do nothing and bindings are released.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.bindings.clear();
            engine_debug!("seascape::FrameDriver", "Stopped after {} frames", self.frame_index);
        }
    }

    /// Advance the scene by one tick and redraw.
    ///
    /// `elapsed` may vary between ticks; negative or non-finite values are
    /// treated as zero.
    pub fn tick(
        &mut self,
        elapsed: f32,
        ctx: &mut SceneContext,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        if self.stopped {
            return Ok(());
        }
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

        let scene = &mut ctx.scene;
        let before = self.bindings.len();
        self.bindings.retain(|_, binding| binding.advance(elapsed, scene));
        let dropped = before - self.bindings.len();
        if dropped > 0 {
            engine_debug!("seascape::FrameDriver", "Dropped {} bindings of despawned nodes", dropped);
        }

        ctx.environment.water_mut().advance(self.surface_step);

        let new_nodes = ctx.scene.take_new_nodes();
        let dirty_nodes = ctx.scene.take_dirty_transforms();
        let frame = Frame {
            index: self.frame_index,
            elapsed,
            scene: &ctx.scene,
            new_nodes: &new_nodes,
            dirty_nodes: &dirty_nodes,
            camera: &ctx.camera,
            environment: &ctx.environment,
            viewport: &ctx.viewport,
            binding_count: self.bindings.len(),
        };
        self.frame_index += 1;

        engine_trace!(
            "seascape::FrameDriver",
            "Frame {}: {} bindings, {} dirty nodes",
            frame.index,
            frame.binding_count,
            dirty_nodes.len()
        );

        renderer.render(&frame).map_err(|err| {
            engine_error!("seascape::FrameDriver", "Render failed on frame {}: {}", frame.index, err);
            err
        })
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_STEP)
    }
}

#[cfg(test)]
#[path = "frame_driver_tests.rs"]
mod tests;
