/// FrameStatsRenderer: a renderer that draws nothing and reports stats.
///
/// Once per second it logs frames per second, node count, live bindings,
/// and whether the scene has been revealed yet.

use std::time::Instant;
use seascape_engine::seascape::{Frame, Renderer, Result};
use seascape_engine::{engine_debug, engine_info};

#[derive(Debug, Default)]
pub struct FrameStatsRenderer {
    window_start: Option<Instant>,
    frames_in_window: u32,
    total_frames: u64,
    uploaded_nodes: usize,
    updated_nodes: usize,
    last_fps: Option<f32>,
}

impl FrameStatsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Nodes seen in a frame's new-node set, summed over all frames
    pub fn uploaded_nodes(&self) -> usize {
        self.uploaded_nodes
    }

    pub fn updated_nodes(&self) -> usize {
        self.updated_nodes
    }

    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }
}

impl Renderer for FrameStatsRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.total_frames += 1;
        self.frames_in_window += 1;
        self.uploaded_nodes += frame.new_nodes.len();
        self.updated_nodes += frame.dirty_nodes.len();

        let now = Instant::now();
        let start = *self.window_start.get_or_insert(now);
        let span = now.duration_since(start).as_secs_f32();
        if span >= 1.0 {
            let fps = self.frames_in_window as f32 / span;
            self.last_fps = Some(fps);
            engine_info!(
                "seascape::Stats",
                "{:.1} fps | {} nodes | {} bindings | water t={:.2} | {}",
                fps,
                frame.scene.len(),
                frame.binding_count,
                frame.environment.water().time,
                if frame.viewport.is_visible() { "visible" } else { "loading" }
            );
            self.window_start = Some(now);
            self.frames_in_window = 0;
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        engine_debug!("seascape::Stats", "Surface resized to {}x{}", width, height);
        Ok(())
    }
}

#[cfg(test)]
#[path = "stats_renderer_tests.rs"]
mod tests;
