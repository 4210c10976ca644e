/// Mock Renderer for unit tests (no GPU required)
///
/// Records a summary of every frame it is asked to draw so tests can check
/// what the frame driver handed over.

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::renderer::{Frame, Renderer};

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRecord {
    pub index: u64,
    pub elapsed: f32,
    pub node_count: usize,
    pub new_nodes: usize,
    pub dirty_nodes: usize,
    pub binding_count: usize,
    pub water_time: f32,
    pub visible: bool,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockRenderer {
    pub records: Arc<Mutex<Vec<RenderRecord>>>,
    pub resizes: Arc<Mutex<Vec<(u32, u32)>>>,
    pub fail: bool,
}

#[cfg(test)]
impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<RenderRecord> {
        self.records.lock().unwrap().last().cloned()
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.records.lock().unwrap().push(RenderRecord {
            index: frame.index,
            elapsed: frame.elapsed,
            node_count: frame.scene.len(),
            new_nodes: frame.new_nodes.len(),
            dirty_nodes: frame.dirty_nodes.len(),
            binding_count: frame.binding_count,
            water_time: frame.environment.water().time,
            visible: frame.viewport.is_visible(),
        });
        if self.fail {
            return Err(Error::BackendError("mock render failure".to_string()));
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.resizes.lock().unwrap().push((width, height));
        Ok(())
    }
}
