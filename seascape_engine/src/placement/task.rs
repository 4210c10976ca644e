/// PlacementTask: one attempt to realise an AssetDescriptor.

use slotmap::new_key_type;
use crate::asset::AssetDescriptor;
use crate::error::Error;
use crate::scene::NodeKey;

new_key_type! {
    /// Stable key for a placement task owned by an AssetPipeline.
    pub struct TaskKey;
}

#[derive(Debug, Clone)]
pub enum TaskStatus {
    Pending,
    /// Nodes inserted for this placement, one per instance
    Loaded { nodes: Vec<NodeKey> },
    Failed(Error),
}

impl TaskStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskStatus::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, TaskStatus::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TaskStatus::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct PlacementTask {
    descriptor: AssetDescriptor,
    status: TaskStatus,
    /// Seconds spent pending, measured in pipeline pumps
    waited: f32,
}

impl PlacementTask {
    pub(crate) fn new(descriptor: AssetDescriptor) -> Self {
        Self {
            descriptor,
            status: TaskStatus::Pending,
            waited: 0.0,
        }
    }

    pub fn descriptor(&self) -> &AssetDescriptor {
        &self.descriptor
    }

    pub fn status(&self) -> &TaskStatus {
        &self.status
    }

    pub fn waited(&self) -> f32 {
        self.waited
    }

    /// Node keys of a loaded placement (empty otherwise).
    pub fn nodes(&self) -> &[NodeKey] {
        match &self.status {
            TaskStatus::Loaded { nodes } => nodes,
            _ => &[],
        }
    }

    pub(crate) fn add_wait(&mut self, elapsed: f32) -> f32 {
        self.waited += elapsed;
        self.waited
    }

    /// Move to a terminal status. Only the first call from Pending counts.
    pub(crate) fn finish(&mut self, status: TaskStatus) -> bool {
        if !self.status.is_pending() || status.is_pending() {
            return false;
        }
        self.status = status;
        true
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
