//! Placement module
//!
//! Turns asset descriptors into scene nodes through asynchronous loads.

mod instancing;
mod pipeline;
mod task;

pub use instancing::InstanceSampler;
pub use pipeline::{gated_count, place_all, AssetPipeline};
pub use task::{PlacementTask, TaskKey, TaskStatus};
