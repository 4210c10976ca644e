//! Scene module
//!
//! Provides the node arena (SceneGraph), node transforms, and animation poses.

mod scene_graph;
mod transform;

pub use scene_graph::{NodeFlags, NodeKey, SceneGraph, SceneNode};
pub use transform::{Axis, Pose, Transform};
