/// SceneContext: the state shared by the pipeline, the driver, and the host.
///
/// Owned by `SceneApp` and lent to each subsystem per call; nothing in the
/// crate holds scene state globally.

use crate::camera::{Camera, CameraSettings, Viewport};
use crate::environment::Environment;
use crate::gate::LoadGate;
use crate::scene::SceneGraph;

#[derive(Debug)]
pub struct SceneContext {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub environment: Environment,
    pub gate: LoadGate,
    pub viewport: Viewport,
}

impl SceneContext {
    /// Empty scene with a hidden viewport of `width` x `height`.
    pub fn new(camera: CameraSettings, environment: Environment, width: u32, height: u32) -> Self {
        Self {
            scene: SceneGraph::new(),
            camera: Camera::new(camera, width, height),
            environment,
            gate: LoadGate::new(),
            viewport: Viewport::new(width, height),
        }
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new(CameraSettings::default(), Environment::default(), 1280, 720)
    }
}
