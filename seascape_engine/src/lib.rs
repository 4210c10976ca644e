/*!
# Seascape Engine

Runtime core for declarative 3D scenes: asynchronous asset placement, a
single frame driver for every animated node, and a load gate that reveals the
scene once all gated assets have finished loading.

## Architecture

- **SceneApp**: owns one scene (context, pipeline, driver) and runs host frames
- **AssetPipeline**: non-blocking `place(descriptor)` over an `AssetLoader`
- **FrameDriver**: advances clip mixers and procedural motions, then redraws
- **LoadGate**: counts gated placements and opens exactly once
- **Renderer**: trait renderers implement to draw a `Frame`

Nothing here owns a window or a GPU device; hosts plug both in through the
`Renderer` trait and by calling `SceneApp::frame`.
*/

// Internal modules
mod app;
mod config;
mod context;
mod engine;
mod error;
pub mod animation;
pub mod asset;
pub mod camera;
pub mod environment;
pub mod frame;
pub mod gate;
pub mod log;
pub mod placement;
pub mod renderer;
pub mod scene;

pub use glam;

// Main seascape namespace module
pub mod seascape {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Scene runtime
    pub use crate::app::SceneApp;
    pub use crate::config::{FrameSettings, SceneConfig};
    pub use crate::context::SceneContext;
    pub use crate::renderer::{Frame, Renderer};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    pub mod animation {
        pub use crate::animation::*;
    }

    pub mod asset {
        pub use crate::asset::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod environment {
        pub use crate::environment::*;
    }

    pub mod frame {
        pub use crate::frame::*;
    }

    pub mod gate {
        pub use crate::gate::*;
    }

    pub mod placement {
        pub use crate::placement::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }
}
