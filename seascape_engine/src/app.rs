/// SceneApp: owns one running scene.
///
/// Bootstrapping validates the config, registers the load gate with the
/// number of gated assets, and places every descriptor. Each host frame then
/// pumps the pipeline, reveals the viewport once the gate has opened, and
/// ticks the frame driver.

use std::cell::Cell;
use std::rc::Rc;
use crate::asset::{AssetDescriptor, AssetLoader};
use crate::config::SceneConfig;
use crate::context::SceneContext;
use crate::environment::Environment;
use crate::error::Result;
use crate::frame::FrameDriver;
use crate::placement::{gated_count, place_all, AssetPipeline, TaskKey};
use crate::renderer::Renderer;
use crate::scene::NodeKey;
use crate::{engine_debug, engine_info};

pub struct SceneApp {
    name: String,
    context: SceneContext,
    pipeline: AssetPipeline,
    driver: FrameDriver,
    tasks: Vec<TaskKey>,
    /// Set by the gate callback; consumed on the next frame
    gate_opened: Rc<Cell<bool>>,
}

impl SceneApp {
    pub fn bootstrap(
        config: &SceneConfig,
        loader: impl AssetLoader + 'static,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        config.validate()?;

        let environment = Environment::new(config.sky, config.water);
        let mut context = SceneContext::new(config.camera, environment, width, height);

        let mut pipeline = AssetPipeline::new(loader).with_load_timeout(config.load_timeout()?);
        if let Some(seed) = config.seed {
            pipeline = pipeline.with_seed(seed);
        }
        let driver = FrameDriver::new(config.frame.surface_step);

        let gate_opened = Rc::new(Cell::new(false));
        let flag = Rc::clone(&gate_opened);
        context.gate.on_all_complete(move || flag.set(true));
        context.gate.register(gated_count(&config.assets)?)?;

        let tasks = place_all(&mut pipeline, config.assets.iter().cloned(), &mut context.gate);

        engine_info!(
            "seascape::SceneApp",
            "Scene '{}' bootstrapped: {} placements ({} gated)",
            config.name,
            tasks.len(),
            context.gate.expected().unwrap_or(0)
        );

        Ok(Self {
            name: config.name.clone(),
            context,
            pipeline,
            driver,
            tasks,
            gate_opened,
        })
    }

    /// One host frame: apply loads, reveal when ready, advance, redraw.
    pub fn frame(&mut self, elapsed: f32, renderer: &mut dyn Renderer) -> Result<()> {
        self.pipeline.pump(elapsed, &mut self.context, &mut self.driver);

        if self.gate_opened.get() && self.context.viewport.reveal() {
            engine_info!("seascape::SceneApp", "Scene '{}' revealed", self.name);
        }

        self.driver.tick(elapsed, &mut self.context, renderer)
    }

    /// Surface resized. Zero-sized surfaces are ignored.
    pub fn resize(&mut self, width: u32, height: u32, renderer: &mut dyn Renderer) -> Result<()> {
        if !self.context.camera.resize(width, height) {
            engine_debug!("seascape::SceneApp", "Ignored resize to {}x{}", width, height);
            return Ok(());
        }
        self.context.viewport.resize(width, height);
        renderer.resize(width, height)
    }

    /// Place an extra asset after bootstrap.
    pub fn place(&mut self, descriptor: AssetDescriptor) -> TaskKey {
        let key = self.pipeline.place(descriptor, &mut self.context.gate);
        self.tasks.push(key);
        key
    }

    pub fn cancel(&mut self, task: TaskKey) -> bool {
        self.pipeline.cancel(task, &mut self.context.gate)
    }

    /// Remove a node; its animation binding is dropped on the next frame.
    pub fn despawn(&mut self, node: NodeKey) -> bool {
        self.context.scene.despawn(node).is_some()
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.context
    }

    pub fn pipeline(&self) -> &AssetPipeline {
        &self.pipeline
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    /// Task keys in placement order
    pub fn tasks(&self) -> &[TaskKey] {
        &self.tasks
    }

    pub fn is_revealed(&self) -> bool {
        self.context.viewport.is_visible()
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
