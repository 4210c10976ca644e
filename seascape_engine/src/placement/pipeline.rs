/// AssetPipeline: non-blocking asset placement.
///
/// `place` records a Pending task and hands the source to the loader. Loaders
/// report through a channel; `pump` (called once per frame on the owning
/// thread) applies completions, enforces load timeouts, inserts nodes, and
/// registers animation bindings.
///
/// Every gated task notifies the load gate exactly once, on its single
/// terminal transition, whatever the outcome.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use slotmap::SlotMap;
use crate::animation::{AnimationBinding, ClipMixer};
use crate::asset::{AssetDescriptor, AssetLoader, CompletionSender, LoadCompletion, VisualAsset};
use crate::context::SceneContext;
use crate::error::{Error, Result};
use crate::frame::FrameDriver;
use crate::gate::LoadGate;
use crate::scene::{NodeFlags, SceneNode};
use crate::{engine_debug, engine_error, engine_info};
use super::instancing::InstanceSampler;
use super::task::{PlacementTask, TaskKey, TaskStatus};

pub struct AssetPipeline {
    loader: Box<dyn AssetLoader>,
    tasks: SlotMap<TaskKey, PlacementTask>,
    sender: Sender<LoadCompletion>,
    receiver: Receiver<LoadCompletion>,
    sampler: InstanceSampler,
    /// Bounded wait per load, in seconds
    load_timeout: Option<f32>,
}

impl AssetPipeline {
    pub fn new(loader: impl AssetLoader + 'static) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            loader: Box::new(loader),
            tasks: SlotMap::with_key(),
            sender,
            receiver,
            sampler: InstanceSampler::new(None),
            load_timeout: None,
        }
    }

    /// Builder: seed instance scattering for reproducible layouts
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sampler = InstanceSampler::new(Some(seed));
        self
    }

    /// Builder: fail loads still pending after `timeout` of pumped time
    pub fn with_load_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.load_timeout = timeout.map(|t| t.as_secs_f32());
        self
    }

    /// Start placing `descriptor`. Never blocks.
    ///
    /// Invalid descriptors fail at once (and notify the gate if gated).
    pub fn place(&mut self, descriptor: AssetDescriptor, gate: &mut LoadGate) -> TaskKey {
        let validation = descriptor.validate();
        let source = descriptor.source.clone();
        let key = self.tasks.insert(PlacementTask::new(descriptor));

        if let Err(err) = validation {
            self.fail(key, err, gate);
            return key;
        }

        engine_debug!("seascape::AssetPipeline", "Requesting '{}'", source);
        self.loader.request(&source, CompletionSender::new(key, self.sender.clone()));
        key
    }

    /// Abort a pending placement. A later completion for it is discarded.
    pub fn cancel(&mut self, key: TaskKey, gate: &mut LoadGate) -> bool {
        let pending = self.tasks.get(key).is_some_and(|task| task.status().is_pending());
        if pending {
            let name = self.tasks[key].descriptor().name.clone();
            self.fail(key, Error::Cancelled(format!("placement of '{}' cancelled", name)), gate);
        }
        pending
    }

    /// Apply completions and expire overdue loads. Returns the number of
    /// tasks that reached a terminal state.
    pub fn pump(&mut self, elapsed: f32, ctx: &mut SceneContext, driver: &mut FrameDriver) -> usize {
        let mut settled = 0;

        while let Ok(LoadCompletion { task, outcome }) = self.receiver.try_recv() {
            let pending = self.tasks.get(task).is_some_and(|t| t.status().is_pending());
            if !pending {
                engine_debug!("seascape::AssetPipeline", "Discarded late completion for settled task");
                continue;
            }
            match outcome {
                Ok(visual) => self.instantiate(task, visual, ctx, driver),
                Err(err) => self.fail(task, err, &mut ctx.gate),
            }
            settled += 1;
        }

        if let Some(limit) = self.load_timeout {
            let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
            let expired: Vec<TaskKey> = self
                .tasks
                .iter_mut()
                .filter(|(_, task)| task.status().is_pending())
                .filter_map(|(key, task)| (task.add_wait(elapsed) >= limit).then_some(key))
                .collect();
            for key in expired {
                let source = self.tasks[key].descriptor().source.clone();
                self.fail(
                    key,
                    Error::TimedOut(format!("'{}' still loading after {:.1}s", source, limit)),
                    &mut ctx.gate,
                );
                settled += 1;
            }
        }

        settled
    }

    // ===== QUERIES =====

    pub fn task(&self, key: TaskKey) -> Option<&PlacementTask> {
        self.tasks.get(key)
    }

    pub fn status(&self, key: TaskKey) -> Option<&TaskStatus> {
        self.tasks.get(key).map(PlacementTask::status)
    }

    pub fn tasks(&self) -> impl Iterator<Item = (TaskKey, &PlacementTask)> {
        self.tasks.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|t| t.status().is_pending()).count()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    // ===== TERMINAL TRANSITIONS =====

    fn instantiate(
        &mut self,
        key: TaskKey,
        visual: VisualAsset,
        ctx: &mut SceneContext,
        driver: &mut FrameDriver,
    ) {
        let Self { tasks, sampler, .. } = self;
        let Some(task) = tasks.get_mut(key) else {
            return;
        };
        let descriptor = task.descriptor();

        let play_clips = descriptor.animated && visual.has_clips();
        if descriptor.animated && !visual.has_clips() {
            engine_info!(
                "seascape::AssetPipeline",
                "AnimationDataAbsent: '{}' is declared animated but '{}' has no clips",
                descriptor.name,
                descriptor.source
            );
        }
        let animate = play_clips || !descriptor.motions.is_empty();

        let mut flags = NodeFlags::empty();
        if descriptor.instance_count > 1 {
            flags |= NodeFlags::INSTANCED;
        }
        if animate {
            flags |= NodeFlags::ANIMATED;
        }

        let visual = Arc::new(visual);
        let nodes: Vec<_> = sampler
            .transforms(descriptor)
            .into_iter()
            .map(|transform| {
                let node = ctx.scene.insert(
                    SceneNode::with_asset(descriptor.name.clone(), transform, Arc::clone(&visual))
                        .with_flags(flags),
                );
                if animate {
                    let mixer = play_clips.then(|| ClipMixer::play_all(visual.clips()));
                    driver.register(AnimationBinding::new(node, mixer, descriptor.motions.clone()));
                }
                node
            })
            .collect();

        engine_info!(
            "seascape::AssetPipeline",
            "Placed '{}' ({} instance{})",
            descriptor.name,
            nodes.len(),
            if nodes.len() == 1 { "" } else { "s" }
        );

        let gated = descriptor.gated;
        if task.finish(TaskStatus::Loaded { nodes }) && gated {
            ctx.gate.notify_complete();
        }
    }

    fn fail(&mut self, key: TaskKey, error: Error, gate: &mut LoadGate) {
        let Some(task) = self.tasks.get_mut(key) else {
            return;
        };
        let name = task.descriptor().name.clone();
        let gated = task.descriptor().gated;
        if task.finish(TaskStatus::Failed(error.clone())) {
            let outcome = if error.is_load_failure() { "failed" } else { "rejected" };
            engine_error!("seascape::AssetPipeline", "Placement of '{}' {}: {}", name, outcome, error);
            if gated {
                gate.notify_complete();
            }
        }
    }
}

/// Place every descriptor, returning keys in declaration order.
pub fn place_all(
    pipeline: &mut AssetPipeline,
    descriptors: impl IntoIterator<Item = AssetDescriptor>,
    gate: &mut LoadGate,
) -> Vec<TaskKey> {
    descriptors
        .into_iter()
        .map(|descriptor| pipeline.place(descriptor, gate))
        .collect()
}

/// Number of gated descriptors, the count a gate should be registered with.
pub fn gated_count<'a>(descriptors: impl IntoIterator<Item = &'a AssetDescriptor>) -> Result<u32> {
    let count = descriptors.into_iter().filter(|d| d.gated).count();
    u32::try_from(count).map_err(|_| Error::ConfigError(format!("{} gated assets exceed the gate limit", count)))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
