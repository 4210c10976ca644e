/// AssetLoader: the seam between the placement pipeline and asset back ends.
///
/// A loader receives a source and a one-shot `CompletionSender`. It may
/// complete immediately or on a worker thread; the pipeline only learns the
/// outcome when it drains its completion channel. A request whose sender is
/// dropped unanswered completes as `LoadFailed`.

use std::sync::mpsc::Sender;
use crate::error::{Error, Result};
use crate::placement::TaskKey;
use super::visual::VisualAsset;

/// Outcome of one load, tagged with the task that requested it.
#[derive(Debug)]
pub struct LoadCompletion {
    pub task: TaskKey,
    pub outcome: Result<VisualAsset>,
}

/// One-shot reply handle for a load request.
///
/// Consumed by `complete`, so a loader cannot report twice for one request.
/// Dropping it unconsumed reports `LoadFailed`, so a task never stays
/// pending because its loader lost the request.
#[derive(Debug)]
pub struct CompletionSender {
    task: TaskKey,
    /// Taken on the first report
    sender: Option<Sender<LoadCompletion>>,
}

impl CompletionSender {
    pub fn new(task: TaskKey, sender: Sender<LoadCompletion>) -> Self {
        Self { task, sender: Some(sender) }
    }

    pub fn task(&self) -> TaskKey {
        self.task
    }

    /// Deliver the outcome. Returns false if the pipeline is gone.
    pub fn complete(mut self, outcome: Result<VisualAsset>) -> bool {
        self.send(outcome)
    }

    fn send(&mut self, outcome: Result<VisualAsset>) -> bool {
        match self.sender.take() {
            Some(sender) => sender.send(LoadCompletion { task: self.task, outcome }).is_ok(),
            None => false,
        }
    }
}

impl Drop for CompletionSender {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.send(Err(Error::LoadFailed("loader dropped the request".to_string())));
        }
    }
}

/// Asset back end trait
pub trait AssetLoader {
    /// Start loading `source`. Must not block on I/O.
    fn request(&mut self, source: &str, completion: CompletionSender);
}
