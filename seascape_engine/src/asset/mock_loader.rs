/// Manual AssetLoader for unit tests (no I/O)
///
/// Requests are parked until the test resolves them, in any order. The
/// loader is a cheap handle: clone it before handing it to the pipeline and
/// keep the clone to drive completions.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use super::loader::{AssetLoader, CompletionSender};
#[cfg(test)]
use super::visual::VisualAsset;

#[cfg(test)]
#[derive(Default)]
struct ManualLoaderState {
    pending: Vec<(String, CompletionSender)>,
    requested: Vec<String>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualLoader {
    state: Rc<RefCell<ManualLoaderState>>,
}

#[cfg(test)]
impl ManualLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every source requested so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.state.borrow().requested.clone()
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Complete the oldest pending request for `source`.
    pub fn resolve(&self, source: &str, outcome: Result<VisualAsset>) -> bool {
        let mut state = self.state.borrow_mut();
        match state.pending.iter().position(|(s, _)| s == source) {
            Some(index) => {
                let (_, completion) = state.pending.remove(index);
                completion.complete(outcome);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
impl AssetLoader for ManualLoader {
    fn request(&mut self, source: &str, completion: CompletionSender) {
        let mut state = self.state.borrow_mut();
        state.requested.push(source.to_string());
        state.pending.push((source.to_string(), completion));
    }
}
