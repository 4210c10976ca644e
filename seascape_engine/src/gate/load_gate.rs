/// LoadGate: reveals the scene once every gated placement has finished.
///
/// The gate counts terminal placements, successful or not, so a failed load
/// can never keep the scene hidden. It opens exactly once.

use crate::error::{Error, Result};
use crate::{engine_error, engine_info, engine_warn};

type GateCallback = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct LoadGate {
    expected: Option<u32>,
    completed: u32,
    /// Notifications received before `register`
    early: u32,
    open: bool,
    callbacks: Vec<GateCallback>,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare how many gated placements to wait for.
    ///
    /// Early notifications are applied immediately; `expected == 0` opens
    /// the gate on the spot. Registering twice is an error.
    pub fn register(&mut self, expected: u32) -> Result<()> {
        if let Some(previous) = self.expected {
            engine_error!(
                "seascape::LoadGate",
                "Gate already registered for {} placements (got {})",
                previous,
                expected
            );
            return Err(Error::InvalidResource(format!(
                "load gate already registered for {} placements",
                previous
            )));
        }

        self.expected = Some(expected);
        if self.early > expected {
            engine_warn!(
                "seascape::LoadGate",
                "{} notifications arrived before registering {} placements; extras ignored",
                self.early,
                expected
            );
        }
        self.completed = self.early.min(expected);
        self.early = 0;

        if self.completed == expected {
            self.open();
        }
        Ok(())
    }

    /// Record one gated placement reaching a terminal state.
    pub fn notify_complete(&mut self) {
        let Some(expected) = self.expected else {
            self.early += 1;
            return;
        };
        if self.open {
            engine_warn!("seascape::LoadGate", "Completion notified after gate opened; ignored");
            return;
        }
        self.completed += 1;
        if self.completed == expected {
            self.open();
        }
    }

    /// Run `callback` once the gate opens (immediately if already open).
    pub fn on_all_complete(&mut self, callback: impl FnOnce() + 'static) {
        if self.open {
            callback();
        } else {
            self.callbacks.push(Box::new(callback));
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_registered(&self) -> bool {
        self.expected.is_some()
    }

    pub fn expected(&self) -> Option<u32> {
        self.expected
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    fn open(&mut self) {
        self.open = true;
        engine_info!(
            "seascape::LoadGate",
            "All {} gated placements complete, gate open",
            self.completed
        );
        for callback in std::mem::take(&mut self.callbacks) {
            callback();
        }
    }
}

impl std::fmt::Debug for LoadGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadGate")
            .field("expected", &self.expected)
            .field("completed", &self.completed)
            .field("early", &self.early)
            .field("open", &self.open)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "load_gate_tests.rs"]
mod tests;
