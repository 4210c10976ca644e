//! Load gate: tracks gated placements and reveals the scene when all finish.

mod load_gate;

pub use load_gate::LoadGate;
