//! Frame module: the central per-frame driver and the host-side clock.

mod clock;
mod frame_driver;

pub use clock::{FrameClock, DEFAULT_MAX_DELTA};
pub use frame_driver::{BindingKey, FrameDriver, DEFAULT_SURFACE_STEP};
