//! Camera module: perspective camera and presentation viewport.

mod camera;
mod viewport;

pub use camera::{Camera, CameraSettings};
pub use viewport::Viewport;
