//! Renderer module: the trait renderers implement and the frame they receive.

mod renderer;

#[cfg(test)]
pub(crate) mod mock_renderer;

pub use renderer::{Frame, Renderer};
