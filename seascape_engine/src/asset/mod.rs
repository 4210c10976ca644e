//! Asset module
//!
//! Descriptors, decoded visuals, and the loader/decoder back ends the
//! placement pipeline requests assets through.

mod decoder;
mod descriptor;
mod file_loader;
mod gltf_decoder;
mod loader;
mod visual;

#[cfg(test)]
pub(crate) mod mock_loader;

pub use decoder::AssetDecoder;
pub use descriptor::{AssetDescriptor, InstancePlacement};
pub use file_loader::{builtin_visual, FileAssetLoader, BUILTIN_PREFIX};
pub use gltf_decoder::GltfDecoder;
pub use loader::{AssetLoader, CompletionSender, LoadCompletion};
pub use visual::VisualAsset;
