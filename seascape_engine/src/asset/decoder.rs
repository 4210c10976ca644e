/// AssetDecoder: turns a file on disk into a VisualAsset.

use std::path::Path;
use crate::error::Result;
use super::visual::VisualAsset;

/// File format decoder, selected by extension.
///
/// Decoders run on worker threads and must be `Send + Sync`.
pub trait AssetDecoder: Send + Sync {
    /// Lowercase file extensions this decoder handles (without the dot)
    fn extensions(&self) -> &[&'static str];

    fn decode(&self, path: &Path) -> Result<VisualAsset>;
}
