/// FileAssetLoader: loads assets from disk on the rayon pool.
///
/// Sources are resolved against an asset root and dispatched to a decoder by
/// file extension. Two built-in sources need no file:
///
/// - `builtin:box`  : unit cube
/// - `builtin:plane`: unit quad
///
/// Remote sources (`http://`, `https://`) are rejected as unsupported.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::error::{Error, Result};
use crate::{engine_debug, engine_warn};
use super::decoder::AssetDecoder;
use super::gltf_decoder::GltfDecoder;
use super::loader::{AssetLoader, CompletionSender};
use super::visual::VisualAsset;

pub const BUILTIN_PREFIX: &str = "builtin:";

/// Visual for a `builtin:` source.
pub fn builtin_visual(source: &str) -> Option<Result<VisualAsset>> {
    let name = source.strip_prefix(BUILTIN_PREFIX)?;
    Some(match name {
        "box" | "plane" => Ok(VisualAsset::new(source, 1, 1)),
        other => Err(Error::UnsupportedFormat(format!("unknown builtin primitive '{}'", other))),
    })
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub struct FileAssetLoader {
    root: PathBuf,
    decoders: Vec<Arc<dyn AssetDecoder>>,
}

impl FileAssetLoader {
    /// Loader rooted at `root` with the glTF decoder registered.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut loader = Self::without_decoders(root);
        loader.register_decoder(GltfDecoder::new());
        loader
    }

    pub fn without_decoders(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            decoders: Vec::new(),
        }
    }

    /// Register a decoder. Later registrations win for shared extensions.
    pub fn register_decoder(&mut self, decoder: impl AssetDecoder + 'static) {
        self.decoders.insert(0, Arc::new(decoder));
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute sources are kept, relative ones are joined to the root.
    pub fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn decoder_for(&self, path: &Path) -> Option<Arc<dyn AssetDecoder>> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.decoders
            .iter()
            .find(|decoder| decoder.extensions().iter().any(|ext| *ext == extension))
            .cloned()
    }
}

impl AssetLoader for FileAssetLoader {
    fn request(&mut self, source: &str, completion: CompletionSender) {
        if let Some(outcome) = builtin_visual(source) {
            completion.complete(outcome);
            return;
        }
        if is_remote(source) {
            completion.complete(Err(Error::UnsupportedFormat(format!(
                "remote source '{}' is not supported",
                source
            ))));
            return;
        }

        let path = self.resolve(source);
        let Some(decoder) = self.decoder_for(&path) else {
            engine_warn!("seascape::FileAssetLoader", "No decoder for '{}'", path.display());
            completion.complete(Err(Error::UnsupportedFormat(format!(
                "no decoder for '{}'",
                path.display()
            ))));
            return;
        };

        engine_debug!("seascape::FileAssetLoader", "Loading '{}'", path.display());
        rayon::spawn(move || {
            let outcome = if path.is_file() {
                decoder.decode(&path)
            } else {
                Err(Error::LoadFailed(format!("'{}' does not exist", path.display())))
            };
            completion.complete(outcome);
        });
    }
}

#[cfg(test)]
#[path = "file_loader_tests.rs"]
mod tests;
