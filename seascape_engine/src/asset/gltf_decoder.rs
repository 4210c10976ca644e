/// glTF 2.0 decoder (`.gltf` / `.glb`).
///
/// Counts nodes and meshes, and converts every animation into an
/// AnimationClip. The clip duration spans all channels; only channels that
/// target the scene's root node become keyframe tracks, since a placed node
/// carries a single animation pose.

use std::path::Path;
use glam::{Quat, Vec3};
use gltf::animation::util::ReadOutputs;
use gltf::animation::Interpolation;
use crate::animation::{AnimationClip, KeyframeTrack};
use crate::error::{Error, Result};
use crate::engine_debug;
use super::decoder::AssetDecoder;
use super::visual::VisualAsset;

#[derive(Debug, Default, Clone, Copy)]
pub struct GltfDecoder;

impl GltfDecoder {
    pub fn new() -> Self {
        Self
    }
}

/// Keep the keyframe values of a cubic spline output (in-tangent, value,
/// out-tangent triplets); linear and step outputs pass through.
fn keyframe_values<T: Copy>(values: Vec<T>, interpolation: Interpolation) -> Vec<T> {
    match interpolation {
        Interpolation::CubicSpline => values.chunks_exact(3).map(|c| c[1]).collect(),
        _ => values,
    }
}

impl AssetDecoder for GltfDecoder {
    fn extensions(&self) -> &[&'static str] {
        &["gltf", "glb"]
    }

    fn decode(&self, path: &Path) -> Result<VisualAsset> {
        let display = path.display();
        let (document, buffers, _images) = gltf::import(path).map_err(|err| match err {
            gltf::Error::Io(io) => Error::LoadFailed(format!("{}: {}", display, io)),
            other => Error::DecodeFailed(format!("{}: {}", display, other)),
        })?;

        let root = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .and_then(|scene| scene.nodes().next())
            .map(|node| node.index());

        let mut clips = Vec::new();
        for (index, animation) in document.animations().enumerate() {
            let name = animation
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("clip_{}", index));
            let mut duration = 0.0f32;
            let mut tracks = Vec::new();

            for channel in animation.channels() {
                let reader = channel.reader(|b| buffers.get(b.index()).map(|data| data.0.as_slice()));
                let Some(inputs) = reader.read_inputs() else {
                    continue;
                };
                let times: Vec<f32> = inputs.collect();
                duration = times.iter().copied().fold(duration, f32::max);

                if Some(channel.target().node().index()) != root {
                    continue;
                }
                let interpolation = channel.sampler().interpolation();
                let track = match reader.read_outputs() {
                    Some(ReadOutputs::Translations(values)) => {
                        let values = keyframe_values(values.map(Vec3::from_array).collect(), interpolation);
                        KeyframeTrack::translation(times, values)?
                    }
                    Some(ReadOutputs::Rotations(values)) => {
                        let values = keyframe_values(values.into_f32().map(Quat::from_array).collect(), interpolation);
                        KeyframeTrack::rotation(times, values)?
                    }
                    Some(ReadOutputs::Scales(values)) => {
                        let values = keyframe_values(values.map(Vec3::from_array).collect(), interpolation);
                        KeyframeTrack::scale(times, values)?
                    }
                    // Morph weights have no counterpart in a node pose
                    _ => continue,
                };
                tracks.push(track);
            }

            let clip = AnimationClip::new(name, duration, tracks);
            if clip.is_static() {
                engine_debug!(
                    "seascape::GltfDecoder",
                    "Clip '{}' of '{}' lasts {:.2}s but no channel targets the root node; it will not move the placed node",
                    clip.name(),
                    display,
                    clip.duration()
                );
            }
            clips.push(clip);
        }

        engine_debug!(
            "seascape::GltfDecoder",
            "Decoded '{}': {} nodes, {} meshes, {} clips",
            display,
            document.nodes().count(),
            document.meshes().count(),
            clips.len()
        );

        Ok(VisualAsset::new(
            path.to_string_lossy(),
            document.nodes().count(),
            document.meshes().count(),
        )
        .with_clips(clips))
    }
}

#[cfg(test)]
#[path = "gltf_decoder_tests.rs"]
mod tests;
