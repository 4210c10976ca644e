//! Animation module
//!
//! Keyframe clips decoded from assets, the looping clip mixer, procedural
//! motions, and the per-node binding the frame driver advances.

mod binding;
mod clip;
mod mixer;
mod motion;

pub use binding::AnimationBinding;
pub use clip::{AnimationClip, KeyframeTrack, TrackTarget, TrackValues};
pub use mixer::{ClipAction, ClipMixer};
pub use motion::{Motion, Rate};
