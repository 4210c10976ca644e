//! Animation clips and keyframe tracks.
//!
//! Clips come out of asset decoding. Only tracks that target the asset's root
//! are kept as keyframes; the clip duration still covers every channel so
//! that looping matches the authored length.

use glam::{Quat, Vec3};
use crate::error::{Error, Result};
use crate::scene::Pose;

/// Which pose component a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackTarget {
    Translation,
    Rotation,
    Scale,
}

/// Keyframe values, one per keyframe time.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackValues {
    Vec3(Vec<Vec3>),
    Quat(Vec<Quat>),
}

impl TrackValues {
    fn len(&self) -> usize {
        match self {
            TrackValues::Vec3(v) => v.len(),
            TrackValues::Quat(v) => v.len(),
        }
    }
}

/// A linearly interpolated keyframe track.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    target: TrackTarget,
    times: Vec<f32>,
    values: TrackValues,
}

impl KeyframeTrack {
    /// Translation track
    pub fn translation(times: Vec<f32>, values: Vec<Vec3>) -> Result<Self> {
        Self::new(TrackTarget::Translation, times, TrackValues::Vec3(values))
    }

    /// Rotation track (values are normalized on construction)
    pub fn rotation(times: Vec<f32>, values: Vec<Quat>) -> Result<Self> {
        let values = values.into_iter().map(Quat::normalize).collect();
        Self::new(TrackTarget::Rotation, times, TrackValues::Quat(values))
    }

    /// Scale track
    pub fn scale(times: Vec<f32>, values: Vec<Vec3>) -> Result<Self> {
        Self::new(TrackTarget::Scale, times, TrackValues::Vec3(values))
    }

    fn new(target: TrackTarget, times: Vec<f32>, values: TrackValues) -> Result<Self> {
        if times.is_empty() {
            return Err(Error::DecodeFailed("keyframe track has no keyframes".to_string()));
        }
        if times.len() != values.len() {
            return Err(Error::DecodeFailed(format!(
                "keyframe track has {} times but {} values",
                times.len(),
                values.len()
            )));
        }
        if times.windows(2).any(|w| w[1] < w[0]) || times.iter().any(|t| !t.is_finite()) {
            return Err(Error::DecodeFailed("keyframe times must be finite and ascending".to_string()));
        }
        match (target, &values) {
            (TrackTarget::Rotation, TrackValues::Quat(_)) => {}
            (TrackTarget::Translation | TrackTarget::Scale, TrackValues::Vec3(_)) => {}
            _ => {
                return Err(Error::DecodeFailed(format!(
                    "{:?} track has mismatched value type",
                    target
                )))
            }
        }
        Ok(Self { target, times, values })
    }

    pub fn target(&self) -> TrackTarget {
        self.target
    }

    /// Time of the last keyframe
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Surrounding keyframe indices and blend factor for `time`.
    fn segment(&self, time: f32) -> (usize, usize, f32) {
        let last = self.times.len() - 1;
        if time <= self.times[0] {
            return (0, 0, 0.0);
        }
        if time >= self.times[last] {
            return (last, last, 0.0);
        }
        let upper = self.times.partition_point(|&t| t <= time);
        let lower = upper - 1;
        let span = self.times[upper] - self.times[lower];
        let alpha = if span > 0.0 { (time - self.times[lower]) / span } else { 0.0 };
        (lower, upper, alpha)
    }

    /// Write the sampled value at `time` into the matching pose component.
    pub fn sample_into(&self, time: f32, pose: &mut Pose) {
        let (a, b, alpha) = self.segment(time);
        match &self.values {
            TrackValues::Vec3(values) => {
                let value = values[a].lerp(values[b], alpha);
                match self.target {
                    TrackTarget::Translation => pose.translation = value,
                    TrackTarget::Scale => pose.scale = value,
                    TrackTarget::Rotation => {}
                }
            }
            TrackValues::Quat(values) => {
                pose.rotation = values[a].slerp(values[b], alpha);
            }
        }
    }
}

/// A named, time-parameterized pose sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    name: String,
    duration: f32,
    tracks: Vec<KeyframeTrack>,
}

impl AnimationClip {
    /// Create a clip with an explicit duration (negative values clamp to 0).
    pub fn new(name: impl Into<String>, duration: f32, tracks: Vec<KeyframeTrack>) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
            tracks,
        }
    }

    /// Create a clip whose duration is the latest keyframe across its tracks.
    pub fn from_tracks(name: impl Into<String>, tracks: Vec<KeyframeTrack>) -> Self {
        let duration = tracks.iter().map(KeyframeTrack::end_time).fold(0.0, f32::max);
        Self::new(name, duration, tracks)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn tracks(&self) -> &[KeyframeTrack] {
        &self.tracks
    }

    /// True for a clip that has a length but moves nothing on the root,
    /// such as a skeletal clip whose channels all target bones.
    pub fn is_static(&self) -> bool {
        self.tracks.is_empty() && self.duration > 0.0
    }

    /// Apply every track at `time` on top of `pose`.
    pub fn sample_into(&self, time: f32, pose: &mut Pose) {
        for track in &self.tracks {
            track.sample_into(time, pose);
        }
    }

    /// Sample the clip at `time` starting from the identity pose.
    pub fn sample(&self, time: f32) -> Pose {
        let mut pose = Pose::IDENTITY;
        self.sample_into(time, &mut pose);
        pose
    }
}

#[cfg(test)]
#[path = "clip_tests.rs"]
mod tests;
