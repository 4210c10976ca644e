/// ClipMixer: plays every clip of an asset on a loop.
///
/// Each clip keeps its own local time. Sampling starts from the identity
/// pose and applies clips in order, so a later clip overrides a pose
/// component an earlier clip also drives.

use std::sync::Arc;
use crate::scene::Pose;
use super::clip::AnimationClip;

/// Playback state of one clip within a mixer.
#[derive(Debug, Clone)]
pub struct ClipAction {
    clip: Arc<AnimationClip>,
    time: f32,
}

impl ClipAction {
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Local time within [0, duration)
    pub fn time(&self) -> f32 {
        self.time
    }

    fn advance(&mut self, delta: f32) {
        let duration = self.clip.duration();
        if duration > 0.0 {
            self.time = (self.time + delta).rem_euclid(duration);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClipMixer {
    actions: Vec<ClipAction>,
    time_scale: f32,
}

impl ClipMixer {
    /// Create a mixer with every clip playing from time zero.
    pub fn play_all(clips: &[Arc<AnimationClip>]) -> Self {
        Self {
            actions: clips
                .iter()
                .map(|clip| ClipAction { clip: Arc::clone(clip), time: 0.0 })
                .collect(),
            time_scale: 1.0,
        }
    }

    /// Builder: playback speed multiplier (negative values play backwards)
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn actions(&self) -> &[ClipAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Advance all actions by `delta` seconds (scaled by time_scale).
    pub fn update(&mut self, delta: f32) {
        let scaled = delta * self.time_scale;
        for action in &mut self.actions {
            action.advance(scaled);
        }
    }

    /// Current blended root pose.
    pub fn sample(&self) -> Pose {
        let mut pose = Pose::IDENTITY;
        for action in &self.actions {
            action.clip.sample_into(action.time, &mut pose);
        }
        pose
    }
}

#[cfg(test)]
#[path = "mixer_tests.rs"]
mod tests;
