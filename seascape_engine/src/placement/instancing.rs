/// Transform sampling for multi-instance placements.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::asset::{AssetDescriptor, InstancePlacement};
use crate::scene::Transform;

#[derive(Debug, Clone)]
pub struct InstanceSampler {
    rng: StdRng,
}

impl InstanceSampler {
    /// Deterministic sampler when `seed` is given, OS-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// One transform per instance of `descriptor`.
    pub fn transforms(&mut self, descriptor: &AssetDescriptor) -> Vec<Transform> {
        let count = descriptor.instance_count as usize;
        match descriptor.placement {
            InstancePlacement::Fixed => vec![descriptor.transform; count],
            InstancePlacement::Scatter { min, max } => (0..count)
                .map(|_| Transform {
                    position: self.sample_position(min, max),
                    ..descriptor.transform
                })
                .collect(),
        }
    }

    fn sample_position(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            self.sample_axis(min.x, max.x),
            self.sample_axis(min.y, max.y),
            self.sample_axis(min.z, max.z),
        )
    }

    fn sample_axis(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            min
        } else {
            self.rng.random_range(min..=max)
        }
    }
}

#[cfg(test)]
#[path = "instancing_tests.rs"]
mod tests;
