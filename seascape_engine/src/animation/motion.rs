//! Procedural motions applied to a node's placement transform each tick.
//!
//! A motion either scales with elapsed time (`Rate::PerSecond`) or moves by a
//! constant amount per tick (`Rate::PerTick`), which keeps the frame-locked
//! behaviour of the classic scene scripts available where it is wanted.

use std::f32::consts::TAU;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::scene::{Axis, Transform};

/// How a motion's step is derived from a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rate {
    /// Units per second, multiplied by elapsed time
    PerSecond(f32),
    /// Constant units per tick, elapsed time ignored
    PerTick(f32),
}

impl Rate {
    /// Step to apply for a tick of `elapsed` seconds.
    pub fn step(self, elapsed: f32) -> f32 {
        match self {
            Rate::PerSecond(v) => v * elapsed,
            Rate::PerTick(v) => v,
        }
    }

    pub fn value(self) -> f32 {
        match self {
            Rate::PerSecond(v) | Rate::PerTick(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    /// Continuous rotation about an axis (radians)
    Spin { axis: Axis, rate: Rate },
    /// Translation along an axis, wrapping to the opposite bound once crossed
    Drift { axis: Axis, rate: Rate, min: f32, max: f32 },
}

impl Motion {
    /// Advance `transform` by one tick.
    pub fn apply(&self, transform: &mut Transform, elapsed: f32) {
        match *self {
            Motion::Spin { axis, rate } => {
                let angle = &mut transform.rotation[axis.index()];
                *angle += rate.step(elapsed);
                if angle.abs() > TAU {
                    *angle %= TAU;
                }
            }
            Motion::Drift { axis, rate, min, max } => {
                let step = rate.step(elapsed);
                let value = &mut transform.position[axis.index()];
                *value += step;
                if step > 0.0 && *value > max {
                    *value = min;
                } else if step < 0.0 && *value < min {
                    *value = max;
                }
            }
        }
    }

    /// Reject non-finite rates and empty drift ranges.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Motion::Spin { rate, .. } => {
                if !rate.value().is_finite() {
                    return Err(Error::ConfigError("spin rate must be finite".to_string()));
                }
            }
            Motion::Drift { rate, min, max, .. } => {
                if !rate.value().is_finite() {
                    return Err(Error::ConfigError("drift rate must be finite".to_string()));
                }
                if !(min.is_finite() && max.is_finite() && min < max) {
                    return Err(Error::ConfigError(format!(
                        "drift bounds must satisfy min < max (got {} .. {})",
                        min, max
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "motion_tests.rs"]
mod tests;
