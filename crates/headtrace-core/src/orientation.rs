//! Head orientation
//!
//! The rotation value attached to each trace sample, carried as a unit
//! quaternion.

use glam::{EulerRot, Quat};
use std::fmt;

/// Absolute head orientation as a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// The underlying rotation.
    pub quaternion: Quat,
}

impl Orientation {
    /// Wrap a quaternion.
    pub fn new(quaternion: Quat) -> Self {
        Self { quaternion }
    }

    /// Orientation from yaw, pitch, and roll in radians (applied in that
    /// order: yaw about Y, then pitch about X, then roll about Z).
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self {
            quaternion: Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            quaternion: Quat::IDENTITY,
        }
    }
}

impl fmt::Display for Orientation {
    /// Renders `"w x y z"` so a trace line stays a flat whitespace-separated
    /// record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.quaternion;
        write!(f, "{} {} {} {}", q.w, q.x, q.y, q.z)
    }
}
