//! Normallight - first-person orb dodging in a bounded volume
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (orientation, projection, orb pool, game state)
//! - `render`: Turns a simulated tick into 2D triangles for a graphics backend
//! - `config`: Static configuration with startup validation
//! - `runner`: Fixed-rate tick loop with input/frame collaborators
//! - `autopilot`: Built-in demo input source

pub mod autopilot;
pub mod config;
pub mod error;
pub mod render;
pub mod runner;
pub mod sim;

pub use config::{Boundary, OrbStyle, OrientationMode, SimConfig};
pub use error::ConfigError;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Game configuration constants (defaults for [`SimConfig`])
pub mod consts {
    use std::f32::consts::PI;

    /// Boundary volume extents (each axis)
    pub const BOUNDARY_LOW: f32 = -1000.0;
    pub const BOUNDARY_HIGH: f32 = 1000.0;

    /// Speed gained per second while accelerating
    pub const FORWARD_THRUSTER_POWER: f32 = 250.0;
    /// Turn rate in radians per second
    pub const ANGULAR_THRUSTER_POWER: f32 = 0.5;
    /// Fraction of speed lost per second when not accelerating
    pub const DECELERATION_RATE: f32 = 0.4;

    /// Orb pool capacity
    pub const MAX_OBJECTS: usize = 512;
    /// Rim segments for disc orbs / satellites for cluster orbs
    pub const POINTS_PER_OBJECT: usize = 16;
    /// Fixed tick interval
    pub const TICK_MILLIS: u64 = 10;

    /// Half field of view on each screen axis
    pub const VIEW_MAX_ANGLE: f32 = PI / 2.5;

    pub const MIN_VELOCITY: f32 = 10.0;
    pub const MAX_VELOCITY: f32 = 25.0;
    pub const OBJECT_MIN_RADIUS: f32 = 10.0;
    pub const OBJECT_MAX_RADIUS: f32 = 20.0;
}

/// A vector in spherical coordinates (physics convention)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarVector {
    /// Angle around the vertical (z) axis, in (-π, π]
    pub azimuth: f32,
    /// Angle from the positive z axis, in [0, π]
    pub inclination: f32,
    /// Length, never negative
    pub magnitude: f32,
}

impl PolarVector {
    pub const fn new(azimuth: f32, inclination: f32, magnitude: f32) -> Self {
        Self {
            azimuth,
            inclination,
            magnitude,
        }
    }
}

/// Convert spherical coordinates to cartesian
///
/// `x = m·sin(i)·cos(a)`, `y = m·sin(i)·sin(a)`, `z = m·cos(i)`
#[inline]
pub fn to_cartesian(azimuth: f32, inclination: f32, magnitude: f32) -> Vec3 {
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    Vec3::new(
        magnitude * sin_i * cos_a,
        magnitude * sin_i * sin_a,
        magnitude * cos_i,
    )
}

/// Convert a cartesian vector to spherical coordinates
///
/// The zero vector maps to all zeros; a vector on the z axis gets azimuth 0.
pub fn to_polar(v: Vec3) -> PolarVector {
    let magnitude = v.length();
    let inclination = if magnitude > 0.0 {
        (v.z / magnitude).clamp(-1.0, 1.0).acos()
    } else {
        0.0
    };
    let planar = (v.x * v.x + v.y * v.y).sqrt();
    let azimuth = if planar > 0.0 {
        let a = (v.x / planar).clamp(-1.0, 1.0).acos();
        // acos gives [0, π]; y = 0 on the negative x axis must stay at +π
        if v.y < 0.0 { -a } else { a }
    } else {
        0.0
    };
    PolarVector {
        azimuth,
        inclination,
        magnitude,
    }
}

/// Scale a vector to unit length
///
/// The caller guarantees `v` is non-zero; a zero vector yields NaN components.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v / v.length()
}

/// +1, -1, or exactly 0 at 0
#[inline]
pub fn sign(a: f32) -> f32 {
    if a > 0.0 {
        1.0
    } else if a < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Normalize an angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}
