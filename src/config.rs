//! Simulation configuration
//!
//! A static structure read once at startup. Every field has a default so a
//! partial JSON file only needs to name what it overrides.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which orientation strategy drives the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrientationMode {
    /// Orthonormal forward/right/up triple
    #[default]
    Basis,
    /// Wrapped azimuth/inclination pair
    Euler,
}

impl OrientationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationMode::Basis => "basis",
            OrientationMode::Euler => "euler",
        }
    }
}

/// How orbs are shaped and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrbStyle {
    /// Single sphere drawn as a flat disc
    #[default]
    Disc,
    /// Centre plus scattered satellite points drawn as their hull
    Cluster,
}

/// Axis-aligned box that contains the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub low: Vec3,
    pub high: Vec3,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            low: Vec3::splat(BOUNDARY_LOW),
            high: Vec3::splat(BOUNDARY_HIGH),
        }
    }
}

impl Boundary {
    pub fn cube(half_extent: f32) -> Self {
        Self {
            low: Vec3::splat(-half_extent),
            high: Vec3::splat(half_extent),
        }
    }

    /// True when `p` lies more than `tolerance` outside the box on any axis
    pub fn is_outside(&self, p: Vec3, tolerance: f32) -> bool {
        p.cmpgt(self.high + tolerance).any() || p.cmplt(self.low - tolerance).any()
    }

    pub fn contains(&self, p: Vec3) -> bool {
        !self.is_outside(p, 0.0)
    }

    pub fn center(&self) -> Vec3 {
        (self.low + self.high) * 0.5
    }
}

/// Complete static configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === World ===
    pub boundary: Boundary,
    /// Orb pool capacity
    pub max_objects: usize,
    pub orb_style: OrbStyle,
    /// Disc rim segments, or satellites per cluster orb
    pub points_per_object: usize,
    pub min_velocity: f32,
    pub max_velocity: f32,
    pub min_radius: f32,
    pub max_radius: f32,

    // === Player ===
    pub forward_thruster_power: f32,
    /// Turn rate (radians per second)
    pub angular_rate: f32,
    pub deceleration_rate: f32,
    pub orientation: OrientationMode,
    /// Leaving the boundary does not end the game
    pub ignore_boundary_loss: bool,

    // === View ===
    /// Half field of view per screen axis (radians)
    pub half_fov: f32,
    /// Multiplier on the projection scale
    pub lens_zoom: f32,

    // === Loop ===
    pub tick_millis: u64,
    /// RNG seed for orb spawning
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            boundary: Boundary::default(),
            max_objects: MAX_OBJECTS,
            orb_style: OrbStyle::Disc,
            points_per_object: POINTS_PER_OBJECT,
            min_velocity: MIN_VELOCITY,
            max_velocity: MAX_VELOCITY,
            min_radius: OBJECT_MIN_RADIUS,
            max_radius: OBJECT_MAX_RADIUS,

            forward_thruster_power: FORWARD_THRUSTER_POWER,
            angular_rate: ANGULAR_THRUSTER_POWER,
            deceleration_rate: DECELERATION_RATE,
            orientation: OrientationMode::Basis,
            ignore_boundary_loss: true,

            half_fov: VIEW_MAX_ANGLE,
            lens_zoom: 1.0,

            tick_millis: TICK_MILLIS,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file and validate
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations no core operation should have to tolerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.boundary;
        for (name, min, max) in [
            ("boundary.x", b.low.x, b.high.x),
            ("boundary.y", b.low.y, b.high.y),
            ("boundary.z", b.low.z, b.high.z),
            ("velocity", self.min_velocity, self.max_velocity),
            ("radius", self.min_radius, self.max_radius),
        ] {
            if min > max {
                return Err(ConfigError::InvertedRange { name, min, max });
            }
        }
        for (name, value) in [
            ("min_radius", self.min_radius),
            ("half_fov", self.half_fov),
            ("lens_zoom", self.lens_zoom),
            ("angular_rate", self.angular_rate),
            ("tick_millis", self.tick_millis as f32),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.half_fov >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::FieldOfViewTooWide(self.half_fov));
        }
        if self.max_objects == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.points_per_object < 3 {
            return Err(ConfigError::TooFewPoints(self.points_per_object));
        }
        Ok(())
    }

    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        self.tick_millis as f32 / 1000.0
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Rotation applied per tick while a turn intent is held
    pub fn angular_change(&self) -> f32 {
        self.angular_rate * self.dt()
    }
}
