//! Orb pool and spawner
//!
//! A fixed-capacity arena: slots `[0, len)` are live, and a slot is only ever
//! reused by overwriting it with a fresh orb. Nothing is removed or compacted,
//! so an orb's identity is its slot index.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{Boundary, OrbStyle, SimConfig};
use crate::to_cartesian;

/// A spherical obstacle drifting in a straight line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub center: Vec3,
    pub radius: f32,
    /// Heading around world z
    pub azimuth: f32,
    /// Heading from world +z
    pub inclination: f32,
    /// World units per second
    pub speed: f32,
    /// Cluster points relative to `center`; empty for a plain disc orb
    pub satellites: Vec<Vec3>,
}

impl Orb {
    /// Displacement over `dt`
    #[inline]
    pub fn velocity(&self, dt: f32) -> Vec3 {
        to_cartesian(self.azimuth, self.inclination, self.speed * dt)
    }

    /// Move the orb (and every satellite with it) by one step
    pub fn advance(&mut self, dt: f32) {
        self.center += self.velocity(dt);
    }

    /// World positions of the cluster points
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.satellites.iter().map(move |offset| self.center + *offset)
    }

    /// True when `p` is strictly inside the sphere
    pub fn contains(&self, p: Vec3) -> bool {
        self.center.distance(p) < self.radius
    }
}

/// Create an orb on a random face of the boundary with random motion
pub fn spawn_orb<R: Rng>(rng: &mut R, config: &SimConfig) -> Orb {
    let Boundary { low, high } = config.boundary;
    let mut center = Vec3::new(
        rng.random_range(low.x..=high.x),
        rng.random_range(low.y..=high.y),
        rng.random_range(low.z..=high.z),
    );
    // Faces 0..6: -x, +x, -y, +y, -z, +z
    let face = rng.random_range(0..6usize);
    let axis = face / 2;
    center[axis] = if face % 2 == 0 { low[axis] } else { high[axis] };

    let satellites = match config.orb_style {
        OrbStyle::Disc => Vec::new(),
        OrbStyle::Cluster => (0..config.points_per_object)
            .map(|_| {
                to_cartesian(
                    rng.random_range(-PI..PI),
                    rng.random_range(0.0..=PI),
                    rng.random_range(config.min_radius..=config.max_radius),
                )
            })
            .collect(),
    };

    Orb {
        center,
        radius: rng.random_range(config.min_radius..=config.max_radius),
        azimuth: rng.random_range(-PI..PI),
        inclination: rng.random_range(0.0..=PI),
        speed: rng.random_range(config.min_velocity..=config.max_velocity),
        satellites,
    }
}

/// Preallocated orb storage with an explicit live count
#[derive(Debug, Clone)]
pub struct OrbPool {
    orbs: Vec<Orb>,
    capacity: usize,
}

impl OrbPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            orbs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live orbs
    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.orbs.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Orb> {
        self.orbs.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Orb> {
        self.orbs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Orb> {
        self.orbs.get_mut(index)
    }

    /// Append an orb; a no-op returning `None` once the pool is full
    pub fn push(&mut self, orb: Orb) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.orbs.push(orb);
        Some(self.orbs.len() - 1)
    }

    /// Grow by one freshly spawned orb while capacity remains
    pub fn grow<R: Rng>(&mut self, rng: &mut R, config: &SimConfig) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let index = self.push(spawn_orb(rng, config));
        if self.is_full() {
            log::debug!("Orb pool reached capacity ({})", self.capacity);
        }
        index
    }

    /// Overwrite a live slot with a freshly spawned orb
    pub fn recycle<R: Rng>(&mut self, index: usize, rng: &mut R, config: &SimConfig) {
        if let Some(slot) = self.orbs.get_mut(index) {
            *slot = spawn_orb(rng, config);
        }
    }

    /// Advance every live orb and respawn any that drifted more than its own
    /// radius outside the boundary. Returns how many were recycled.
    pub fn step<R: Rng>(&mut self, dt: f32, rng: &mut R, config: &SimConfig) -> usize {
        let mut recycled = 0;
        for index in 0..self.orbs.len() {
            let orb = &mut self.orbs[index];
            orb.advance(dt);
            if config.boundary.is_outside(orb.center, orb.radius) {
                self.recycle(index, rng, config);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn clear(&mut self) {
        self.orbs.clear();
    }
}
