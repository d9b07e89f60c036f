//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by orb slot)
//! - No rendering or platform dependencies

pub mod depth;
pub mod orientation;
pub mod pool;
pub mod projection;
pub mod state;
pub mod tick;

pub use depth::depth_order;
pub use orientation::{
    BasisOrientation, CameraOrientation, EulerOrientation, Orientation, TurnIntent,
};
pub use pool::{Orb, OrbPool, spawn_orb};
pub use projection::{Lens, ProjectedOrb, ScreenPoint, Viewport, project_orb, project_point};
pub use state::{GamePhase, GameState, LossReason, PlayerIntent, PlayerState};
pub use tick::{TickInput, tick};
