//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned [`GameState`] that
//! is passed explicitly to each step.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::orientation::{CameraOrientation, TurnIntent};
use super::pool::OrbPool;
use crate::config::SimConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Player left the boundary volume
    OutOfBounds,
    /// Player came within an orb's radius
    Collision { orb: usize },
}

impl LossReason {
    pub fn message(&self) -> &'static str {
        match self {
            LossReason::OutOfBounds => "player out of bounds",
            LossReason::Collision { .. } => "impacted flying orb",
        }
    }
}

/// Control intent held for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub accelerating: bool,
    pub turn: TurnIntent,
}

/// The player's ship and camera
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec3,
    pub orientation: CameraOrientation,
    /// Forward speed (world units per second)
    pub speed: f32,
    pub intent: PlayerIntent,
}

impl PlayerState {
    /// At the origin, stationary, facing +x
    pub fn new(config: &SimConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: CameraOrientation::new(config.orientation),
            speed: 0.0,
            intent: PlayerIntent::default(),
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub player: PlayerState,
    pub orbs: OrbPool,
    pub phase: GamePhase,
    /// Set on the tick that ended the run
    pub loss: Option<LossReason>,
    /// Ticks survived in the current run
    pub time_ticks: u64,
    /// Completed runs, including the current one once it ends
    pub runs: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh game; the RNG is seeded from `config.seed`
    pub fn new(config: SimConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        Self {
            player: PlayerState::new(&config),
            orbs: OrbPool::new(config.max_objects),
            phase: GamePhase::Playing,
            loss: None,
            time_ticks: 0,
            runs: 0,
            rng,
            config,
        }
    }

    /// Return every entity to its start state
    ///
    /// The RNG keeps running so the next run sees a different orb field.
    pub fn reset(&mut self) {
        self.player = PlayerState::new(&self.config);
        self.orbs.clear();
        self.phase = GamePhase::Playing;
        self.loss = None;
        self.time_ticks = 0;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the run; later losses in the same tick are ignored
    pub fn lose(&mut self, reason: LossReason) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.loss = Some(reason);
        self.runs += 1;
        log::info!(
            "Game lost: {} after {:.2}s",
            reason.message(),
            self.elapsed_secs()
        );
    }

    /// Survival time of the current run
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * self.config.dt()
    }

    /// HUD line for the player's position
    pub fn position_label(&self) -> String {
        let p = self.player.position;
        format!("x: {:.6} | y: {:.6} | z: {:.6}", p.x, p.y, p.z)
    }

    /// HUD line for whole seconds survived
    pub fn survival_label(&self) -> String {
        format!("Seconds alive: {}", self.elapsed_secs() as u64)
    }
}
