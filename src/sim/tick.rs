//! Fixed timestep simulation tick
//!
//! Order within a tick matters: every loss check reads positions that were
//! already updated this tick.
//! 1. thrust / decay player speed
//! 2. apply turn intents to the orientation
//! 3. integrate player position, check the boundary
//! 4. grow the orb pool, move and recycle orbs
//! 5. check the player against every orb

use super::orientation::{Orientation, TurnIntent};
use super::state::{GamePhase, GameState, LossReason, PlayerIntent};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust held
    pub accelerating: bool,
    pub turning_left: bool,
    pub turning_right: bool,
    pub turning_up: bool,
    pub turning_down: bool,
    /// Start a new run (only honoured after a loss)
    pub restart: bool,
}

impl TickInput {
    pub fn intent(&self) -> PlayerIntent {
        PlayerIntent {
            accelerating: self.accelerating,
            turn: TurnIntent {
                left: self.turning_left,
                right: self.turning_right,
                up: self.turning_up,
                down: self.turning_down,
            },
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
            log::info!("Restarted (run {})", state.runs + 1);
        }
        return;
    }

    state.time_ticks += 1;
    let config = &state.config;
    let player = &mut state.player;
    player.intent = input.intent();

    if player.intent.accelerating {
        player.speed += config.forward_thruster_power * dt;
    } else {
        player.speed *= 1.0 - config.deceleration_rate * dt;
    }

    player
        .orientation
        .rotate(&player.intent.turn, config.angular_rate * dt);

    player.position += player.orientation.forward() * player.speed * dt;

    if !config.ignore_boundary_loss && config.boundary.is_outside(player.position, 0.0) {
        state.lose(LossReason::OutOfBounds);
    }

    state.orbs.grow(&mut state.rng, &state.config);
    state.orbs.step(dt, &mut state.rng, &state.config);

    let position = state.player.position;
    if let Some(orb) = state.orbs.iter().position(|orb| orb.contains(position)) {
        state.lose(LossReason::Collision { orb });
    }
}
