//! Demo pilot
//!
//! Flies the ship without a human: keeps a cruising speed, dodges the most
//! threatening orb ahead and turns back toward the middle of the volume when
//! it gets close to a wall.

use glam::Vec3;

use crate::runner::InputSource;
use crate::sim::{GameState, Orientation, TickInput};

/// How far ahead (world units) an orb counts as a threat
const LOOKAHEAD: f32 = 400.0;
/// Extra clearance beyond an orb's radius
const CLEARANCE: f32 = 40.0;
/// Fraction of the half-extent where homing toward the centre starts
const HOMING_FRACTION: f32 = 0.7;

/// Built-in input source that steers away from trouble
#[derive(Debug, Clone)]
pub struct Autopilot {
    pub cruise_speed: f32,
    /// Restart after a loss instead of quitting
    pub restart_on_loss: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            cruise_speed: 60.0,
            restart_on_loss: false,
        }
    }
}

impl Autopilot {
    pub fn new(restart_on_loss: bool) -> Self {
        Self {
            restart_on_loss,
            ..Default::default()
        }
    }

    /// Decide the held keys for the next tick
    pub fn steer(&self, state: &GameState) -> TickInput {
        let player = &state.player;
        let eye = player.position;
        let orientation = &player.orientation;
        let mut input = TickInput {
            accelerating: player.speed < self.cruise_speed,
            ..Default::default()
        };

        // Nearest orb whose sphere, padded by the clearance, crosses our path
        let threat = state
            .orbs
            .iter()
            .filter_map(|orb| {
                let cam = orientation.to_camera_frame(orb.center - eye);
                let lateral = (cam.y * cam.y + cam.z * cam.z).sqrt();
                let ahead = cam.x > 0.0 && cam.x - orb.radius < LOOKAHEAD;
                (ahead && lateral < orb.radius + CLEARANCE).then_some(cam)
            })
            .min_by(|a, b| a.x.total_cmp(&b.x));

        if let Some(cam) = threat {
            // Turn away from the side the orb sits on; dead ahead breaks right
            if cam.y > 0.0 {
                input.turning_left = true;
            } else {
                input.turning_right = true;
            }
            if cam.z > 0.0 {
                input.turning_down = true;
            } else {
                input.turning_up = true;
            }
            return input;
        }

        let boundary = &state.config.boundary;
        let center = boundary.center();
        let half_extent = (boundary.high - boundary.low) * 0.5;
        let offset = (eye - center).abs();
        if offset.cmpgt(half_extent * HOMING_FRACTION).any() {
            self.steer_toward(orientation.to_camera_frame(center - eye), &mut input);
        }
        input
    }

    fn steer_toward(&self, cam: Vec3, input: &mut TickInput) {
        let dead_zone = cam.length() * 0.05;
        if cam.x <= 0.0 {
            // Behind us: commit to one direction until it comes round
            input.turning_right = true;
            return;
        }
        input.turning_right = cam.y > dead_zone;
        input.turning_left = cam.y < -dead_zone;
        input.turning_up = cam.z > dead_zone;
        input.turning_down = cam.z < -dead_zone;
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Option<TickInput> {
        if state.is_game_over() {
            if !self.restart_on_loss {
                return None;
            }
            return Some(TickInput {
                restart: true,
                ..Default::default()
            });
        }
        Some(self.steer(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::{LossReason, Orb};

    fn orb_at(center: Vec3, radius: f32) -> Orb {
        Orb {
            center,
            radius,
            azimuth: 0.0,
            inclination: 0.0,
            speed: 0.0,
            satellites: Vec::new(),
        }
    }

    #[test]
    fn test_accelerates_to_cruise() {
        let mut state = GameState::new(SimConfig::default());
        let pilot = Autopilot::default();
        assert!(pilot.steer(&state).accelerating);
        state.player.speed = 100.0;
        assert!(!pilot.steer(&state).accelerating);
    }

    #[test]
    fn test_dodges_orb_ahead() {
        let mut state = GameState::new(SimConfig::default());
        state.orbs.push(orb_at(Vec3::new(200.0, 10.0, -5.0), 20.0));
        let input = Autopilot::default().steer(&state);
        assert!(input.turning_left && !input.turning_right);
        assert!(input.turning_up && !input.turning_down);
    }

    #[test]
    fn test_ignores_orb_behind() {
        let mut state = GameState::new(SimConfig::default());
        state.orbs.push(orb_at(Vec3::new(-50.0, 0.0, 0.0), 20.0));
        let input = Autopilot::default().steer(&state);
        assert!(!input.turning_left && !input.turning_right);
    }

    #[test]
    fn test_homes_near_wall() {
        let mut state = GameState::new(SimConfig::default());
        state.player.position = Vec3::new(900.0, 0.0, 0.0);
        // Facing +x toward the wall, the centre is behind
        let input = Autopilot::default().steer(&state);
        assert!(input.turning_right);
    }

    #[test]
    fn test_quits_or_restarts_after_loss() {
        let mut state = GameState::new(SimConfig::default());
        state.lose(LossReason::OutOfBounds);
        assert!(Autopilot::new(false).poll(&state).is_none());
        let input = Autopilot::new(true).poll(&state).unwrap();
        assert!(input.restart);
    }
}
