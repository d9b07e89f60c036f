//! Per-tick frame assembly
//!
//! Reads the game state after the simulation step, orders orbs farthest
//! first, projects each one and tessellates it. The result is handed to the
//! rendering collaborator as-is.

use super::shapes::{disc, hull_fan};
use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Lens, ProjectedOrb, Viewport, depth_order, project_orb};

/// Corner a HUD line is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAnchor {
    TopLeft,
    TopRight,
}

/// One line of text for the text collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub anchor: HudAnchor,
    pub color: [f32; 4],
}

/// Everything drawn for one tick
#[derive(Debug, Clone)]
pub struct Frame {
    pub viewport: Viewport,
    pub clear_color: [f32; 4],
    /// Triangle list in painter's order
    pub vertices: Vec<Vertex>,
    pub hud: Vec<HudLine>,
    /// Orbs that produced at least one triangle
    pub orbs_drawn: usize,
}

impl Frame {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Build the frame the player sees this tick
pub fn build_frame(state: &GameState, viewport: Viewport) -> Frame {
    let config = &state.config;
    let lens = Lens::new(viewport, config.half_fov, config.lens_zoom);
    let eye = state.player.position;
    let orientation = &state.player.orientation;
    let orbs = state.orbs.as_slice();

    let mut vertices = Vec::new();
    let mut orbs_drawn = 0;
    for index in depth_order(eye, orbs) {
        let shape = match project_orb(eye, orientation, &orbs[index], &lens) {
            Some(ProjectedOrb::Disc { center, radius }) => disc(
                center,
                radius,
                colors::ORB_RIM,
                colors::ORB_CORE,
                config.points_per_object,
            ),
            Some(ProjectedOrb::Cluster { points }) => {
                hull_fan(&points, colors::ORB_RIM, colors::ORB_CORE)
            }
            None => continue,
        };
        if !shape.is_empty() {
            orbs_drawn += 1;
            vertices.extend(shape);
        }
    }

    Frame {
        viewport,
        clear_color: colors::BACKGROUND,
        vertices,
        hud: vec![
            HudLine {
                text: state.position_label(),
                anchor: HudAnchor::TopLeft,
                color: colors::HUD_TEXT,
            },
            HudLine {
                text: state.survival_label(),
                anchor: HudAnchor::TopRight,
                color: colors::HUD_TEXT,
            },
        ],
        orbs_drawn,
    }
}
