//! World-to-screen projection
//!
//! Points are moved into the camera frame through [`Orientation`], culled
//! against the front hemisphere and the field of view, then mapped with a
//! gnomonic (rectilinear) projection: an angular offset `θ` from the view
//! axis lands `scale·tan θ` pixels from the viewport centre.

use glam::{Vec2, Vec3};

use super::orientation::Orientation;
use super::pool::Orb;

/// Pixel size of the drawing surface, queried once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Viewport plus the camera's optical settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub viewport: Viewport,
    /// Largest accepted angle from the view axis on either screen axis
    pub half_fov: f32,
    pub zoom: f32,
}

impl Lens {
    pub fn new(viewport: Viewport, half_fov: f32, zoom: f32) -> Self {
        Self {
            viewport,
            half_fov,
            zoom,
        }
    }

    /// Pixels per unit of tangent, proportional to the larger viewport side
    #[inline]
    pub fn scale(&self) -> f32 {
        self.viewport.width.max(self.viewport.height) * self.zoom
    }

    /// Map a camera-frame vector `(forward, right, up)` to pixels
    ///
    /// Returns `None` for anything on or behind the camera plane, or outside
    /// the field of view. Screen y grows downward.
    pub fn camera_to_screen(&self, cam: Vec3) -> Option<Vec2> {
        if cam.x <= 0.0 {
            return None;
        }
        let theta_x = cam.y.atan2(cam.x);
        let theta_y = cam.z.atan2(cam.x);
        if theta_x.abs() > self.half_fov || theta_y.abs() > self.half_fov {
            return None;
        }
        let scale = self.scale();
        let center = self.viewport.center();
        Some(Vec2::new(
            center.x + scale * theta_x.tan(),
            center.y - scale * theta_y.tan(),
        ))
    }
}

/// A projected point with its distance from the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub pos: Vec2,
    pub distance: f32,
}

/// Screen-space shape of one orb
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectedOrb {
    /// Single sphere: projected centre and apparent radius in pixels
    Disc { center: Vec2, radius: f32 },
    /// Satellite points that passed the visibility test (at least three)
    Cluster { points: Vec<Vec2> },
}

/// Project one world point as seen from `eye`
pub fn project_point(
    eye: Vec3,
    orientation: &impl Orientation,
    target: Vec3,
    lens: &Lens,
) -> Option<ScreenPoint> {
    let separation = target - eye;
    let cam = orientation.to_camera_frame(separation);
    lens.camera_to_screen(cam).map(|pos| ScreenPoint {
        pos,
        distance: separation.length(),
    })
}

/// Project an orb, or `None` when nothing of it is drawable
pub fn project_orb(
    eye: Vec3,
    orientation: &impl Orientation,
    orb: &Orb,
    lens: &Lens,
) -> Option<ProjectedOrb> {
    if orb.satellites.is_empty() {
        let center = project_point(eye, orientation, orb.center, lens)?;
        if center.distance <= 0.0 {
            return None;
        }
        return Some(ProjectedOrb::Disc {
            center: center.pos,
            radius: lens.scale() * orb.radius / center.distance,
        });
    }

    let points: Vec<Vec2> = orb
        .points()
        .filter_map(|p| project_point(eye, orientation, p, lens))
        .map(|sp| sp.pos)
        .collect();
    if points.len() < 3 {
        return None;
    }
    Some(ProjectedOrb::Cluster { points })
}
