//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Screen-space vertex with position (pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// Colors for game elements
pub mod colors {
    /// Orb rim (red)
    pub const ORB_RIM: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Orb centre (blue)
    pub const ORB_CORE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// HUD text (dark cyan)
    pub const HUD_TEXT: [f32; 4] = [0.0, 100.0 / 255.0, 100.0 / 255.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = [Vertex::new(1.0, 2.0, colors::ORB_RIM)];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 24);
        assert_eq!(v[0].pos(), Vec2::new(1.0, 2.0));
    }
}
