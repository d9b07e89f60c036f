//! Shape generation for 2D primitives
//!
//! Everything is emitted as a flat triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Filled disc as a fan of `segments` triangles around `center`
///
/// Rim vertices and the centre vertex take separate colors so the backend
/// shades the disc like a lit sphere.
pub fn disc(
    center: Vec2,
    radius: f32,
    rim_color: [f32; 4],
    core_color: [f32; 4],
    segments: usize,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(segments * 3);
    let rim = |i: usize| {
        let theta = i as f32 / segments as f32 * TAU;
        center + Vec2::new(theta.sin(), theta.cos()) * radius
    };

    for i in 0..segments {
        vertices.push(Vertex::at(rim(i), rim_color));
        vertices.push(Vertex::at(rim(i + 1), rim_color));
        vertices.push(Vertex::at(center, core_color));
    }

    vertices
}

fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

/// Convex hull in counter-clockwise order (Andrew's monotone chain)
///
/// Collinear points are dropped; fewer than three input points, or a
/// degenerate set, yields fewer than three hull points.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull: Vec<Vec2> = Vec::with_capacity(sorted.len() * 2);
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

/// Fill the convex hull of `points` as a fan around its centroid
///
/// Covers exactly the union of every triangle the points can form.
pub fn hull_fan(points: &[Vec2], rim_color: [f32; 4], core_color: [f32; 4]) -> Vec<Vertex> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return Vec::new();
    }
    let centroid = hull.iter().copied().sum::<Vec2>() / hull.len() as f32;

    let mut vertices = Vec::with_capacity(hull.len() * 3);
    for (i, &a) in hull.iter().enumerate() {
        let b = hull[(i + 1) % hull.len()];
        vertices.push(Vertex::at(a, rim_color));
        vertices.push(Vertex::at(b, rim_color));
        vertices.push(Vertex::at(centroid, core_color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors;

    #[test]
    fn test_disc_fan() {
        let v = disc(Vec2::new(100.0, 50.0), 10.0, colors::ORB_RIM, colors::ORB_CORE, 16);
        assert_eq!(v.len(), 48);
        for tri in v.chunks(3) {
            assert_eq!(tri[2].pos(), Vec2::new(100.0, 50.0));
            assert_eq!(tri[2].color, colors::ORB_CORE);
            for rim in &tri[..2] {
                assert!((rim.pos().distance(Vec2::new(100.0, 50.0)) - 10.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_hull_drops_interior_points() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(1.0, 3.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn test_hull_fan_area_matches_hull() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(2.0, 1.0),
        ];
        let v = hull_fan(&pts, colors::ORB_RIM, colors::ORB_CORE);
        let area: f32 = v
            .chunks(3)
            .map(|t| cross(t[0].pos(), t[1].pos(), t[2].pos()).abs() / 2.0)
            .sum();
        assert!((area - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_collinear_points_make_no_triangles() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        assert!(hull_fan(&pts, colors::ORB_RIM, colors::ORB_CORE).is_empty());
    }
}
