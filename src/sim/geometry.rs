//! Geometry and physics utilities
//!
//! Pure functions over well-formed numeric positions. No state, no failure
//! modes. Everything the rest of the sim needs to reason about distances,
//! headings, and overlaps lives here.

use glam::Vec2;

use crate::normalize_angle;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Heading from `a` toward `b` in radians
#[inline]
pub fn angle_to(a: Vec2, b: Vec2) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Circle-circle overlap test (strict: touching circles do not overlap)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    distance(a, b) < radius_a + radius_b
}

/// Full reversal of a heading (angle + π, normalized)
#[inline]
pub fn reflect_angle(angle: f32) -> f32 {
    normalize_angle(angle + std::f32::consts::PI)
}

/// Perpendicular distance from a point to an infinite ray
///
/// The ray starts at `origin` with heading `angle`. Points behind the
/// origin measure to the origin itself, so a beam never hits backward.
pub fn point_ray_distance(point: Vec2, origin: Vec2, angle: f32) -> f32 {
    let dir = Vec2::new(angle.cos(), angle.sin());
    let to_point = point - origin;
    let along = to_point.dot(dir);
    if along <= 0.0 {
        return to_point.length();
    }
    (to_point - dir * along).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_to_cardinals() {
        let origin = Vec2::ZERO;
        assert!((angle_to(origin, Vec2::new(1.0, 0.0)) - 0.0).abs() < 1e-6);
        assert!((angle_to(origin, Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle_to(origin, Vec2::new(-1.0, 0.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_circles_overlap_boundary() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Sum of radii exactly equals distance: no overlap (strict <)
        assert!(!circles_overlap(a, 5.0, b, 5.0));
        assert!(circles_overlap(a, 5.0, b, 5.1));
    }

    #[test]
    fn test_reflect_angle_reverses() {
        let reflected = reflect_angle(0.3);
        assert!((reflected - (0.3 - PI)).abs() < 1e-5);
        // Reflecting twice returns to the original heading
        let twice = reflect_angle(reflected);
        assert!(crate::angle_diff(twice, 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_point_ray_distance() {
        let origin = Vec2::new(0.0, 0.0);
        // Ray along +x; point at (100, 30) is 30 away
        assert!((point_ray_distance(Vec2::new(100.0, 30.0), origin, 0.0) - 30.0).abs() < 1e-4);
        // Point behind the origin measures to the origin
        assert!((point_ray_distance(Vec2::new(-40.0, 0.0), origin, 0.0) - 40.0).abs() < 1e-4);
        // Point on the ray
        assert!(point_ray_distance(Vec2::new(50.0, 0.0), origin, 0.0) < 1e-4);
    }
}
