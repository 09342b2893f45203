//! Slice hit testing
//!
//! A blade path is a polyline; a fruit is a circle. A hit is any segment of
//! the path (or the single point, for a one-point path) coming within the
//! fruit's radius of its center.

use glam::Vec2;

/// Closest point to `point` on the segment `a..b`
#[inline]
pub fn closest_point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let line_vec = b - a;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq < 0.0001 {
        return a; // Degenerate segment
    }

    let t = ((point - a).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    a + line_vec * t
}

/// Whether the segment `a..b` touches the circle
#[inline]
pub fn segment_hits_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    let closest = closest_point_on_segment(center, a, b);
    closest.distance_squared(center) <= radius * radius
}

/// Whether any part of the path touches the circle
pub fn path_hits_circle(path: &[Vec2], center: Vec2, radius: f32) -> bool {
    match path {
        [] => false,
        [point] => point.distance_squared(center) <= radius * radius,
        _ => path
            .windows(2)
            .any(|seg| segment_hits_circle(seg[0], seg[1], center, radius)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_clamps_to_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(-5.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(15.0, 3.0), a, b), b);
        assert_eq!(
            closest_point_on_segment(Vec2::new(4.0, 3.0), a, b),
            Vec2::new(4.0, 0.0)
        );
    }

    #[test]
    fn test_segment_crossing_circle() {
        let center = Vec2::new(100.0, 100.0);
        assert!(segment_hits_circle(
            Vec2::new(0.0, 100.0),
            Vec2::new(200.0, 100.0),
            center,
            10.0
        ));
        assert!(!segment_hits_circle(
            Vec2::new(0.0, 150.0),
            Vec2::new(200.0, 150.0),
            center,
            10.0
        ));
    }

    #[test]
    fn test_path_shapes() {
        let center = Vec2::new(0.0, 0.0);
        assert!(!path_hits_circle(&[], center, 64.0));
        assert!(path_hits_circle(&[Vec2::new(30.0, 30.0)], center, 64.0));
        assert!(!path_hits_circle(&[Vec2::new(100.0, 0.0)], center, 64.0));

        let path = [
            Vec2::new(-200.0, 200.0),
            Vec2::new(-100.0, 100.0),
            Vec2::new(100.0, -100.0),
        ];
        assert!(path_hits_circle(&path, center, 64.0));
    }

    #[test]
    fn test_degenerate_segment_acts_as_point() {
        let p = Vec2::new(5.0, 5.0);
        assert!(segment_hits_circle(p, p, Vec2::ZERO, 8.0));
        assert!(!segment_hits_circle(p, p, Vec2::ZERO, 7.0));
    }
}
