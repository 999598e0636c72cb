//! Trailing tail polyline of a kite.
//!
//! The tail is a bounded ring of recent body positions: the physics system
//! appends the new position once per frame and the oldest point is dropped
//! when the bound is reached. The cut resolver walks its segments.

use std::collections::VecDeque;

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Debug)]
pub struct Tail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Tail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest point, dropping the oldest ones past the bound.
    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Segments from oldest to newest, skipping the `skip_newest` most recent
    /// points so the part of the line right behind the kite is excluded.
    pub fn segments(&self, skip_newest: usize) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let usable = self.points.len().saturating_sub(skip_newest);
        self.points
            .iter()
            .take(usable)
            .zip(self.points.iter().take(usable).skip(1))
            .map(|(a, b)| (*a, *b))
    }

    /// Whether any usable segment passes within `radius` of `point`.
    ///
    /// A tail with a single usable point is tested as that point.
    pub fn touches(&self, point: Vec2, radius: f32, skip_newest: usize) -> bool {
        let usable = self.points.len().saturating_sub(skip_newest);
        match usable {
            0 => false,
            1 => self.points[0].distance(point) <= radius,
            _ => self
                .segments(skip_newest)
                .any(|(a, b)| segment_point_distance(a, b, point) <= radius),
        }
    }
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn segment_point_distance(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a.distance(p);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_drops_oldest_past_capacity() {
        let mut tail = Tail::new(3);
        for i in 0..5 {
            tail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(tail.len(), 3);
        let xs: Vec<f32> = tail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zero_capacity_tail_stays_empty() {
        let mut tail = Tail::new(0);
        tail.push(Vec2::ONE);
        assert!(tail.is_empty());
        assert!(!tail.touches(Vec2::ONE, 100.0, 0));
    }

    #[test]
    fn test_segments_skip_newest_points() {
        let mut tail = Tail::new(10);
        for i in 0..5 {
            tail.push(Vec2::new(i as f32 * 10.0, 0.0));
        }
        assert_eq!(tail.segments(0).count(), 4);
        assert_eq!(tail.segments(2).count(), 2);
        assert_eq!(tail.segments(5).count(), 0);
        let last = tail.segments(2).last().unwrap();
        assert_eq!(last.1, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_segment_point_distance_cases() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!((segment_point_distance(a, b, Vec2::new(5.0, 3.0)) - 3.0).abs() < 1e-6);
        assert!((segment_point_distance(a, b, Vec2::new(-4.0, 3.0)) - 5.0).abs() < 1e-6);
        assert!((segment_point_distance(a, a, Vec2::new(0.0, 2.0)) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_touches_single_point_tail() {
        let mut tail = Tail::new(4);
        tail.push(Vec2::new(0.0, 0.0));
        assert!(tail.touches(Vec2::new(0.0, 4.0), 5.0, 0));
        assert!(!tail.touches(Vec2::new(0.0, 6.0), 5.0, 0));
    }
}
