//! Blade trail
//!
//! Keeps the last few pointer samples of the current stroke. The trail is
//! what gets drawn and what the latest segment is hit-tested with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default number of samples kept in the trail
pub const DEFAULT_SLICE_LENGTH: usize = 8;

/// Fewest samples that form a visible trail
pub const MIN_PATH_POINTS: usize = 3;

/// A timestamped pointer sample in scene space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlicePoint {
    pub pos: Vec2,
    /// Game clock (seconds) when the sample arrived
    pub time: f64,
}

impl SlicePoint {
    pub fn new(pos: Vec2, time: f64) -> Self {
        Self { pos, time }
    }
}

/// Bounded trail of the active stroke, oldest first
#[derive(Debug, Clone)]
pub struct SliceTracker {
    points: Vec<SlicePoint>,
    capacity: usize,
    active: bool,
}

impl Default for SliceTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SLICE_LENGTH)
    }
}

impl SliceTracker {
    /// Create a tracker keeping at most `capacity` samples (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Vec::with_capacity(capacity + 1),
            capacity,
            active: false,
        }
    }

    /// Start a new stroke at `point`
    pub fn begin_stroke(&mut self, point: SlicePoint) {
        self.points.clear();
        self.points.push(point);
        self.active = true;
    }

    /// Append a sample, dropping the oldest ones past capacity
    pub fn extend_stroke(&mut self, point: SlicePoint) {
        self.points.push(point);
        if self.points.len() > self.capacity {
            let excess = self.points.len() - self.capacity;
            self.points.drain(..excess);
        }
    }

    /// Finish the stroke; the trail stays until the next begin so it can fade
    pub fn end_stroke(&mut self) {
        self.active = false;
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.points.clear();
        self.active = false;
    }

    /// Trail polyline, or empty when there are fewer than three samples
    pub fn current_path(&self) -> Vec<Vec2> {
        if self.points.len() < MIN_PATH_POINTS {
            return Vec::new();
        }
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Most recent movement: the last two samples, or the lone first sample
    pub fn latest_segment(&self) -> &[SlicePoint] {
        let start = self.points.len().saturating_sub(2);
        &self.points[start..]
    }

    /// Raw samples, oldest first
    pub fn points(&self) -> &[SlicePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a stroke is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32) -> SlicePoint {
        SlicePoint::new(Vec2::new(x, y), 0.0)
    }

    #[test]
    fn test_short_trail_has_no_path() {
        let mut tracker = SliceTracker::default();
        tracker.begin_stroke(sample(0.0, 0.0));
        tracker.extend_stroke(sample(1.0, 1.0));
        assert!(tracker.current_path().is_empty());

        tracker.extend_stroke(sample(2.0, 2.0));
        assert_eq!(
            tracker.current_path(),
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]
        );
    }

    #[test]
    fn test_trail_keeps_newest_samples() {
        let mut tracker = SliceTracker::default();
        tracker.begin_stroke(sample(0.0, 0.0));
        for i in 1..20 {
            tracker.extend_stroke(sample(i as f32, 0.0));
        }
        assert_eq!(tracker.len(), DEFAULT_SLICE_LENGTH);
        let xs: Vec<f32> = tracker.points().iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, (12..20).map(|i| i as f32).collect::<Vec<_>>());
    }

    #[test]
    fn test_begin_clears_previous_stroke() {
        let mut tracker = SliceTracker::default();
        tracker.begin_stroke(sample(0.0, 0.0));
        tracker.extend_stroke(sample(1.0, 0.0));
        tracker.extend_stroke(sample(2.0, 0.0));
        tracker.end_stroke();
        assert!(!tracker.is_active());
        assert_eq!(tracker.len(), 3);

        tracker.begin_stroke(sample(9.0, 9.0));
        assert!(tracker.is_active());
        assert_eq!(tracker.points(), &[sample(9.0, 9.0)]);
    }

    #[test]
    fn test_latest_segment() {
        let mut tracker = SliceTracker::default();
        assert!(tracker.latest_segment().is_empty());
        tracker.begin_stroke(sample(0.0, 0.0));
        assert_eq!(tracker.latest_segment().len(), 1);
        tracker.extend_stroke(sample(1.0, 0.0));
        tracker.extend_stroke(sample(2.0, 0.0));
        let seg = tracker.latest_segment();
        assert_eq!(seg.len(), 2);
        assert_eq!(seg[0].pos.x, 1.0);
        assert_eq!(seg[1].pos.x, 2.0);
    }
}
