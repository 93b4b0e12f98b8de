//! Bounded history of recent body positions.

use std::collections::VecDeque;

use glam::DVec3;

/// Ring buffer of world positions, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: VecDeque<DVec3>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest once full.
    pub fn push(&mut self, point: DVec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
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

    /// Points from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &DVec3> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<DVec3> {
        self.points.back().copied()
    }
}
