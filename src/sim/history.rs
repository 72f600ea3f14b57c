//! Bounded motion history used by rewind

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Most-recent-N ring of player positions
///
/// Appending past capacity drops the oldest sample. Rewind pops from the
/// newest end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionHistory {
    samples: VecDeque<Vec2>,
    capacity: usize,
}

impl MotionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a position, evicting the oldest sample when full
    pub fn push(&mut self, pos: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(pos);
    }

    /// Remove and return the most recent sample
    pub fn pop_latest(&mut self) -> Option<Vec2> {
        self.samples.pop_back()
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.samples.front().copied()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.samples.back().copied()
    }

    /// The last `n` samples, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = Vec2> + '_ {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut history = MotionHistory::new(300);
        for i in 0..301 {
            history.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(history.len(), 300);
        assert_eq!(history.oldest(), Some(Vec2::new(1.0, 0.0)));
        assert_eq!(history.latest(), Some(Vec2::new(300.0, 0.0)));
    }

    #[test]
    fn test_pop_latest_is_lifo() {
        let mut history = MotionHistory::new(4);
        history.push(Vec2::new(1.0, 1.0));
        history.push(Vec2::new(2.0, 2.0));
        assert_eq!(history.pop_latest(), Some(Vec2::new(2.0, 2.0)));
        assert_eq!(history.pop_latest(), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(history.pop_latest(), None);
    }

    #[test]
    fn test_recent_returns_tail_oldest_first() {
        let mut history = MotionHistory::new(10);
        for i in 0..5 {
            history.push(Vec2::new(i as f32, 0.0));
        }
        let tail: Vec<f32> = history.recent(3).map(|p| p.x).collect();
        assert_eq!(tail, vec![2.0, 3.0, 4.0]);
        assert_eq!(history.recent(50).count(), 5);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(capacity in 1usize..64, pushes in 0usize..256) {
            let mut history = MotionHistory::new(capacity);
            for i in 0..pushes {
                history.push(Vec2::new(i as f32, -(i as f32)));
                prop_assert!(history.len() <= capacity);
            }
            prop_assert_eq!(history.len(), pushes.min(capacity));
            if pushes > 0 {
                let last = (pushes - 1) as f32;
                prop_assert_eq!(history.latest(), Some(Vec2::new(last, -last)));
            }
        }
    }
}
