use crate::core::data::viewport::Viewport;
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// A viewport together with the iteration budget that was active for it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HistoryEntry {
    pub viewport: Viewport,
    pub max_iter: f64,
}

/// Bounded LIFO stack of the views zoomed away from.
///
/// Once `capacity` entries are held, pushing discards the oldest one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for ViewportHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ViewportHistory {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
