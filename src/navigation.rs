//! Contact Navigation
//!
//! Which contact the detail view shows. Movement is linear and clamped to
//! the list bounds; there is no wraparound.

use crate::observable::LoadState;

/// What the detail view should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Failed(String),
    Empty,
    Browsing(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCursor {
    index: usize,
}

impl ContactCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Clamp to `max(0, len - 1)` after the list changed
    pub fn sync(&mut self, len: usize) {
        let last = len.saturating_sub(1);
        if self.index > last {
            self.index = last;
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn next(&mut self, len: usize) -> bool {
        if self.index + 1 >= len {
            return false;
        }
        self.index += 1;
        true
    }

    /// Jump to `index` if it exists
    pub fn show(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.index + 1 < len
    }

    pub fn state<T>(&self, list: &LoadState<T>, len: impl Fn(&T) -> usize) -> DetailState {
        match list {
            LoadState::Loading => DetailState::Loading,
            LoadState::Failed(message) => DetailState::Failed(message.clone()),
            LoadState::Ready(items) if len(items) == 0 => DetailState::Empty,
            LoadState::Ready(items) => DetailState::Browsing(self.index.min(len(items) - 1)),
        }
    }
}
