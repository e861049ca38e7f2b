//! Per-line FIFO storage of characters grouped by column rank.

use std::collections::VecDeque;

use crate::error::EmptyColumn;

/// One FIFO queue of characters per column rank.
///
/// A transient per-line structure: the encode and decode loops fill it,
/// drain it completely, and drop it before the next line. Ranks are dense,
/// so the queues live in a plain vector indexed by rank.
#[derive(Debug)]
pub struct ColumnStore {
    columns: Vec<VecDeque<char>>,
}

impl ColumnStore {
    /// Creates a store with one empty queue per rank in `0..columns`.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: vec![VecDeque::new(); columns],
        }
    }

    /// Number of columns (distinct ranks) in the store.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Appends `ch` to the queue for `rank`.
    ///
    /// # Panics
    /// Panics if `rank` is not a rank this store was created with.
    pub fn insert(&mut self, rank: usize, ch: char) {
        self.columns[rank].push_back(ch);
    }

    /// Removes and returns the oldest character in the queue for `rank`.
    ///
    /// # Errors
    /// Returns [`EmptyColumn`] if the queue for `rank` holds nothing.
    ///
    /// # Panics
    /// Panics if `rank` is not a rank this store was created with.
    pub fn pop_front(&mut self, rank: usize) -> Result<char, EmptyColumn> {
        self.columns[rank].pop_front().ok_or(EmptyColumn { rank })
    }

    /// Removes and yields the queue for `rank`, oldest first.
    ///
    /// # Panics
    /// Panics if `rank` is not a rank this store was created with.
    pub fn drain_column(&mut self, rank: usize) -> impl Iterator<Item = char> + '_ {
        self.columns[rank].drain(..)
    }

    /// Whether every queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(VecDeque::is_empty)
    }

    /// Discards the contents of every queue, keeping the columns.
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
    }
}
