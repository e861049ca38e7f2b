//! Round-robin dispensing of column ranks.

use crate::keyword::Keyword;

/// A cyclic cursor over the keyword's column assignment sequence.
///
/// Holds one slot per keyword letter, each carrying that letter's column
/// rank. [`next_rank`](Self::next_rank) consumes the rank at the front of
/// the cycle; [`reinsert`](Self::reinsert) returns a consumed rank to the
/// back. The encode and decode replay loops always reinsert what they
/// consume, keeping exactly `letter_count` live ranks in rotation. The
/// decode budget walk instead consumes the full cycle once without
/// reinserting, visiting every keyword position exactly once.
///
/// Implemented as a fixed index array with a read cursor and a live count;
/// the cycle never grows past the keyword length.
#[derive(Debug)]
pub struct ColumnScheduler {
    slots: Box<[usize]>,
    head: usize,
    live: usize,
}

impl ColumnScheduler {
    /// Builds the cycle for `keyword`, front at the first keyword letter.
    #[must_use]
    pub fn new(keyword: &Keyword) -> Self {
        let slots = keyword.rank_sequence().into_boxed_slice();
        let live = slots.len();
        Self {
            slots,
            head: 0,
            live,
        }
    }

    /// Consumes and returns the rank at the front of the cycle.
    ///
    /// # Panics
    /// Panics if every rank has already been consumed without
    /// reinsertion: taking more than `letter_count` ranks out of rotation
    /// is a bookkeeping bug in the caller.
    pub fn next_rank(&mut self) -> usize {
        assert!(self.live > 0, "column scheduler cycle is drained");
        let rank = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.live -= 1;
        rank
    }

    /// Returns a consumed rank to the back of the cycle.
    pub fn reinsert(&mut self, rank: usize) {
        debug_assert!(
            self.live < self.slots.len(),
            "column scheduler cycle is already full"
        );
        let tail = (self.head + self.live) % self.slots.len();
        self.slots[tail] = rank;
        self.live += 1;
    }

    /// Ranks currently in rotation.
    #[must_use]
    pub const fn live_ranks(&self) -> usize {
        self.live
    }
}
