//! The transposition stage: grouped columnar transposition keyed by letter
//! ranks.
//!
//! Encoding routes each surviving character to the column of the next
//! keyword letter in cyclic order, then serializes the columns in
//! ascending rank order. Recurring keyword letters share a rank, so their
//! positions pool into one column regardless of where they sit in the
//! keyword.
//!
//! Decoding must reverse that with nothing but the line length to go on:
//! no column boundaries travel with the ciphertext. Each column's size is
//! reconstructed from the row and overhang arithmetic of the keyword, the
//! ciphertext is partitioned back into columns, and the assignment cycle
//! is replayed to put every character back at its original position.

use crate::{
    error::MalformedCiphertext, keyword::Keyword, schedule::ColumnScheduler, store::ColumnStore,
};

/// Transposes `line` under `keyword`.
///
/// Only ASCII letters are routed; everything else is dropped. Case is
/// preserved: folding is the shift stage's job.
#[must_use]
pub fn encode(line: &str, keyword: &Keyword) -> String {
    let mut scheduler = ColumnScheduler::new(keyword);
    let mut store = ColumnStore::new(keyword.distinct_letters());

    for ch in line.chars().filter(char::is_ascii_alphabetic) {
        let rank = scheduler.next_rank();
        store.insert(rank, ch);
        scheduler.reinsert(rank);
    }

    let mut output = String::with_capacity(line.len());
    for rank in 0..store.columns() {
        output.extend(store.drain_column(rank));
    }
    debug_assert!(store.is_empty(), "encode drained every column");
    output
}

/// Inverts [`encode`] for a line of [`encode`] output.
///
/// Column sizes are reconstructed from the raw character count of `line`;
/// characters the encoder would never emit still count toward the layout,
/// so junk in a ciphertext line skews the partition and generally
/// surfaces as an error during replay.
///
/// # Errors
/// Returns [`MalformedCiphertext`] when a column runs dry during replay
/// or the surviving characters overrun every column budget.
pub fn decode(line: &str, keyword: &Keyword) -> Result<String, MalformedCiphertext> {
    let length = line.chars().count();
    let malformed = || MalformedCiphertext {
        length,
        keyword_len: keyword.letter_count(),
    };

    let mut budgets = column_budgets(keyword, length);
    let mut store = ColumnStore::new(keyword.distinct_letters());

    // Partition: refill the columns in ascending rank order, giving each
    // rank exactly its budgeted share. Ranks whose budget is spent, or was
    // zero to begin with, are skipped, several in a row if need be.
    let mut rank = 0;
    let mut survivors = 0_usize;
    for ch in line.chars().filter(char::is_ascii_alphabetic) {
        while rank < budgets.len() && budgets[rank] == 0 {
            rank += 1;
        }
        if rank == budgets.len() {
            return Err(malformed());
        }
        store.insert(rank, ch);
        budgets[rank] -= 1;
        survivors += 1;
    }

    // Replay: the same cyclic walk the encoder made, popping each rank's
    // column to put every character back at its original position.
    let mut scheduler = ColumnScheduler::new(keyword);
    let mut output = String::with_capacity(survivors);
    for _ in 0..survivors {
        let rank = scheduler.next_rank();
        let ch = store.pop_front(rank).map_err(|_| malformed())?;
        output.push(ch);
        scheduler.reinsert(rank);
    }
    debug_assert!(store.is_empty(), "decode replayed every character");
    Ok(output)
}

/// Characters each rank's column received when a line of `length`
/// characters was encoded.
///
/// Every keyword position contributes `length / letter_count` characters
/// to its rank, and the first `length % letter_count` positions carry one
/// extra; positions sharing a rank pool their counts.
fn column_budgets(keyword: &Keyword, length: usize) -> Vec<usize> {
    let letter_count = keyword.letter_count();
    let full_rows = length / letter_count;
    let overhang = length % letter_count;

    let mut budgets = vec![0_usize; keyword.distinct_letters()];
    let mut scheduler = ColumnScheduler::new(keyword);
    for position in 0..letter_count {
        let rank = scheduler.next_rank();
        budgets[rank] += full_rows + usize::from(position < overhang);
    }
    budgets
}
