//! Lazy ascending iteration over the set bits of a `BitSet`.

use std::iter::FusedIterator;

use crate::word::{base_bit, find_lowest_set_bit, popcount, Word, BITS_PER_WORD};

/// Cursor over set bit indices in ascending order.
///
/// Created by [`BitSet::iter`](crate::BitSet::iter). Each call creates a new,
/// independent cursor.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: &'a [Word],
    /// Index of the word currently being drained
    word_idx: usize,
    /// Bits of the current word not yet yielded
    remaining: Word,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            word_idx: 0,
            remaining: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.remaining != 0 {
                let bit = find_lowest_set_bit(self.remaining);
                self.remaining &= self.remaining - 1; // drop lowest set bit
                return Some(base_bit(self.word_idx) + bit);
            }
            if self.word_idx + 1 >= self.words.len() {
                self.word_idx = self.words.len();
                return None;
            }
            self.word_idx += 1;
            self.remaining = self.words[self.word_idx];
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let current = popcount(self.remaining);
        let rest = self.words.len().saturating_sub(self.word_idx + 1);
        (current, Some(current + rest * BITS_PER_WORD))
    }
}

impl FusedIterator for Iter<'_> {}
