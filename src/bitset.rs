//! BitSet - Growable set of non-negative integers packed into 16-bit words.
//!
//! # Design
//!
//! - Uses `Vec<u16>` for storage; word `i` holds bits `[16·i, 16·i + 16)`
//! - The store grows lazily, only when a bit is set or flipped beyond capacity
//! - Clearing never grows the store
//! - AND, AND-NOT, OR and XOR trim trailing zero words afterwards
//! - Range operations touch each word once: a masked first word, whole
//!   interior words, a masked last word
//!
//! Capacity (`size`) and logical length (`length`) differ: pre-sizing or
//! clearing can leave zero words at the top of the store. Equality and hashing
//! only look at the words up to the highest non-zero one.
//!
//! # Examples
//!
//! ```
//! use dynbitset::BitSet;
//!
//! let mut bs = BitSet::new();
//! bs.set_bit(2);
//! bs.set_bit(4);
//! bs.set_bit(10);
//! assert_eq!(bs.to_string(), "{2, 4, 10}");
//! assert_eq!(bs.cardinality(), 3);
//! assert_eq!(bs.length(), 11);
//! assert_eq!(bs.next_set_bit(3), Some(4));
//! assert_eq!(bs.previous_clear_bit(4), Some(3));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign,
};

use itertools::Itertools;
use tracing::trace;

use crate::error::{check_range, Result};
use crate::iter::Iter;
use crate::word::{
    base_bit, bit_offset, find_highest_set_bit, find_lowest_set_bit, hash_words, popcount,
    range_mask, word_index, Word, BITS_PER_WORD, WORD_MAX,
};

/// Per-word action applied by the range operations.
#[derive(Clone, Copy, Debug)]
enum RangeOp {
    Set,
    Clear,
    Flip,
}

impl RangeOp {
    /// Apply to the bits of `word` selected by `mask`.
    #[inline(always)]
    fn apply(self, word: &mut Word, mask: Word) {
        match self {
            RangeOp::Set => *word |= mask,
            RangeOp::Clear => *word &= !mask,
            RangeOp::Flip => *word ^= mask,
        }
    }

    /// Apply to every bit of fully covered words.
    #[inline]
    fn fill(self, words: &mut [Word]) {
        match self {
            RangeOp::Set => words.fill(WORD_MAX),
            RangeOp::Clear => words.fill(0),
            RangeOp::Flip => {
                for word in words {
                    *word = !*word;
                }
            }
        }
    }
}

/// Growable bit set backed by 16-bit words.
///
/// All bit indices are 0-based. Range arguments are half-open: `(from, to)`
/// covers `from ..= to - 1`.
#[derive(Clone, Debug, Default)]
pub struct BitSet {
    /// Storage words (16-bit), lowest bits first
    words: Vec<Word>,
}

impl BitSet {
    /// Create an empty BitSet with no storage.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create an empty BitSet whose store already covers bits `[0, nbits)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbitset::BitSet;
    ///
    /// let bs = BitSet::with_capacity(20);
    /// assert_eq!(bs.size(), 32);
    /// assert_eq!(bs.length(), 0);
    /// ```
    pub fn with_capacity(nbits: usize) -> Self {
        let num_words = nbits.div_ceil(BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
        }
    }

    /// Build a BitSet holding every index yielded by `indices`.
    ///
    /// Storage is sized once to the largest index, then each index is set.
    /// Duplicates collapse.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let indices: Vec<usize> = indices.into_iter().collect();
        let mut bs = match indices.iter().max() {
            Some(&max) => Self {
                words: vec![0; word_index(max) + 1],
            },
            None => Self::new(),
        };
        for idx in indices {
            bs.words[word_index(idx)] |= 1 << bit_offset(idx);
        }
        bs
    }

    // =========================================================================
    // Storage
    // =========================================================================

    /// Grow the store to at least `num_words` words, zero-filling new words.
    fn ensure_words(&mut self, num_words: usize) {
        if num_words > self.words.len() {
            trace!(
                old_words = self.words.len(),
                new_words = num_words,
                "growing word store"
            );
            self.words.resize(num_words, 0);
        }
    }

    /// Number of words up to and including the highest non-zero word.
    #[inline]
    fn logical_word_count(&self) -> usize {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |idx| idx + 1)
    }

    /// Words up to and including the highest non-zero word.
    #[inline]
    fn logical_words(&self) -> &[Word] {
        &self.words[..self.logical_word_count()]
    }

    /// Drop trailing zero words.
    fn trim(&mut self) {
        let keep = self.logical_word_count();
        if keep < self.words.len() {
            trace!(
                from_words = self.words.len(),
                to_words = keep,
                "trimming trailing zero words"
            );
            self.words.truncate(keep);
        }
    }

    /// Three-phase range update over `[from, to)`.
    ///
    /// Requires `from < to` and a store covering bit `to - 1`.
    fn apply_range(&mut self, from: usize, to: usize, op: RangeOp) {
        let last = to - 1;
        let first_word = word_index(from);
        let last_word = word_index(last);

        if first_word == last_word {
            op.apply(&mut self.words[first_word], range_mask(from, last));
            return;
        }

        op.apply(
            &mut self.words[first_word],
            range_mask(from, BITS_PER_WORD - 1),
        );
        op.fill(&mut self.words[first_word + 1..last_word]);
        op.apply(&mut self.words[last_word], range_mask(0, last));
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Get bit at position `b`. Bits beyond the store read as `false`.
    #[inline]
    pub fn get_bit(&self, b: usize) -> bool {
        self.words
            .get(word_index(b))
            .is_some_and(|&w| w & (1 << bit_offset(b)) != 0)
    }

    /// Set bit at position `b` to 1, growing the store if needed.
    #[inline]
    pub fn set_bit(&mut self, b: usize) {
        let idx = word_index(b);
        self.ensure_words(idx + 1);
        self.words[idx] |= 1 << bit_offset(b);
    }

    /// Clear bit at position `b`. No-op beyond the store.
    #[inline]
    pub fn clear_bit(&mut self, b: usize) {
        if let Some(word) = self.words.get_mut(word_index(b)) {
            *word &= !(1 << bit_offset(b));
        }
    }

    /// Toggle bit at position `b` (0 -> 1, 1 -> 0), growing the store if needed.
    #[inline]
    pub fn flip_bit(&mut self, b: usize) {
        let idx = word_index(b);
        self.ensure_words(idx + 1);
        self.words[idx] ^= 1 << bit_offset(b);
    }

    /// Assign bit at position `b` to `value`.
    #[inline]
    pub fn assign_bit(&mut self, b: usize, value: bool) {
        if value {
            self.set_bit(b);
        } else {
            self.clear_bit(b);
        }
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Set bits `[from, to)` to 1, growing the store if needed.
    ///
    /// # Errors
    ///
    /// Returns `BitSetError::InvalidRange` if `from > to`; the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// bs.set_range(0, 20).unwrap();
    /// assert_eq!(bs.cardinality(), 20);
    /// assert!(bs.get_bit(19));
    /// assert!(!bs.get_bit(20));
    /// ```
    pub fn set_range(&mut self, from: usize, to: usize) -> Result<()> {
        check_range(from, to)?;
        if from == to {
            return Ok(());
        }
        self.ensure_words(word_index(to - 1) + 1);
        self.apply_range(from, to, RangeOp::Set);
        Ok(())
    }

    /// Clear bits `[from, to)`. The part of the range beyond the store is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `BitSetError::InvalidRange` if `from > to`.
    pub fn clear_range(&mut self, from: usize, to: usize) -> Result<()> {
        check_range(from, to)?;
        let to = to.min(self.size());
        if from >= to {
            return Ok(());
        }
        self.apply_range(from, to, RangeOp::Clear);
        Ok(())
    }

    /// Toggle bits `[from, to)`.
    ///
    /// Bits beyond the store count as clear: the store grows to cover the
    /// range and those bits end up set.
    ///
    /// # Errors
    ///
    /// Returns `BitSetError::InvalidRange` if `from > to`.
    pub fn flip_range(&mut self, from: usize, to: usize) -> Result<()> {
        check_range(from, to)?;
        if from == to {
            return Ok(());
        }
        self.ensure_words(word_index(to - 1) + 1);
        self.apply_range(from, to, RangeOp::Flip);
        Ok(())
    }

    /// Assign bits `[from, to)` to `value`.
    ///
    /// # Errors
    ///
    /// Returns `BitSetError::InvalidRange` if `from > to`.
    pub fn assign_range(&mut self, from: usize, to: usize, value: bool) -> Result<()> {
        if value {
            self.set_range(from, to)
        } else {
            self.clear_range(from, to)
        }
    }

    /// Copy bits `[from, to)` into a new BitSet, shifted down so that `from`
    /// lands at index 0.
    ///
    /// # Errors
    ///
    /// Returns `BitSetError::InvalidRange` if `from > to`.
    pub fn get_range(&self, from: usize, to: usize) -> Result<BitSet> {
        check_range(from, to)?;
        let to = to.min(self.length());
        if from >= to {
            return Ok(BitSet::new());
        }

        let last = to - from - 1;
        let num_words = word_index(last) + 1;
        let src = word_index(from);
        let shift = bit_offset(from);

        let mut words = Vec::with_capacity(num_words);
        for i in 0..num_words {
            let lo = self.words[src + i] >> shift;
            let hi = if shift == 0 {
                0
            } else {
                self.words
                    .get(src + i + 1)
                    .map_or(0, |&w| w << (BITS_PER_WORD - shift))
            };
            words.push(lo | hi);
        }
        words[num_words - 1] &= range_mask(0, last);

        let mut bs = BitSet { words };
        bs.trim();
        Ok(bs)
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Clear all bits to 0 without shrinking the store.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Intersect in place: keep only bits also set in `other`.
    pub fn and(&mut self, other: &BitSet) {
        self.words.truncate(other.words.len());
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= b;
        }
        self.trim();
    }

    /// Union in place. The longer tail of `other` is copied verbatim.
    pub fn or(&mut self, other: &BitSet) {
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= b;
        }
        if other.words.len() > self.words.len() {
            let tail = &other.words[self.words.len()..];
            self.words.extend_from_slice(tail);
        }
        self.trim();
    }

    /// Symmetric difference in place. The longer tail of `other` is copied
    /// verbatim.
    pub fn xor(&mut self, other: &BitSet) {
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            *a ^= b;
        }
        if other.words.len() > self.words.len() {
            let tail = &other.words[self.words.len()..];
            self.words.extend_from_slice(tail);
        }
        self.trim();
    }

    /// Difference in place: clear every bit that is set in `other`.
    pub fn and_not(&mut self, other: &BitSet) {
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= !b;
        }
        self.trim();
    }

    /// Check whether any bit is set in both sets.
    pub fn intersects(&self, other: &BitSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(&a, &b)| a & b != 0)
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (table-driven population count).
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|&w| popcount(w)).sum()
    }

    /// Index of the highest set bit plus one, or 0 if no bit is set.
    pub fn length(&self) -> usize {
        match self.size() {
            0 => 0,
            size => self.previous_set_bit(size - 1).map_or(0, |b| b + 1),
        }
    }

    /// Check whether no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    // =========================================================================
    // Search Operations
    // =========================================================================

    /// Find the first set bit at or after `from`.
    ///
    /// Returns `None` if no set bit exists in `[from, size)`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        self.scan_forward(from, false)
    }

    /// Find the first clear bit at or after `from` within the store.
    ///
    /// Bits beyond the store are not reported: returns `None` if every stored
    /// bit in `[from, size)` is set, or if `from >= size`.
    pub fn next_clear_bit(&self, from: usize) -> Option<usize> {
        self.scan_forward(from, true)
    }

    /// Find the last set bit at or before `from`.
    ///
    /// `from` beyond the store is clamped to `size - 1`.
    pub fn previous_set_bit(&self, from: usize) -> Option<usize> {
        self.scan_backward(from, false)
    }

    /// Find the last clear bit at or before `from` within the store.
    ///
    /// `from` beyond the store is clamped to `size - 1`; returns `None` for an
    /// empty store.
    pub fn previous_clear_bit(&self, from: usize) -> Option<usize> {
        self.scan_backward(from, true)
    }

    fn scan_forward(&self, from: usize, invert: bool) -> Option<usize> {
        let load = |w: Word| if invert { !w } else { w };

        let mut idx = word_index(from);
        if idx >= self.words.len() {
            return None;
        }

        let mut word = load(self.words[idx]) & range_mask(from, BITS_PER_WORD - 1);
        loop {
            if word != 0 {
                return Some(base_bit(idx) + find_lowest_set_bit(word));
            }
            idx += 1;
            if idx == self.words.len() {
                return None;
            }
            word = load(self.words[idx]);
        }
    }

    fn scan_backward(&self, from: usize, invert: bool) -> Option<usize> {
        let load = |w: Word| if invert { !w } else { w };

        if self.words.is_empty() {
            return None;
        }
        let from = from.min(self.size() - 1);

        let mut idx = word_index(from);
        let mut word = load(self.words[idx]) & range_mask(0, from);
        loop {
            if word != 0 {
                return Some(base_bit(idx) + find_highest_set_bit(word));
            }
            if idx == 0 {
                return None;
            }
            idx -= 1;
            word = load(self.words[idx]);
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterate set bit indices in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }

    /// Get indices of all set bits in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Capacity in bits (16 × number of stored words).
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    /// Get number of words in storage.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Get direct read-only access to word storage.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Order-sensitive 32-bit hash of the set bits.
    ///
    /// Only words up to the highest non-zero one are hashed, so equal sets
    /// hash equal regardless of capacity.
    pub fn hash_code(&self) -> u32 {
        hash_words(self.logical_words())
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.words.capacity() * std::mem::size_of::<Word>()
    }
}

// =============================================================================
// Comparison and Hashing
// =============================================================================

impl PartialEq for BitSet {
    /// Compare the words up to the highest set bit; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.logical_words() == other.logical_words()
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.logical_words().hash(state);
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().format(", "))
    }
}

// =============================================================================
// Construction and Iteration Traits
// =============================================================================

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

impl From<&[usize]> for BitSet {
    fn from(indices: &[usize]) -> Self {
        Self::from_indices(indices.iter().copied())
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for idx in iter {
            self.set_bit(idx);
        }
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Bitwise Operators
// =============================================================================

macro_rules! impl_set_operator {
    ($op:ident, $fn:ident, $assign_op:ident, $assign_fn:ident, $method:ident) => {
        impl $op for BitSet {
            type Output = BitSet;

            fn $fn(mut self, rhs: Self) -> Self::Output {
                self.$method(&rhs);
                self
            }
        }

        impl $op for &BitSet {
            type Output = BitSet;

            fn $fn(self, rhs: Self) -> Self::Output {
                let mut result = self.clone();
                result.$method(rhs);
                result
            }
        }

        impl $assign_op<&BitSet> for BitSet {
            fn $assign_fn(&mut self, rhs: &BitSet) {
                self.$method(rhs);
            }
        }
    };
}

impl_set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
impl_set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_set_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);
impl_set_operator!(Sub, sub, SubAssign, sub_assign, and_not);
