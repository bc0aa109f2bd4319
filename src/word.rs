//! Word store primitives: bit-position arithmetic, range masks and the
//! population-count table.
//!
//! # Design
//!
//! - Bits live in 16-bit words, LSB first
//! - Bit indexing: word_idx = bit_idx >> 4, bit_offset = bit_idx & 15
//! - Population counts come from a 65536-entry table computed at compile time
//!
//! # Examples
//!
//! ```
//! use dynbitset::word::{base_bit, range_mask, word_index};
//!
//! assert_eq!(word_index(37), 2);
//! assert_eq!(base_bit(2), 32);
//! assert_eq!(range_mask(4, 7), 0b1111_0000);
//! ```

/// Word type for bit storage (16-bit unsigned integer)
pub type Word = u16;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 16;

/// Maximum word value
pub const WORD_MAX: Word = Word::MAX;

/// Number of distinct word values
const WORD_VALUES: usize = 1 << BITS_PER_WORD;

/// Set-bit count for every possible word value.
pub static POPCOUNT_TABLE: [u8; WORD_VALUES] = build_popcount_table();

const fn build_popcount_table() -> [u8; WORD_VALUES] {
    let mut table = [0u8; WORD_VALUES];
    let mut i = 1;
    while i < WORD_VALUES {
        table[i] = table[i >> 1] + (i & 1) as u8;
        i += 1;
    }
    table
}

/// Get word index from bit position
#[inline(always)]
pub const fn word_index(bit: usize) -> usize {
    bit >> 4 // bit / 16
}

/// Get bit offset within word from bit position
#[inline(always)]
pub const fn bit_offset(bit: usize) -> usize {
    bit & 15 // bit % 16
}

/// Get the bit position of the LSB of word `word_idx`
#[inline(always)]
pub const fn base_bit(word_idx: usize) -> usize {
    word_idx << 4
}

/// Number of set bits in `word`.
#[inline(always)]
pub fn popcount(word: Word) -> usize {
    POPCOUNT_TABLE[word as usize] as usize
}

/// Offset of the lowest set bit of `word`.
///
/// # Panics
///
/// Panics if `word` is zero. Callers mask and test words before scanning, so
/// a zero word here is a defect in the caller.
#[inline]
pub fn find_lowest_set_bit(word: Word) -> usize {
    assert_ne!(word, 0, "find_lowest_set_bit called on a zero word");
    word.trailing_zeros() as usize
}

/// Offset of the highest set bit of `word`.
///
/// # Panics
///
/// Panics if `word` is zero.
#[inline]
pub fn find_highest_set_bit(word: Word) -> usize {
    assert_ne!(word, 0, "find_highest_set_bit called on a zero word");
    BITS_PER_WORD - 1 - word.leading_zeros() as usize
}

/// Mask covering bit offsets `from_bit..=to_bit`, both reduced modulo 16.
///
/// The reduced `from_bit` must not exceed the reduced `to_bit`.
#[inline(always)]
pub const fn range_mask(from_bit: usize, to_bit: usize) -> Word {
    let lo = bit_offset(from_bit);
    let hi = bit_offset(to_bit);
    debug_assert!(lo <= hi);
    (WORD_MAX << lo) & (WORD_MAX >> (BITS_PER_WORD - 1 - hi))
}

// =============================================================================
// Hashing
// =============================================================================

/// Seed for `hash_words`
pub const HASH_SEED: u32 = 0x9747_b28c;

const MURMUR_C1: u32 = 0xcc9e_2d51;
const MURMUR_C2: u32 = 0x1b87_3593;

/// Murmur3-style 32-bit hash of a word sequence.
///
/// Order-sensitive; equal sequences always hash equal.
pub fn hash_words(words: &[Word]) -> u32 {
    let mut hash = HASH_SEED;
    for &word in words {
        let mut k = word as u32;
        k = k.wrapping_mul(MURMUR_C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(MURMUR_C2);

        hash ^= k;
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    // fmix32
    hash ^= (words.len() * std::mem::size_of::<Word>()) as u32;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(0x85eb_ca6b);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0xc2b2_ae35);
    hash ^= hash >> 16;
    hash
}
