pub mod words;

pub use words::{SetBits, WordSlice, WordSliceMut};

pub type Word = u64;

pub const WORD_BIT_LEN: usize = Word::BITS as usize;

/// Number of hex digits needed to print one [`Word`].
pub const WORD_HEX_LEN: usize = WORD_BIT_LEN / 4;

#[inline]
#[must_use]
pub fn word_and_bit_index(index: usize) -> (usize, usize) {
    let word_index = index / WORD_BIT_LEN;
    let bit_index = index % WORD_BIT_LEN;
    (word_index, bit_index)
}

/// Returns `true` when `bit_len` is a positive whole number of words.
#[inline]
#[must_use]
pub fn is_word_aligned(bit_len: usize) -> bool {
    bit_len != 0 && bit_len % WORD_BIT_LEN == 0
}
