use crate::bit::{WORD_BIT_LEN, Word, WordSlice, WordSliceMut, is_word_aligned};
use crate::{Error, Result};
use sorted_iter::SortedIterator;
use std::ops::Not;

/// A fixed-length bit vector whose length is a positive multiple of 64.
///
/// `BitSet` is the core type of this crate. It stores its bits in 64-bit words, with bit
/// `i` held in word `i / 64` at position `i % 64`, and never exposes that storage mutably:
/// the only way to change a bit is through the checked mutators below.
///
/// # Construction
///
/// ```
/// use boolbits::BitSet;
///
/// let zeros = BitSet::new(128)?;
/// let ones = BitSet::ones(128)?;
/// let parsed = BitSet::from_hex(64, "0123456789abcdef")?;
/// assert!(zeros.is_zero());
/// assert_eq!(ones.count_ones(), 128);
/// assert_eq!(parsed.to_hex(), "0123456789abcdef");
///
/// // Lengths that are not whole words are rejected.
/// assert!(BitSet::new(100).is_err());
/// # Ok::<(), boolbits::Error>(())
/// ```
///
/// # Bit Operations
///
/// Binary operations require both operands to have the same length and return a new
/// vector; the `*_assign` forms update the receiver instead.
///
/// ```
/// use boolbits::BitSet;
///
/// let mut left = BitSet::new(256)?;
/// let mut right = BitSet::new(256)?;
/// for index in [0, 100, 200, 255] {
///     left.set_bit(index)?;
/// }
/// for index in [0, 150, 200] {
///     right.set_bit(index)?;
/// }
///
/// let both = left.and(&right)?;
/// assert_eq!(both.support().collect::<Vec<_>>(), vec![0, 200]);
/// assert_eq!(left.or(&right)?.count_ones(), 5);
/// assert_eq!(left.xor(&right)?.count_ones(), 3);
/// assert!(left.and(&left.complement())?.is_zero());
/// # Ok::<(), boolbits::Error>(())
/// ```
///
/// # See Also
///
/// - [`QuadEntry`](crate::QuadEntry) - four bit sets combined field by field
/// - [`onehot`](crate::onehot) - one-hot bit sets for string labels
#[must_use]
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BitSet {
    bit_len: usize,
    words: Vec<Word>,
}

pub(crate) fn check_length(bit_len: usize) -> Result<()> {
    if is_word_aligned(bit_len) {
        Ok(())
    } else {
        Err(Error::InvalidLength { bit_len })
    }
}

impl BitSet {
    /// Creates a new `BitSet` with all bits set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bit_len` is a positive multiple of 64.
    pub fn new(bit_len: usize) -> Result<BitSet> {
        Self::zeros(bit_len)
    }

    /// Creates a new `BitSet` with all bits set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bit_len` is a positive multiple of 64.
    pub fn zeros(bit_len: usize) -> Result<BitSet> {
        check_length(bit_len)?;
        Ok(BitSet {
            bit_len,
            words: vec![0; bit_len / WORD_BIT_LEN],
        })
    }

    /// Creates a new `BitSet` with all bits set to one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bit_len` is a positive multiple of 64.
    pub fn ones(bit_len: usize) -> Result<BitSet> {
        let mut bits = Self::zeros(bit_len)?;
        bits.words.fill_ones();
        Ok(bits)
    }

    /// Creates a `BitSet` from its words, word 0 holding bits `0..64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] for a bad `bit_len` and
    /// [`Error::WordCountMismatch`] when `words` does not hold exactly `bit_len / 64` words.
    pub fn from_words(bit_len: usize, words: &[Word]) -> Result<BitSet> {
        check_length(bit_len)?;
        let expected = bit_len / WORD_BIT_LEN;
        if words.len() != expected {
            return Err(Error::WordCountMismatch {
                expected,
                actual: words.len(),
            });
        }
        Ok(BitSet {
            bit_len,
            words: words.to_vec(),
        })
    }

    /// Creates a `BitSet` with every bit drawn uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bit_len` is a positive multiple of 64.
    pub fn random(bit_len: usize, random_number_generator: &mut impl rand::Rng) -> Result<BitSet> {
        let mut bits = Self::zeros(bit_len)?;
        bits.words.assign_random(random_number_generator);
        Ok(bits)
    }

    /// Wraps already-validated words; the word count fixes the length.
    pub(crate) fn from_word_vec(words: Vec<Word>) -> BitSet {
        debug_assert!(!words.is_empty());
        BitSet {
            bit_len: words.len() * WORD_BIT_LEN,
            words,
        }
    }

    /// Returns the number of addressable bits.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// View the underlying words, word 0 holding bits `0..64`.
    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.bit_len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                bit_len: self.bit_len,
            })
        }
    }

    fn check_same_size(&self, other: &BitSet) -> Result<()> {
        if self.bit_len == other.bit_len {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                left: self.bit_len,
                right: other.bit_len,
            })
        }
    }

    /// Sets bit `index` to one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= bit_len`; the vector is unchanged.
    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        self.assign_bit(index, true)
    }

    /// Sets bit `index` to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= bit_len`; the vector is unchanged.
    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        self.assign_bit(index, false)
    }

    /// Sets bit `index` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= bit_len`; the vector is unchanged.
    pub fn assign_bit(&mut self, index: usize, to: bool) -> Result<()> {
        self.check_index(index)?;
        self.words.assign_index(index, to);
        Ok(())
    }

    /// Inverts bit `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= bit_len`; the vector is unchanged.
    pub fn flip_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words.negate_index(index);
        Ok(())
    }

    /// Returns the state of bit `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= bit_len`.
    pub fn test_bit(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.words.index(index))
    }

    /// Sets every bit to zero.
    pub fn clear(&mut self) {
        self.words.clear_bits();
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.is_zero()
    }

    /// Population count over all words.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.weight()
    }

    /// Iterates over the indices of the set bits in increasing order.
    pub fn support(&self) -> impl SortedIterator<Item = usize> {
        self.words.support()
    }

    #[must_use]
    pub fn first_set(&self) -> Option<usize> {
        self.words.min_support()
    }

    #[must_use]
    pub fn last_set(&self) -> Option<usize> {
        self.words.max_support()
    }

    /// Replaces `self` with `self & other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ; `self` is unchanged.
    pub fn and_assign(&mut self, other: &BitSet) -> Result<()> {
        self.check_same_size(other)?;
        self.words.bitand_assign(&other.words);
        Ok(())
    }

    /// Replaces `self` with `self | other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ; `self` is unchanged.
    pub fn or_assign(&mut self, other: &BitSet) -> Result<()> {
        self.check_same_size(other)?;
        self.words.bitor_assign(&other.words);
        Ok(())
    }

    /// Replaces `self` with `self ^ other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ; `self` is unchanged.
    pub fn xor_assign(&mut self, other: &BitSet) -> Result<()> {
        self.check_same_size(other)?;
        self.words.bitxor_assign(&other.words);
        Ok(())
    }

    pub fn complement_assign(&mut self) {
        self.words.negate_bits();
    }

    /// Returns `self & other` as a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ.
    pub fn and(&self, other: &BitSet) -> Result<BitSet> {
        let mut result = self.clone();
        result.and_assign(other)?;
        Ok(result)
    }

    /// Returns `self | other` as a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ.
    pub fn or(&self, other: &BitSet) -> Result<BitSet> {
        let mut result = self.clone();
        result.or_assign(other)?;
        Ok(result)
    }

    /// Returns `self ^ other` as a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ.
    pub fn xor(&self, other: &BitSet) -> Result<BitSet> {
        let mut result = self.clone();
        result.xor_assign(other)?;
        Ok(result)
    }

    /// Returns a new vector with every bit inverted.
    pub fn complement(&self) -> BitSet {
        let mut result = self.clone();
        result.complement_assign();
        result
    }

    /// Counts the bits set in `self & other` without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ.
    pub fn and_count(&self, other: &BitSet) -> Result<usize> {
        self.check_same_size(other)?;
        Ok(self.words.and_weight(&other.words))
    }

    /// Counts the bits set in `self | other` without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ.
    pub fn or_count(&self, other: &BitSet) -> Result<usize> {
        self.check_same_size(other)?;
        Ok(self.words.or_weight(&other.words))
    }

    /// Counts the bits set in `self ^ other` without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the lengths differ.
    pub fn xor_count(&self, other: &BitSet) -> Result<usize> {
        self.check_same_size(other)?;
        Ok(self.words.xor_weight(&other.words))
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        self.complement()
    }
}

impl Not for BitSet {
    type Output = BitSet;

    fn not(mut self) -> BitSet {
        self.complement_assign();
        self
    }
}
