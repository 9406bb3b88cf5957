use crate::bit::{WORD_BIT_LEN, Word, word_and_bit_index};
use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};
use std::borrow::{Borrow, BorrowMut};
use std::iter::zip;

/// Iterator over the positions of the set bits of a single word, lowest first.
#[derive(Clone, Copy, Debug)]
pub struct SetBits(Word);

impl SetBits {
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self(word)
    }
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let position = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBits {}

/// Read-only bit operations over a slice of words.
///
/// Bit `i` lives in word `i / 64` at position `i % 64`. Indices are only checked
/// against the slice bounds; owners with a logical length validate first.
///
/// See also [`WordSliceMut`].
pub trait WordSlice
where
    Self: Borrow<[Word]>,
{
    #[inline]
    fn words(&self) -> &[Word] {
        self.borrow()
    }

    #[inline]
    fn index(&self, index: usize) -> bool {
        let (word_index, bit_index) = word_and_bit_index(index);
        (self.words()[word_index] >> bit_index) & 1 == 1
    }

    #[inline]
    fn weight(&self) -> usize {
        self.words().iter().map(|word| word.count_ones() as usize).sum()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.words().iter().all(|&word| word == 0)
    }

    fn support(&self) -> impl SortedIterator<Item = usize> {
        self.words()
            .iter()
            .enumerate()
            .flat_map(|(word_index, &word)| {
                SetBits::new(word).map(move |bit_index| word_index * WORD_BIT_LEN + bit_index)
            })
            .assume_sorted_by_item()
    }

    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.words()
            .iter()
            .enumerate()
            .find(|(_, word)| **word != 0)
            .map(|(word_index, word)| word_index * WORD_BIT_LEN + word.trailing_zeros() as usize)
    }

    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.words()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)
            .map(|(word_index, word)| word_index * WORD_BIT_LEN + (WORD_BIT_LEN - 1 - word.leading_zeros() as usize))
    }

    #[inline]
    fn and_weight(&self, other: &[Word]) -> usize {
        zip(self.words(), other)
            .map(|(left, right)| (left & right).count_ones() as usize)
            .sum()
    }

    #[inline]
    fn or_weight(&self, other: &[Word]) -> usize {
        zip(self.words(), other)
            .map(|(left, right)| (left | right).count_ones() as usize)
            .sum()
    }

    #[inline]
    fn xor_weight(&self, other: &[Word]) -> usize {
        zip(self.words(), other)
            .map(|(left, right)| (left ^ right).count_ones() as usize)
            .sum()
    }
}

impl<Bits> WordSlice for Bits where Bits: ?Sized + Borrow<[Word]> {}

/// In-place bit operations over a mutable slice of words.
///
/// Binary operations combine the overlapping prefix of the two slices; callers are
/// expected to have matched lengths already.
pub trait WordSliceMut: WordSlice
where
    Self: BorrowMut<[Word]>,
{
    #[inline]
    fn words_mut(&mut self) -> &mut [Word] {
        self.borrow_mut()
    }

    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        let (word_index, bit_index) = word_and_bit_index(index);
        let mask: Word = 1 << bit_index;
        let word = &mut self.words_mut()[word_index];
        if to {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        let (word_index, bit_index) = word_and_bit_index(index);
        let mask: Word = 1 << bit_index;
        self.words_mut()[word_index] ^= mask;
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.words_mut().fill(0);
    }

    #[inline]
    fn fill_ones(&mut self) {
        self.words_mut().fill(Word::MAX);
    }

    #[inline]
    fn negate_bits(&mut self) {
        for word in self.words_mut() {
            *word = !*word;
        }
    }

    #[inline]
    fn bitand_assign(&mut self, other: &[Word]) {
        for (word, other_word) in zip(self.words_mut(), other) {
            *word &= other_word;
        }
    }

    #[inline]
    fn bitor_assign(&mut self, other: &[Word]) {
        for (word, other_word) in zip(self.words_mut(), other) {
            *word |= other_word;
        }
    }

    #[inline]
    fn bitxor_assign(&mut self, other: &[Word]) {
        for (word, other_word) in zip(self.words_mut(), other) {
            *word ^= other_word;
        }
    }

    fn assign_random(&mut self, random_number_generator: &mut impl rand::Rng) {
        for word in self.words_mut() {
            *word = random_number_generator.r#gen();
        }
    }
}

impl<Bits> WordSliceMut for Bits where Bits: ?Sized + BorrowMut<[Word]> {}
