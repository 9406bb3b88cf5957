use boolbits::bit::{SetBits, WordSlice, WordSliceMut, word_and_bit_index};
use proptest::prelude::*;

proptest! {
    #[test]
    fn set_bits(word in any::<u64>()) {
        let positions: Vec<usize> = SetBits::new(word).collect();
        assert_eq!(positions.len(), word.count_ones() as usize);
        assert_eq!(SetBits::new(word).len(), positions.len());
        for position in 0..64 {
            assert_eq!(positions.contains(&position), (word >> position) & 1 == 1);
        }
    }

    #[test]
    fn index(words in prop::collection::vec(any::<u64>(), 1..8)) {
        for bit in 0..words.len() * 64 {
            let (word_index, bit_index) = word_and_bit_index(bit);
            assert_eq!(words.index(bit), (words[word_index] >> bit_index) & 1 == 1);
        }
    }

    #[test]
    fn support(words in prop::collection::vec(any::<u64>(), 0..8)) {
        let support: Vec<usize> = words.support().collect();
        assert_eq!(support.len(), words.weight());
        for index in &support {
            assert!(words.index(*index));
        }
        assert_eq!(words.min_support(), support.first().copied());
        assert_eq!(words.max_support(), support.last().copied());
    }

    #[test]
    fn assign((words, bit) in words_with_bit(8)) {
        let mut copy = words.clone();
        for value in [true, false] {
            copy.assign_index(bit, value);
            assert_eq!(copy.index(bit), value);
            for other in 0..words.len() * 64 {
                if other != bit {
                    assert_eq!(copy.index(other), words.index(other));
                }
            }
        }
        copy.negate_index(bit);
        assert!(copy.index(bit));
    }

    #[test]
    fn xor_weight(words in prop::collection::vec((any::<u64>(), any::<u64>()), 1..8)) {
        let (left, right): (Vec<u64>, Vec<u64>) = words.into_iter().unzip();
        let mut xored = left.clone();
        xored.bitxor_assign(&right);
        assert_eq!(xored.weight(), left.xor_weight(&right));
        assert_eq!(left.and_weight(&right) + left.or_weight(&right), left.weight() + right.weight());
    }
}

#[test]
fn fills() {
    let mut words = vec![0u64; 3];
    words.fill_ones();
    assert_eq!(words.weight(), 192);
    words.negate_bits();
    assert!(words.is_zero());
    words.assign_index(130, true);
    words.clear_bits();
    assert!(words.is_zero());
}

fn words_with_bit(max_words: usize) -> impl Strategy<Value = (Vec<u64>, usize)> {
    prop::collection::vec(any::<u64>(), 1..max_words).prop_flat_map(|words| {
        let bit_count = words.len() * 64;
        (Just(words), 0..bit_count)
    })
}
