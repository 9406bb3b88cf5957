use boolbits::{BitSet, Error, WORD_BIT_LEN};
use proptest::prelude::*;
use std::str::FromStr;

const HEX_DIGITS: &str = "0123456789abcdef";

proptest! {
    #[test]
    fn hex_roundtrip((bit_len, hex_string) in lowercase_hex(8)) {
        let bits = BitSet::from_hex(bit_len, &hex_string).unwrap();
        assert_eq!(bits.bit_len(), bit_len);
        assert_eq!(bits.to_hex(), hex_string);
        assert_eq!(BitSet::from_hex(bit_len, &bits.to_hex()).unwrap(), bits);
    }

    #[test]
    fn decoding_ignores_case((bit_len, hex_string) in lowercase_hex(4)) {
        let upper = BitSet::from_hex(bit_len, &hex_string.to_uppercase()).unwrap();
        assert_eq!(upper, BitSet::from_hex(bit_len, &hex_string).unwrap());
        assert_eq!(upper.to_hex(), hex_string);
    }

    #[test]
    fn display_parses_back(words in prop::collection::vec(any::<u64>(), 1..8)) {
        let bits = BitSet::from_words(words.len() * WORD_BIT_LEN, &words).unwrap();
        let displayed = bits.to_string();
        assert!(displayed.starts_with("0x"));
        assert_eq!(displayed.len(), 2 + bits.bit_len() / 4);
        assert_eq!(BitSet::from_str(&displayed).unwrap(), bits);
        assert_eq!(bits.to_hex().parse::<BitSet>().unwrap(), bits);
    }

    #[test]
    fn words_print_most_significant_first(words in prop::collection::vec(any::<u64>(), 1..8)) {
        let bits = BitSet::from_words(words.len() * WORD_BIT_LEN, &words).unwrap();
        let expected: String = words.iter().map(|word| format!("{word:016x}")).collect();
        assert_eq!(bits.to_hex(), expected);
    }

    #[test]
    fn wrong_hex_length_fails((bit_len, hex_string) in lowercase_hex(4), extra in 1usize..20) {
        let longer = format!("{hex_string}{}", "0".repeat(extra));
        assert_eq!(
            BitSet::from_hex(bit_len, &longer),
            Err(Error::HexLengthMismatch { expected: bit_len / 4, actual: longer.len() })
        );
        let shorter = &hex_string[extra.min(hex_string.len())..];
        assert_eq!(
            BitSet::from_hex(bit_len, shorter),
            Err(Error::HexLengthMismatch { expected: bit_len / 4, actual: shorter.len() })
        );
    }
}

#[test]
fn single_word_fixture() {
    let bits = BitSet::from_hex(64, "0123456789abcdef").unwrap();
    assert_eq!(bits.to_hex(), "0123456789abcdef");
    assert_eq!(bits.as_words(), &[0x0123_4567_89ab_cdef]);
    assert_eq!(bits.to_string(), "0x0123456789abcdef");
}

#[test]
fn bit_indexing_pairs_with_word_order() {
    let mut bits = BitSet::new(128).unwrap();
    bits.set_bit(0).unwrap();
    assert_eq!(bits.to_hex(), "00000000000000010000000000000000");
    bits.clear_bit(0).unwrap();
    bits.set_bit(127).unwrap();
    assert_eq!(bits.to_hex(), "00000000000000008000000000000000");
    bits.set_bit(64).unwrap();
    bits.set_bit(63).unwrap();
    assert_eq!(bits.to_hex(), "80000000000000008000000000000001");
}

#[test]
fn invalid_length_is_checked_first() {
    assert_eq!(BitSet::from_hex(100, "zz"), Err(Error::InvalidLength { bit_len: 100 }));
    assert_eq!(BitSet::from_hex(0, ""), Err(Error::InvalidLength { bit_len: 0 }));
}

#[test]
fn hex_length_is_checked_before_digits() {
    assert_eq!(
        BitSet::from_hex(64, "xyz"),
        Err(Error::HexLengthMismatch { expected: 16, actual: 3 })
    );
}

#[test]
fn non_hex_characters_fail() {
    for input in ["0123456789abcdeg", "0123456789abcde ", "0x23456789abcdef"] {
        assert!(matches!(BitSet::from_hex(64, input), Err(Error::HexDecode(_))), "{input}");
    }
}

#[test]
fn from_str_infers_length() {
    let bits: BitSet = "0X00000000000000ff".parse().unwrap();
    assert_eq!(bits.bit_len(), 64);
    assert_eq!(bits.count_ones(), 8);
    assert_eq!("0x123".parse::<BitSet>(), Err(Error::InvalidLength { bit_len: 12 }));
    assert_eq!("".parse::<BitSet>(), Err(Error::InvalidLength { bit_len: 0 }));
}

#[test]
fn formatting() {
    let bits = BitSet::from_hex(64, "00000000000000ff").unwrap();
    assert_eq!(format!("{bits}"), "0x00000000000000ff");
    assert_eq!(format!("{bits:x}"), "00000000000000ff");
    assert_eq!(format!("{bits:#x}"), "0x00000000000000ff");
    assert_eq!(format!("{bits:?}"), "BitSet(bit_len=64,value=0x00000000000000ff)");
}

fn lowercase_hex(max_words: usize) -> impl Strategy<Value = (usize, String)> {
    let digits: Vec<char> = HEX_DIGITS.chars().collect();
    (1..=max_words).prop_flat_map(move |word_count| {
        let bit_len = word_count * WORD_BIT_LEN;
        prop::collection::vec(prop::sample::select(digits.clone()), bit_len / 4)
            .prop_map(move |chars| (bit_len, chars.into_iter().collect::<String>()))
    })
}
