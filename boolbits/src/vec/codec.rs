use crate::bit::{WORD_HEX_LEN, Word};
use crate::vec::BitSet;
use crate::vec::bitset::check_length;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "0x";

impl BitSet {
    /// Decodes `bit_len / 4` hex digits, most-significant word first and each word
    /// big-endian. Input digits may be upper or lower case.
    ///
    /// The first 16 digits therefore fill word 0, i.e. bits `0..64`, with the last of
    /// those digits holding bits `0..4`.
    ///
    /// # Example
    ///
    /// ```
    /// use boolbits::BitSet;
    ///
    /// let bits = BitSet::from_hex(128, "8000000000000000000000000000000F")?;
    /// assert_eq!(bits.support().collect::<Vec<_>>(), vec![63, 64, 65, 66, 67]);
    /// assert_eq!(bits.to_hex(), "8000000000000000000000000000000f");
    /// # Ok::<(), boolbits::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// In order of checking: [`Error::InvalidLength`] for a bad `bit_len`,
    /// [`Error::HexLengthMismatch`] when `hex_string` is not exactly `bit_len / 4` long,
    /// and [`Error::HexDecode`] for characters outside `[0-9a-fA-F]`.
    pub fn from_hex(bit_len: usize, hex_string: &str) -> Result<BitSet> {
        check_length(bit_len)?;
        let expected = bit_len / 4;
        if hex_string.len() != expected {
            return Err(Error::HexLengthMismatch {
                expected,
                actual: hex_string.len(),
            });
        }
        let bytes = hex::decode(hex_string)?;
        let words = bytes
            .chunks_exact(size_of::<Word>())
            .map(|chunk| {
                let mut word_bytes = [0u8; size_of::<Word>()];
                word_bytes.copy_from_slice(chunk);
                Word::from_be_bytes(word_bytes)
            })
            .collect();
        Ok(BitSet::from_word_vec(words))
    }

    /// Encodes the vector as exactly `bit_len / 4` lowercase hex digits, without prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes: Vec<u8> = self.as_words().iter().flat_map(|word| word.to_be_bytes()).collect();
        let encoded = hex::encode(bytes);
        debug_assert_eq!(encoded.len(), self.word_count() * WORD_HEX_LEN);
        encoded
    }
}

/// `0x` followed by [`BitSet::to_hex`].
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DISPLAY_PREFIX}{}", self.to_hex())
    }
}

impl fmt::LowerHex for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(DISPLAY_PREFIX)?;
        }
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet(bit_len={},value={})", self.bit_len(), self)
    }
}

/// Parses the [`Display`](fmt::Display) form or raw hex; the length is inferred as four
/// bits per digit.
impl FromStr for BitSet {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        let digits = string
            .strip_prefix(DISPLAY_PREFIX)
            .or_else(|| string.strip_prefix("0X"))
            .unwrap_or(string);
        BitSet::from_hex(digits.len() * 4, digits)
    }
}
