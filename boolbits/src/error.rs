use crate::entry::Field;
use thiserror::Error;

/// Errors reported by [`BitSet`](crate::BitSet), [`QuadEntry`](crate::QuadEntry) and the
/// [`onehot`](crate::onehot) assigner.
///
/// Every variant is recoverable; no operation leaves its receiver partially modified
/// when it returns one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Bit length is zero or not a multiple of 64.
    #[error("bit length must be a positive multiple of 64 (got {bit_len})")]
    InvalidLength { bit_len: usize },

    #[error("bit index {index} out of range [0, {bit_len})")]
    IndexOutOfRange { index: usize, bit_len: usize },

    /// Binary operation between bit sets of different lengths.
    #[error("bit set sizes differ: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },

    /// Binary entry operation where one field pair has different lengths.
    #[error("mismatched {field} bit lengths: {left} vs {right}")]
    FieldSizeMismatch { field: Field, left: usize, right: usize },

    #[error("hex string must be exactly {expected} characters long (got {actual})")]
    HexLengthMismatch { expected: usize, actual: usize },

    #[error("invalid hex string: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("expected {expected} words (got {actual})")]
    WordCountMismatch { expected: usize, actual: usize },

    #[error("{0} bit set is missing")]
    MissingField(Field),

    /// Label lookup failed in one of the four category maps.
    #[error("{field} key '{key}' not found")]
    KeyNotFound { field: Field, key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
