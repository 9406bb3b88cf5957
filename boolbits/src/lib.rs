pub mod bit;
pub use bit::{WORD_BIT_LEN, Word};

pub mod error;
pub use error::{Error, Result};

pub mod vec;
pub use vec::BitSet;

pub mod entry;
pub use entry::{Field, QuadEntry, QuadEntryBuilder};

pub mod onehot;
pub use onehot::{CategoryMap, CategoryMaps};

#[cfg(feature = "serde")]
mod serde;
