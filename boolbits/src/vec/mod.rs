mod bitset;
mod codec;

pub use bitset::BitSet;
