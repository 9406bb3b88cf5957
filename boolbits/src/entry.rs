use crate::vec::BitSet;
use crate::{Error, Result};
use derive_more::Display;
use std::ops::Not;

/// Names the four slots of a [`QuadEntry`], and the four label categories of
/// [`CategoryMaps`](crate::CategoryMaps).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum Field {
    #[display("domain")]
    Domain,
    #[display("group")]
    Group,
    #[display("name")]
    Name,
    #[display("value")]
    Value,
}

impl Field {
    pub const COUNT: usize = 4;

    /// All fields in the order they are checked and reported.
    pub const ALL: [Field; Field::COUNT] = [Field::Domain, Field::Group, Field::Name, Field::Value];

    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }
}

/// Four bit sets, one per [`Field`], combined field by field.
///
/// Fields may have different lengths from one another. Binary operations only require
/// each field to match the same field of the other operand, and name the first field
/// that does not.
///
/// ```
/// use boolbits::{BitSet, Error, Field, QuadEntry};
///
/// let ones = QuadEntry::ones(64)?;
/// let zeros = QuadEntry::zeros(64)?;
/// assert_eq!(ones.and(&zeros)?, zeros);
/// assert_eq!(!&ones, zeros);
///
/// let wide = QuadEntry::new(BitSet::new(64)?, BitSet::new(128)?, BitSet::new(64)?, BitSet::new(64)?);
/// assert!(matches!(
///     ones.or(&wide),
///     Err(Error::FieldSizeMismatch { field: Field::Group, left: 64, right: 128 })
/// ));
/// # Ok::<(), boolbits::Error>(())
/// ```
#[must_use]
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadEntry {
    domain: BitSet,
    group: BitSet,
    name: BitSet,
    value: BitSet,
}

impl QuadEntry {
    pub fn new(domain: BitSet, group: BitSet, name: BitSet, value: BitSet) -> QuadEntry {
        QuadEntry {
            domain,
            group,
            name,
            value,
        }
    }

    /// Builds an entry from optional parts indexed by [`Field::position`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first absent part.
    pub fn from_parts(parts: [Option<BitSet>; Field::COUNT]) -> Result<QuadEntry> {
        let mut parts = parts;
        Self::try_from_fn(|field| parts[field.position()].take().ok_or(Error::MissingField(field)))
    }

    pub fn builder() -> QuadEntryBuilder {
        QuadEntryBuilder::default()
    }

    /// Builds an entry by calling `build` once per field, in [`Field::ALL`] order.
    pub fn from_fn(mut build: impl FnMut(Field) -> BitSet) -> QuadEntry {
        QuadEntry {
            domain: build(Field::Domain),
            group: build(Field::Group),
            name: build(Field::Name),
            value: build(Field::Value),
        }
    }

    /// Fallible [`from_fn`](QuadEntry::from_fn); stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `build`.
    pub fn try_from_fn(mut build: impl FnMut(Field) -> Result<BitSet>) -> Result<QuadEntry> {
        Ok(QuadEntry {
            domain: build(Field::Domain)?,
            group: build(Field::Group)?,
            name: build(Field::Name)?,
            value: build(Field::Value)?,
        })
    }

    /// An entry whose four fields are all-zero vectors of `bit_len` bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bit_len` is a positive multiple of 64.
    pub fn zeros(bit_len: usize) -> Result<QuadEntry> {
        Self::try_from_fn(|_| BitSet::zeros(bit_len))
    }

    /// An entry whose four fields are all-one vectors of `bit_len` bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bit_len` is a positive multiple of 64.
    pub fn ones(bit_len: usize) -> Result<QuadEntry> {
        Self::try_from_fn(|_| BitSet::ones(bit_len))
    }

    pub fn domain(&self) -> &BitSet {
        &self.domain
    }

    pub fn group(&self) -> &BitSet {
        &self.group
    }

    pub fn name(&self) -> &BitSet {
        &self.name
    }

    pub fn value(&self) -> &BitSet {
        &self.value
    }

    pub fn field(&self, field: Field) -> &BitSet {
        match field {
            Field::Domain => &self.domain,
            Field::Group => &self.group,
            Field::Name => &self.name,
            Field::Value => &self.value,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut BitSet {
        match field {
            Field::Domain => &mut self.domain,
            Field::Group => &mut self.group,
            Field::Name => &mut self.name,
            Field::Value => &mut self.value,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &BitSet)> {
        Field::ALL.into_iter().map(|field| (field, self.field(field)))
    }

    #[must_use]
    pub fn into_parts(self) -> [BitSet; Field::COUNT] {
        [self.domain, self.group, self.name, self.value]
    }

    /// `true` only when both entries are present and equal field by field.
    #[must_use]
    pub fn equals_opt(left: Option<&QuadEntry>, right: Option<&QuadEntry>) -> bool {
        matches!((left, right), (Some(left), Some(right)) if left == right)
    }

    fn check_field_sizes(&self, other: &QuadEntry) -> Result<()> {
        for field in Field::ALL {
            let (left, right) = (self.field(field).bit_len(), other.field(field).bit_len());
            if left != right {
                return Err(Error::FieldSizeMismatch { field, left, right });
            }
        }
        Ok(())
    }

    fn zip_with(&self, other: &QuadEntry, operation: fn(&BitSet, &BitSet) -> Result<BitSet>) -> Result<QuadEntry> {
        self.check_field_sizes(other)?;
        Self::try_from_fn(|field| operation(self.field(field), other.field(field)))
    }

    /// Field-wise AND.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldSizeMismatch`] for the first field whose lengths differ;
    /// all four fields are checked before any is combined.
    pub fn and(&self, other: &QuadEntry) -> Result<QuadEntry> {
        self.zip_with(other, BitSet::and)
    }

    /// Field-wise OR.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldSizeMismatch`] for the first field whose lengths differ.
    pub fn or(&self, other: &QuadEntry) -> Result<QuadEntry> {
        self.zip_with(other, BitSet::or)
    }

    /// Field-wise XOR.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldSizeMismatch`] for the first field whose lengths differ.
    pub fn xor(&self, other: &QuadEntry) -> Result<QuadEntry> {
        self.zip_with(other, BitSet::xor)
    }

    pub fn complement(&self) -> QuadEntry {
        Self::from_fn(|field| self.field(field).complement())
    }

    /// `true` when every field of `self` shares at least one set bit with the same field
    /// of `filter`.
    ///
    /// A filter built by OR-ing one-hot entries accepts any entry whose labels were all
    /// part of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldSizeMismatch`] for the first field whose lengths differ.
    pub fn matches(&self, filter: &QuadEntry) -> Result<bool> {
        self.check_field_sizes(filter)?;
        for field in Field::ALL {
            if self.field(field).and_count(filter.field(field))? == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Not for &QuadEntry {
    type Output = QuadEntry;

    fn not(self) -> QuadEntry {
        self.complement()
    }
}

impl Not for QuadEntry {
    type Output = QuadEntry;

    fn not(self) -> QuadEntry {
        self.complement()
    }
}

/// Collects the four parts of a [`QuadEntry`] one at a time.
///
/// ```
/// use boolbits::{BitSet, Error, Field, QuadEntry};
///
/// let partial = QuadEntry::builder().domain(BitSet::new(64)?).group(BitSet::new(64)?);
/// assert!(matches!(partial.build(), Err(Error::MissingField(Field::Name))));
/// # Ok::<(), boolbits::Error>(())
/// ```
#[must_use]
#[derive(Default, Clone, Debug)]
pub struct QuadEntryBuilder {
    parts: [Option<BitSet>; Field::COUNT],
}

impl QuadEntryBuilder {
    pub fn set(mut self, field: Field, bits: BitSet) -> Self {
        self.parts[field.position()] = Some(bits);
        self
    }

    pub fn domain(self, bits: BitSet) -> Self {
        self.set(Field::Domain, bits)
    }

    pub fn group(self, bits: BitSet) -> Self {
        self.set(Field::Group, bits)
    }

    pub fn name(self, bits: BitSet) -> Self {
        self.set(Field::Name, bits)
    }

    pub fn value(self, bits: BitSet) -> Self {
        self.set(Field::Value, bits)
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first part that was never set.
    pub fn build(self) -> Result<QuadEntry> {
        QuadEntry::from_parts(self.parts)
    }
}
