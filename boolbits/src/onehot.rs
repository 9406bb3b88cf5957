//! One-hot bit sets for string labels.
//!
//! Every distinct label of a sequence gets a [`BitSet`] with exactly one bit set, at the
//! label's rank in first-occurrence order. All vectors of one sequence share the length
//! [`capacity_for`] the number of distinct labels.
//!
//! ```
//! use boolbits::onehot;
//!
//! let maps = onehot::assign_all(
//!     &["domain1", "domain2", "domain1", "domain3"],
//!     &["group1", "group2", "group3", "groupA", "groupB"],
//!     &["nameA", "nameB", "nameA", "nameY", "nameZ"],
//!     &["valX", "valY", "val2", "val3"],
//! )?;
//! let entry = maps.lookup_entry("domain2", "group1", "nameA", "valY")?;
//! assert_eq!(entry.domain().support().collect::<Vec<_>>(), vec![1]);
//! assert_eq!(entry.value().support().collect::<Vec<_>>(), vec![1]);
//! assert!(maps.lookup_entry("domain9", "group1", "nameA", "valY").is_err());
//! # Ok::<(), boolbits::Error>(())
//! ```

use crate::bit::WORD_BIT_LEN;
use crate::entry::{Field, QuadEntry};
use crate::vec::BitSet;
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// Drops repeated items, keeping the first occurrence of each in input order.
pub fn deduplicate<Item, Items>(items: Items) -> Vec<Item>
where
    Items: IntoIterator<Item = Item>,
    Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Smallest multiple of 64 that holds `count` bits; one word when `count` is zero.
#[must_use]
pub fn capacity_for(count: usize) -> usize {
    if count == 0 {
        WORD_BIT_LEN
    } else {
        count.div_ceil(WORD_BIT_LEN) * WORD_BIT_LEN
    }
}

fn one_hot(bit_len: usize, rank: usize) -> Result<BitSet> {
    let mut bits = BitSet::zeros(bit_len)?;
    bits.set_bit(rank)?;
    Ok(bits)
}

/// The one-hot vectors of a single label sequence, iterated in rank order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryMap {
    bit_len: usize,
    labels: Vec<String>,
    vectors: Vec<BitSet>,
    ranks: HashMap<String, usize>,
}

impl CategoryMap {
    /// Length shared by every vector of this map.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.ranks.contains_key(label)
    }

    /// Position of the set bit in `label`'s vector.
    #[must_use]
    pub fn rank(&self, label: &str) -> Option<usize> {
        self.ranks.get(label).copied()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&BitSet> {
        self.rank(label).and_then(|rank| self.vectors.get(rank))
    }

    /// Distinct labels in first-occurrence order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &BitSet)> {
        self.labels.iter().map(String::as_str).zip(&self.vectors)
    }
}

/// Assigns one-hot vectors to the distinct labels of one sequence.
///
/// An empty sequence yields an empty map whose capacity is still one word.
///
/// # Errors
///
/// Propagates [`Error::InvalidLength`] or [`Error::IndexOutOfRange`] from vector
/// construction; neither occurs since every rank is below the computed capacity.
pub fn assign<Labels>(labels: Labels) -> Result<CategoryMap>
where
    Labels: IntoIterator,
    Labels::Item: AsRef<str>,
{
    let labels = deduplicate(labels.into_iter().map(|label| label.as_ref().to_owned()));
    let bit_len = capacity_for(labels.len());
    let vectors = (0..labels.len())
        .map(|rank| one_hot(bit_len, rank))
        .collect::<Result<Vec<_>>>()?;
    let ranks = labels
        .iter()
        .enumerate()
        .map(|(rank, label)| (label.clone(), rank))
        .collect();
    debug!(distinct = labels.len(), bit_len, "assigned one-hot vectors");
    Ok(CategoryMap {
        bit_len,
        labels,
        vectors,
        ranks,
    })
}

fn assign_category<Label: AsRef<str>>(field: Field, labels: &[Label]) -> Result<CategoryMap> {
    let _span = tracing::debug_span!("assign_category", category = %field).entered();
    assign(labels)
}

/// One [`CategoryMap`] per [`Field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryMaps {
    maps: [CategoryMap; Field::COUNT],
}

impl CategoryMaps {
    #[must_use]
    pub fn new(domain: CategoryMap, group: CategoryMap, name: CategoryMap, value: CategoryMap) -> Self {
        CategoryMaps {
            maps: [domain, group, name, value],
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &CategoryMap {
        &self.maps[field.position()]
    }

    /// Looks `key` up in the map of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] naming the category and the key.
    pub fn lookup(&self, field: Field, key: &str) -> Result<&BitSet> {
        self.get(field).get(key).ok_or_else(|| {
            debug!(category = %field, key, "label not found");
            Error::KeyNotFound {
                field,
                key: key.to_owned(),
            }
        })
    }

    /// Builds a [`QuadEntry`] from one label per category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] for the first category, in [`Field::ALL`] order,
    /// that does not know its key.
    pub fn lookup_entry(&self, domain: &str, group: &str, name: &str, value: &str) -> Result<QuadEntry> {
        let keys = [domain, group, name, value];
        QuadEntry::try_from_fn(|field| self.lookup(field, keys[field.position()]).cloned())
    }

    #[must_use]
    pub fn into_maps(self) -> [CategoryMap; Field::COUNT] {
        self.maps
    }
}

/// Assigns one-hot vectors to four independent label sequences.
///
/// With the `parallel` feature the four categories are assigned concurrently.
///
/// # Errors
///
/// Propagates the first error of [`assign`], in [`Field::ALL`] order.
pub fn assign_all<Label>(
    domains: &[Label],
    groups: &[Label],
    names: &[Label],
    values: &[Label],
) -> Result<CategoryMaps>
where
    Label: AsRef<str> + Sync,
{
    let _span = tracing::debug_span!("assign_all").entered();

    #[cfg(feature = "parallel")]
    let ((domain, group), (name, value)) = rayon::join(
        || {
            rayon::join(
                || assign_category(Field::Domain, domains),
                || assign_category(Field::Group, groups),
            )
        },
        || {
            rayon::join(
                || assign_category(Field::Name, names),
                || assign_category(Field::Value, values),
            )
        },
    );

    #[cfg(not(feature = "parallel"))]
    let (domain, group, name, value) = (
        assign_category(Field::Domain, domains),
        assign_category(Field::Group, groups),
        assign_category(Field::Name, names),
        assign_category(Field::Value, values),
    );

    Ok(CategoryMaps::new(domain?, group?, name?, value?))
}
