//! Cumulative per-category creation counts.

use std::collections::BTreeMap;

use crate::tracker::category::Category;

/// Number of distinct objects ever created in each category.
///
/// Counts only grow: they advance when the tracker registers a new object and
/// are never decremented on eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryCounters {
    counts: BTreeMap<Category, u64>,
}

impl Default for CategoryCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryCounters {
    /// All categories present with a count of zero.
    pub fn new() -> Self {
        Self {
            counts: Category::ALL.iter().map(|&c| (c, 0)).collect(),
        }
    }

    pub fn get(&self, category: Category) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Sum over all categories.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(category, count)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    pub(crate) fn increment(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }
}
