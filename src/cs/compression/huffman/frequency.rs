use std::collections::BTreeMap;

/// Occurrence counts for every distinct character of a phrase.
///
/// The table is immutable once built. Iteration runs in ascending code point
/// order so anything seeded from it is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Build a frequency table mapping each character in `text` to its count.
    ///
    /// Empty input yields an empty table; rejecting it is up to the caller.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Returns the count for `symbol`, if it occurs.
    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the phrase in characters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// The distinct symbols in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for ch in iter {
            *counts.entry(ch).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }
}
