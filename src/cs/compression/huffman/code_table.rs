use std::collections::BTreeMap;
use std::fmt;

use super::frequency::FrequencyTable;
use super::tree::{HuffmanNode, HuffmanTree};

/// Maps each symbol of a tree to its bit-string code.
///
/// Codes are strings of `'0'` and `'1'` and no code is a prefix of another.
/// Iteration and display are sorted by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Build the code table mapping characters to their Huffman codes.
    ///
    /// Walks the tree depth-first with an explicit stack, appending `'0'` when
    /// descending left and `'1'` when descending right. If the tree consists of
    /// a single leaf, the code "0" is assigned.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(tree.root(), String::new())];

        while let Some((id, prefix)) = stack.pop() {
            match tree.node(id) {
                Some(HuffmanNode::Leaf { symbol, .. }) => {
                    let code = if prefix.is_empty() {
                        "0".to_string()
                    } else {
                        prefix
                    };
                    codes.insert(*symbol, code);
                }
                Some(HuffmanNode::Internal { left, right, .. }) => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    stack.push((*right, right_prefix));
                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((*left, left_prefix));
                }
                None => {}
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Checks every pair of codes; true if none is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }

    /// Number of bits needed to encode a phrase with the given frequencies.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_len(&self, freq_table: &FrequencyTable) -> usize {
        freq_table
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "'{symbol}': {code}")?;
        }
        Ok(())
    }
}
