use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use super::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Index of a node inside a [`HuffmanTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena. Leaves come first, in symbol order,
    /// followed by internal nodes in the order they were merged.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its frequency.
    Leaf { symbol: char, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Tie-break class used when two nodes have the same frequency.
///
/// The derived ordering puts `Space` ahead of every `Symbol`. Internal nodes
/// rank as `Symbol('\0')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Space,
    Symbol(char),
}

/// Merge priority of a node. Smaller values are dequeued first.
///
/// Fields compare in declaration order: frequency, then [`Rank`], then arena
/// position. Arena positions are unique, so this is a total order and two
/// distinct nodes never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub freq: usize,
    pub rank: Rank,
    pub id: NodeId,
}

impl Priority {
    /// Computes the priority of `node` stored at `id`.
    pub fn new(node: &HuffmanNode, id: NodeId) -> Self {
        let rank = match node {
            HuffmanNode::Leaf { symbol: ' ', .. } => Rank::Space,
            HuffmanNode::Leaf { symbol, .. } => Rank::Symbol(*symbol),
            HuffmanNode::Internal { .. } => Rank::Symbol('\0'),
        };
        Priority {
            freq: node.freq(),
            rank,
            id,
        }
    }
}

/// A Huffman tree stored as an arena of nodes.
///
/// The arena owns every node and children are referenced by [`NodeId`], so
/// no node is shared and the structure cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the Huffman tree for a frequency table.
    ///
    /// Leaves are seeded into a min-priority queue ordered by [`Priority`].
    /// The two highest-priority nodes are repeatedly removed and merged into
    /// a new internal node (first removed on the left) until one node
    /// remains. With a single distinct symbol the root is that leaf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the table is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use huffman_lab::cs::compression::huffman::{FrequencyTable, HuffmanTree};
    ///
    /// let tree = HuffmanTree::build(&FrequencyTable::from_text("abc")).unwrap();
    /// assert_eq!(tree.leaf_count(), 3);
    /// assert_eq!(tree.weight(), 3);
    /// ```
    ///
    /// # Complexity
    /// * Time: O(n log n) where n is the number of distinct symbols
    /// * Space: O(n)
    pub fn build(freq_table: &FrequencyTable) -> Result<Self> {
        let symbols = freq_table.len();
        if symbols == 0 {
            return Err(Error::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(2 * symbols - 1);
        let mut heap = BinaryHeap::with_capacity(symbols);
        for (symbol, freq) in freq_table.iter() {
            let id = NodeId(nodes.len());
            let leaf = HuffmanNode::Leaf { symbol, freq };
            heap.push(Reverse(Priority::new(&leaf, id)));
            nodes.push(leaf);
        }

        loop {
            let Reverse(first) = heap.pop().ok_or(Error::EmptyInput)?;
            let Some(Reverse(second)) = heap.pop() else {
                log::debug!(
                    "built huffman tree: {} symbols, {} nodes, weight {}",
                    symbols,
                    nodes.len(),
                    first.freq
                );
                return Ok(HuffmanTree {
                    nodes,
                    root: first.id,
                });
            };

            let id = NodeId(nodes.len());
            let merged = HuffmanNode::Internal {
                freq: first.freq + second.freq,
                left: first.id,
                right: second.id,
            };
            log::trace!(
                "merge {:?} + {:?} -> node {} (freq {})",
                first,
                second,
                id.0,
                merged.freq()
            );
            heap.push(Reverse(Priority::new(&merged, id)));
            nodes.push(merged);
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node stored at `id`, or `None` if it is outside the arena.
    pub fn node(&self, id: NodeId) -> Option<&HuffmanNode> {
        self.nodes.get(id.0)
    }

    /// Follows one edge from `id`: `false` goes left, `true` goes right.
    ///
    /// Returns `None` for a leaf or for a position outside the arena.
    pub fn child(&self, id: NodeId, right: bool) -> Option<NodeId> {
        match self.node(id)? {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right: r, .. } => {
                let next = if right { *r } else { *left };
                self.node(next).map(|_| next)
            }
        }
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built tree; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// True when the whole tree is one leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.node(self.root).is_some_and(HuffmanNode::is_leaf)
    }

    /// Frequency of the root, i.e. the number of characters in the phrase.
    pub fn weight(&self) -> usize {
        self.node(self.root).map_or(0, HuffmanNode::freq)
    }

    /// Depth of the leaf holding `symbol`, or `None` if it is not in the tree.
    ///
    /// A single-leaf tree reports depth 0 even though its code is one bit.
    pub fn depth_of(&self, symbol: char) -> Option<usize> {
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            match self.node(id)? {
                HuffmanNode::Leaf { symbol: s, .. } if *s == symbol => return Some(depth),
                HuffmanNode::Leaf { .. } => {}
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((*right, depth + 1));
                    stack.push((*left, depth + 1));
                }
            }
        }
        None
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Tree Structure:")?;
        let mut stack = vec![(self.root, 0usize, "root")];
        while let Some((id, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match self.node(id) {
                Some(HuffmanNode::Leaf { symbol, freq }) => {
                    writeln!(f, "{indent}{label}-> Leaf: {symbol:?} [weight: {freq}]")?;
                }
                Some(HuffmanNode::Internal { freq, left, right }) => {
                    writeln!(f, "{indent}{label}-> Internal [weight: {freq}]")?;
                    stack.push((*right, depth + 1, "R"));
                    stack.push((*left, depth + 1, "L"));
                }
                None => writeln!(f, "{indent}{label}-> <missing node {}>", id.0)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: char, freq: usize, id: usize) -> Priority {
        Priority::new(&HuffmanNode::Leaf { symbol, freq }, NodeId(id))
    }

    fn internal(freq: usize, id: usize) -> Priority {
        let node = HuffmanNode::Internal {
            freq,
            left: NodeId(0),
            right: NodeId(1),
        };
        Priority::new(&node, NodeId(id))
    }

    #[test]
    fn test_lower_frequency_first() {
        assert!(leaf('z', 1, 5) < leaf('a', 2, 0));
        assert!(leaf(' ', 3, 0) > leaf('q', 2, 1));
        assert!(internal(2, 9) < leaf(' ', 3, 0));
    }

    #[test]
    fn test_space_wins_frequency_tie() {
        assert!(leaf(' ', 4, 7) < leaf('!', 4, 0));
        assert!(leaf(' ', 4, 7) < leaf('\0', 4, 0));
        assert!(leaf(' ', 4, 7) < internal(4, 1));
    }

    #[test]
    fn test_code_point_breaks_remaining_ties() {
        assert!(leaf('a', 2, 9) < leaf('b', 2, 0));
        assert!(leaf('A', 2, 9) < leaf('a', 2, 0));
        assert!(leaf('!', 2, 9) < leaf('A', 2, 0));
    }

    #[test]
    fn test_internal_ties() {
        // Internal nodes rank as NUL: ahead of printable leaves, then by creation order.
        assert!(internal(2, 9) < leaf('a', 2, 0));
        assert!(internal(2, 3) < internal(2, 4));
        assert!(leaf('\0', 2, 0) < internal(2, 3));
    }

    #[test]
    fn test_priority_is_total() {
        let mut keys = vec![
            internal(2, 6),
            leaf('b', 2, 2),
            leaf(' ', 2, 0),
            internal(2, 5),
            leaf('a', 1, 1),
            leaf('c', 3, 3),
        ];
        keys.sort();
        let ids: Vec<usize> = keys.iter().map(|k| k.id.index()).collect();
        assert_eq!(ids, vec![1, 0, 5, 6, 2, 3]);
        for pair in keys.windows(2) {
            assert_ne!(pair[0].cmp(&pair[1]), std::cmp::Ordering::Equal);
        }
    }

    #[test]
    fn test_empty_table() {
        let freq = FrequencyTable::from_text("");
        assert_eq!(HuffmanTree::build(&freq), Err(Error::EmptyInput));
    }

    #[test]
    fn test_single_symbol_is_leaf_root() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("aaaa")).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(tree.root()),
            Some(&HuffmanNode::Leaf {
                symbol: 'a',
                freq: 4
            })
        );
        assert_eq!(tree.depth_of('a'), Some(0));
    }

    #[test]
    fn test_merge_order() {
        // a, b, c all appear once: a and b merge first, then c joins on the left.
        let tree = HuffmanTree::build(&FrequencyTable::from_text("abc")).unwrap();
        assert_eq!(tree.len(), 5);
        assert_eq!(
            tree.node(NodeId(3)),
            Some(&HuffmanNode::Internal {
                freq: 2,
                left: NodeId(0),
                right: NodeId(1)
            })
        );
        assert_eq!(
            tree.node(tree.root()),
            Some(&HuffmanNode::Internal {
                freq: 3,
                left: NodeId(2),
                right: NodeId(3)
            })
        );
        assert_eq!(tree.child(tree.root(), false), Some(NodeId(2)));
        assert_eq!(tree.child(tree.root(), true), Some(NodeId(3)));
        assert_eq!(tree.child(NodeId(2), false), None);
    }

    #[test]
    fn test_space_is_merged_first() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("a b")).unwrap();
        assert_eq!(tree.depth_of(' '), Some(2));
        assert_eq!(tree.depth_of('a'), Some(2));
        assert_eq!(tree.depth_of('b'), Some(1));
        assert_eq!(tree.depth_of('x'), None);
    }

    #[test]
    fn test_structure_of_default_phrase() {
        let freq = FrequencyTable::from_text("create a huffman tree");
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.leaf_count(), 11);
        assert_eq!(tree.len(), 21);
        assert_eq!(tree.weight(), 21);
        assert_eq!(tree.depth_of('e'), Some(2));
        assert_eq!(tree.depth_of('c'), Some(5));
    }

    #[test]
    fn test_build_is_deterministic() {
        let freq = FrequencyTable::from_text("mississippi river");
        let first = HuffmanTree::build(&freq).unwrap();
        let second = HuffmanTree::build(&freq).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_child_is_unmatched_path() {
        let tree = HuffmanTree {
            nodes: vec![
                HuffmanNode::Leaf {
                    symbol: 'a',
                    freq: 1,
                },
                HuffmanNode::Internal {
                    freq: 2,
                    left: NodeId(0),
                    right: NodeId(7),
                },
            ],
            root: NodeId(1),
        };
        assert_eq!(tree.child(tree.root(), true), None);
        assert_eq!(super::super::decode("0", &tree).unwrap(), "a");
        assert_eq!(
            super::super::decode("01", &tree),
            Err(Error::UnmatchedPath { position: 1 })
        );
    }

    #[test]
    fn test_display() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("ab")).unwrap();
        let rendered = tree.to_string();
        assert_eq!(
            rendered,
            "Huffman Tree Structure:\n\
             root-> Internal [weight: 2]\n\
             \x20 L-> Leaf: 'a' [weight: 1]\n\
             \x20 R-> Leaf: 'b' [weight: 1]\n"
        );
    }
}
