//! Huffman coding of text phrases.
//!
//! Builds a prefix-free binary code for the characters of a phrase, encodes
//! text into a string of `'0'`/`'1'` characters, and decodes such a string
//! back with the same tree.
//!
//! Merge order is fully deterministic. Nodes with lower frequency are merged
//! first; on equal frequency the space character goes first, then the smaller
//! code point. Internal nodes rank as the NUL character and fall back to
//! creation order, so the same phrase always produces the same codes.
//!
//! # Examples
//!
//! ```rust
//! use huffman_lab::cs::compression::huffman::{huffman_decode, huffman_encode};
//!
//! let (encoded, tree) = huffman_encode("aaaa").unwrap();
//! assert_eq!(encoded, "0000");
//! assert_eq!(huffman_decode(&encoded, &tree).unwrap(), "aaaa");
//! ```

pub mod code_table;
pub mod codec;
pub mod frequency;
pub mod session;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::{decode, decode_exact, encode};
pub use frequency::FrequencyTable;
pub use session::{Encoding, HuffmanSession};
pub use tree::{HuffmanNode, HuffmanTree, NodeId, Priority, Rank};

use crate::error::Result;

/// Phrase encoded when no other phrase is supplied.
pub const DEFAULT_PHRASE: &str = "create a huffman tree";

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns (encoded bit string, Huffman tree).
///
/// Unlike [`HuffmanSession::build_and_encode`] this only rejects fully empty
/// input; a whitespace-only phrase is encoded like any other.
pub fn huffman_encode(input: &str) -> Result<(String, HuffmanTree)> {
    let freq_table = FrequencyTable::from_text(input);
    let tree = HuffmanTree::build(&freq_table)?;
    let code_table = CodeTable::from_tree(&tree);
    let encoded = encode(input, &code_table)?;
    Ok((encoded, tree))
}

/// Convenience function: decodes an encoded bit string using the provided Huffman tree.
pub fn huffman_decode(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    decode(encoded, tree)
}
