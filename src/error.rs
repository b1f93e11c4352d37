//! Error types for Huffman coding operations.

use thiserror::Error;

/// Error variants for building, encoding, and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The phrase has no content to build a tree from.
    #[error("cannot encode an empty phrase")]
    EmptyInput,

    /// Decoding was attempted before any tree was built.
    #[error("no Huffman tree exists, encode a phrase first")]
    NoTreeAvailable,

    /// The bitstring contains something other than '0' or '1'.
    #[error("invalid binary input: found {found:?} at position {position}, only 0s and 1s are allowed")]
    InvalidBinaryInput { found: char, position: usize },

    /// The bit sequence walked off the tree.
    #[error("invalid binary path at bit {position}: does not match any Huffman code")]
    UnmatchedPath { position: usize },

    /// The text contains a character that has no code.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// The bitstring ended in the middle of a code.
    #[error("bitstring ends mid-code with {pending_bits} unmatched bit(s)")]
    IncompleteCode { pending_bits: usize },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
