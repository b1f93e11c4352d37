//! Compression algorithms implementation.
//!
//! This module provides:
//! - Huffman coding of text phrases into `'0'`/`'1'` bitstrings
//! - A session type that keeps the last built tree for later decoding

pub mod huffman;
pub use huffman::{
    decode, decode_exact, encode, huffman_decode, huffman_encode, CodeTable, Encoding,
    FrequencyTable, HuffmanNode, HuffmanSession, HuffmanTree, DEFAULT_PHRASE,
};
