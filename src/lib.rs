//! # huffman_lab
//!
//! Builds a Huffman code for the characters of a phrase, encodes text into a
//! string of `'0'` and `'1'` characters, and decodes it back.
//!
//! ```rust
//! use huffman_lab::HuffmanSession;
//!
//! let mut session = HuffmanSession::new();
//! let encoding = session.build_and_encode("aaaa")?;
//! assert_eq!(encoding.bits, "0000");
//! assert_eq!(encoding.codes.get('a'), Some("0"));
//! assert_eq!(session.decode("0000")?, "aaaa");
//! # Ok::<(), huffman_lab::Error>(())
//! ```

pub mod cs;
pub mod error;

pub use cs::compression;
pub use cs::compression::huffman::{CodeTable, Encoding, HuffmanSession, HuffmanTree, DEFAULT_PHRASE};
pub use error::{Error, Result};
