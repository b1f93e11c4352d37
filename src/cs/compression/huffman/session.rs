use super::code_table::CodeTable;
use super::codec;
use super::frequency::FrequencyTable;
use super::tree::HuffmanTree;
use crate::error::{Error, Result};

/// Result of encoding a phrase: the code table and the encoded bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub codes: CodeTable,
    pub bits: String,
}

/// Holds the most recently built tree and code table.
///
/// Every successful [`build_and_encode`](Self::build_and_encode) replaces both.
/// Decoding requires a prior build; failed calls leave the session unchanged.
///
/// # Example
///
/// ```
/// use huffman_lab::{Error, HuffmanSession};
///
/// let mut session = HuffmanSession::new();
/// assert_eq!(session.decode("01"), Err(Error::NoTreeAvailable));
///
/// let encoding = session.build_and_encode("create a huffman tree").unwrap();
/// assert_eq!(session.decode(&encoding.bits).unwrap(), "create a huffman tree");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HuffmanSession {
    state: Option<(HuffmanTree, CodeTable)>,
}

impl HuffmanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh tree for `phrase` and encodes it.
    ///
    /// The phrase is encoded as given, surrounding whitespace included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the phrase is empty or whitespace-only;
    /// the previous tree is kept in that case.
    pub fn build_and_encode(&mut self, phrase: &str) -> Result<Encoding> {
        if phrase.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let freq_table = FrequencyTable::from_text(phrase);
        let tree = HuffmanTree::build(&freq_table)?;
        let codes = CodeTable::from_tree(&tree);
        let bits = codec::encode(phrase, &codes)?;
        log::debug!(
            "encoded {} chars into {} bits with {} codes",
            freq_table.total(),
            bits.len(),
            codes.len()
        );

        self.state = Some((tree, codes.clone()));
        Ok(Encoding { codes, bits })
    }

    /// Decodes `bits` with the current tree, dropping an incomplete trailing code.
    ///
    /// # Errors
    ///
    /// * [`Error::NoTreeAvailable`] if nothing has been built yet
    /// * [`Error::InvalidBinaryInput`] for characters other than `'0'`/`'1'`
    /// * [`Error::UnmatchedPath`] if the bits walk off the tree
    pub fn decode(&self, bits: &str) -> Result<String> {
        codec::decode(bits, self.tree().ok_or(Error::NoTreeAvailable)?)
    }

    /// Strict variant of [`decode`](Self::decode) that also rejects an
    /// incomplete trailing code with [`Error::IncompleteCode`].
    pub fn decode_exact(&self, bits: &str) -> Result<String> {
        codec::decode_exact(bits, self.tree().ok_or(Error::NoTreeAvailable)?)
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.state.as_ref().map(|(tree, _)| tree)
    }

    pub fn codes(&self) -> Option<&CodeTable> {
        self.state.as_ref().map(|(_, codes)| codes)
    }

    pub fn has_tree(&self) -> bool {
        self.state.is_some()
    }

    /// Forgets the current tree and code table.
    pub fn clear(&mut self) {
        self.state = None;
    }
}
