use super::code_table::CodeTable;
use super::tree::{HuffmanNode, HuffmanTree};
use crate::error::{Error, Result};

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] for a character the table has no code for.
/// This cannot happen when the table was built from the same text.
pub fn encode(input: &str, code_table: &CodeTable) -> Result<String> {
    let mut bits = String::new();
    for ch in input.chars() {
        let code = code_table.get(ch).ok_or(Error::UnknownSymbol(ch))?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Decode an encoded bit string using the Huffman tree.
///
/// Traverses the tree according to each bit until a leaf is reached, emits its
/// symbol, and starts again at the root. For a single-leaf tree every bit
/// decodes to that leaf's symbol. An empty bitstring decodes to an empty string.
///
/// Bits left over after the last complete code are dropped with a warning;
/// use [`decode_exact`] to treat them as an error.
///
/// # Errors
///
/// * [`Error::InvalidBinaryInput`] if `encoded` contains anything but `'0'`/`'1'`
/// * [`Error::UnmatchedPath`] if a bit leads to a child that does not exist
///
/// # Example
///
/// ```
/// use huffman_lab::cs::compression::huffman::{huffman_encode, decode};
///
/// let (bits, tree) = huffman_encode("abracadabra").unwrap();
/// assert_eq!(decode(&bits, &tree).unwrap(), "abracadabra");
/// ```
pub fn decode(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    let (text, pending_bits) = walk(encoded, tree)?;
    if pending_bits > 0 {
        log::warn!(
            "dropped {} trailing bit(s) that do not complete a code",
            pending_bits
        );
    }
    Ok(text)
}

/// Like [`decode`], but a bitstring that ends mid-code is an error.
///
/// # Errors
///
/// Everything [`decode`] reports, plus [`Error::IncompleteCode`].
pub fn decode_exact(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    match walk(encoded, tree)? {
        (text, 0) => Ok(text),
        (_, pending_bits) => Err(Error::IncompleteCode { pending_bits }),
    }
}

/// Returns the decoded text and the number of bits consumed since the cursor
/// last left the root.
fn walk(encoded: &str, tree: &HuffmanTree) -> Result<(String, usize)> {
    let bits = parse_bits(encoded)?;
    let root = tree.root();

    // Special case: if tree is a leaf, each bit represents one occurrence
    if let Some(HuffmanNode::Leaf { symbol, .. }) = tree.node(root) {
        return Ok((std::iter::repeat(*symbol).take(bits.len()).collect(), 0));
    }

    let mut result = String::new();
    let mut current = root;
    let mut pending = 0;
    for (position, bit) in bits.into_iter().enumerate() {
        current = tree
            .child(current, bit)
            .ok_or(Error::UnmatchedPath { position })?;
        pending += 1;
        if let Some(HuffmanNode::Leaf { symbol, .. }) = tree.node(current) {
            result.push(*symbol);
            current = root;
            pending = 0;
        }
    }

    Ok((result, pending))
}

/// Validates the whole bitstring before any decoding happens.
fn parse_bits(encoded: &str) -> Result<Vec<bool>> {
    encoded
        .chars()
        .enumerate()
        .map(|(position, ch)| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(Error::InvalidBinaryInput { found, position }),
        })
        .collect()
}
