//! Text encoding and decoding against a Huffman code.

use crate::error::Error;
use crate::huffman::bits::{pack_bits, unpack_bits};
use crate::huffman::code_table::{build_code_table, CodeTable};
use crate::huffman::frequency::build_frequency_table;
use crate::huffman::tree::{build_huffman_tree, HuffmanNode};
use crate::huffman::Result;
use log::debug;

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code.
///
/// # Errors
///
/// Returns `Error::MissingCode` if a character of `input` has no code, which
/// means the table was built from a different text.
pub fn encode(input: &str, code_table: &CodeTable) -> Result<String> {
    let mut encoded = String::with_capacity(input.len() * 4);
    for ch in input.chars() {
        let code = code_table.get(ch).ok_or(Error::MissingCode(ch))?;
        encoded.push_str(code);
    }
    debug!(
        "encoded {} characters into {} bits",
        input.len(),
        encoded.len()
    );
    Ok(encoded)
}

/// Decode an encoded bit string using the Huffman tree.
/// Walks the tree one bit at a time and restarts at the root after each leaf.
///
/// # Errors
///
/// Returns `Error::InvalidBit` for characters other than '0' and '1', and
/// `Error::IncompleteCode` if the bits run out partway down the tree or lead
/// below a leaf.
pub fn decode(encoded: &str, tree: &HuffmanNode) -> Result<String> {
    let mut result = String::new();
    let mut current = tree;

    for bit in encoded.chars() {
        let next = match bit {
            '0' => current.left(),
            '1' => current.right(),
            other => return Err(Error::InvalidBit(other)),
        };
        current = next.ok_or(Error::IncompleteCode)?;
        if let Some(ch) = current.character() {
            result.push(ch);
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        return Err(Error::IncompleteCode);
    }
    Ok(result)
}

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns (encoded bit string, Huffman tree).
pub fn huffman_encode(input: &str) -> Result<(String, HuffmanNode)> {
    let frequencies = build_frequency_table(input)?;
    let tree = build_huffman_tree(&frequencies)?;
    let code_table = build_code_table(&tree);
    let encoded = encode(input, &code_table)?;
    Ok((encoded, tree))
}

/// Convenience function: decodes an encoded bit string using the provided Huffman tree.
pub fn huffman_decode(encoded: &str, tree: &HuffmanNode) -> Result<String> {
    decode(encoded, tree)
}

/// Encode `input` and pack the bits into sentinel-padded bytes.
pub fn compress(input: &str) -> Result<(Vec<u8>, HuffmanNode)> {
    let (encoded, tree) = huffman_encode(input)?;
    let bytes = pack_bits(&encoded)?;
    Ok((bytes, tree))
}

/// Unpack bytes produced by [`compress`] and decode them with `tree`.
pub fn decompress(bytes: &[u8], tree: &HuffmanNode) -> Result<String> {
    let encoded = unpack_bits(bytes)?;
    decode(&encoded, tree)
}
