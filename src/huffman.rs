//! Huffman coding.
//!
//! The pipeline runs leaf-first:
//! - frequency analysis of the source text ([`frequency`])
//! - two-queue tree construction ([`tree`])
//! - code table derivation by tree traversal ([`code_table`])
//! - encoding and decoding of text ([`codec`])
//! - sentinel-padded bit packing ([`bits`])
//!
//! [`coding::HuffmanCoding`] drives the same steps against files.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::huffman::{compress, decompress};
//!
//! let (bytes, tree) = compress("aaabbc")?;
//! assert_eq!(bytes, vec![0x02, 0x3E]);
//! assert_eq!(decompress(&bytes, &tree)?, "aaabbc");
//! # Ok::<(), huffcode::Error>(())
//! ```

use crate::error::Error;

/// Result type for Huffman coding operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod bits;
pub mod code_table;
pub mod codec;
pub mod coding;
pub mod frequency;
pub mod tree;

pub use bits::{
    pack_bits, read_bit_string, unpack_bits, unpack_bits_with, write_bit_string, UnpackMode,
};
pub use code_table::{build_code_table, CodeTable};
pub use codec::{compress, decode, decompress, encode, huffman_decode, huffman_encode};
pub use coding::HuffmanCoding;
pub use frequency::{build_frequency_table, count_characters, FrequencyEntry, ALPHABET_SIZE};
pub use tree::{build_huffman_tree, HuffmanNode};
