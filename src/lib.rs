pub mod error;
pub mod huffman;

pub use error::{Error, Result};
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, compress, count_characters,
    decode, decompress, encode, huffman_decode, huffman_encode, pack_bits, read_bit_string,
    unpack_bits, unpack_bits_with, write_bit_string, CodeTable, FrequencyEntry, HuffmanCoding,
    HuffmanNode, UnpackMode, ALPHABET_SIZE,
};
