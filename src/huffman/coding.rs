//! File-backed Huffman coding session.
//!
//! `HuffmanCoding` runs the pipeline one step at a time against a source
//! file: build the sorted frequency list, build the tree, derive the code
//! table, then encode to or decode from a packed file. Each step keeps its
//! result so later steps and callers can inspect it.

use crate::error::Error;
use crate::huffman::bits::{read_bit_string, write_bit_string, UnpackMode};
use crate::huffman::code_table::CodeTable;
use crate::huffman::codec::{decode, encode};
use crate::huffman::frequency::{build_frequency_table, FrequencyEntry};
use crate::huffman::tree::{build_huffman_tree, HuffmanNode};
use crate::huffman::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HuffmanCoding {
    file_name: PathBuf,
    unpack_mode: UnpackMode,
    sorted_char_freq_list: Option<Vec<FrequencyEntry>>,
    huffman_root: Option<HuffmanNode>,
    encodings: Option<CodeTable>,
}

impl HuffmanCoding {
    /// Creates a session for the text file at `file_name`.
    pub fn new<P: AsRef<Path>>(file_name: P) -> Self {
        HuffmanCoding {
            file_name: file_name.as_ref().to_path_buf(),
            unpack_mode: UnpackMode::default(),
            sorted_char_freq_list: None,
            huffman_root: None,
            encodings: None,
        }
    }

    /// Sets how [`decode`](Self::decode) treats an encoded file whose first
    /// byte has no sentinel bit.
    pub fn with_unpack_mode(mut self, mode: UnpackMode) -> Self {
        self.unpack_mode = mode;
        self
    }

    /// Reads the source file and builds the sorted frequency list.
    pub fn make_sorted_list(&mut self) -> Result<()> {
        let text = fs::read_to_string(&self.file_name)?;
        self.sorted_char_freq_list = Some(build_frequency_table(&text)?);
        Ok(())
    }

    /// Builds the Huffman tree from the sorted frequency list.
    pub fn make_tree(&mut self) -> Result<()> {
        let list = self
            .sorted_char_freq_list
            .as_deref()
            .ok_or(Error::NotReady("make_sorted_list"))?;
        self.huffman_root = Some(build_huffman_tree(list)?);
        Ok(())
    }

    /// Derives the code table from the Huffman tree.
    pub fn make_encodings(&mut self) -> Result<()> {
        let root = self
            .huffman_root
            .as_ref()
            .ok_or(Error::NotReady("make_tree"))?;
        self.encodings = Some(CodeTable::from_tree(root));
        Ok(())
    }

    /// Encodes the source file and writes the packed bits to `encoded_file`.
    pub fn encode<P: AsRef<Path>>(&self, encoded_file: P) -> Result<()> {
        let encodings = self
            .encodings
            .as_ref()
            .ok_or(Error::NotReady("make_encodings"))?;
        let text = fs::read_to_string(&self.file_name)?;
        let bits = encode(&text, encodings)?;
        write_bit_string(&encoded_file, &bits)?;
        info!(
            "encoded {} into {} ({} bits)",
            self.file_name.display(),
            encoded_file.as_ref().display(),
            bits.len()
        );
        Ok(())
    }

    /// Decodes `encoded_file` with the session's tree and writes the text to
    /// `decoded_file`.
    pub fn decode<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        encoded_file: P,
        decoded_file: Q,
    ) -> Result<()> {
        let root = self
            .huffman_root
            .as_ref()
            .ok_or(Error::NotReady("make_tree"))?;
        let bits = read_bit_string(&encoded_file, self.unpack_mode)?;
        let text = decode(&bits, root)?;
        fs::write(&decoded_file, &text)?;
        info!(
            "decoded {} into {} ({} characters)",
            encoded_file.as_ref().display(),
            decoded_file.as_ref().display(),
            text.len()
        );
        Ok(())
    }

    /// Path of the source text file.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Frequency list from [`make_sorted_list`](Self::make_sorted_list), if it has run.
    pub fn sorted_char_freq_list(&self) -> Option<&[FrequencyEntry]> {
        self.sorted_char_freq_list.as_deref()
    }

    /// Tree root from [`make_tree`](Self::make_tree), if it has run.
    pub fn huffman_root(&self) -> Option<&HuffmanNode> {
        self.huffman_root.as_ref()
    }

    /// Code table from [`make_encodings`](Self::make_encodings), if it has run.
    pub fn encodings(&self) -> Option<&CodeTable> {
        self.encodings.as_ref()
    }
}
