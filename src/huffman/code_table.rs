//! Code table derivation from a finished Huffman tree.

use crate::huffman::frequency::{FrequencyEntry, ALPHABET_SIZE};
use crate::huffman::tree::HuffmanNode;
use log::debug;

/// Maps each ASCII character to its bitstring code.
///
/// Only characters that appear as leaves of the tree have a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<String>>,
}

impl CodeTable {
    /// Walk the tree, appending '0' for every left branch and '1' for every
    /// right branch, and record the path at each leaf.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        assign_codes(root, String::new(), &mut codes);
        let table = CodeTable { codes };
        debug!("code table built: {} codes", table.len());
        table
    }

    /// The code for `ch`, if it occurs in the tree.
    pub fn get(&self, ch: char) -> Option<&str> {
        self.codes
            .get(ch as usize)
            .and_then(|code| code.as_deref())
    }

    /// Number of characters with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Characters and their codes in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().enumerate().filter_map(|(index, code)| {
            let code = code.as_deref()?;
            Some((char::from(index as u8), code))
        })
    }

    /// Expected bits per character under the given distribution.
    pub fn average_code_length(&self, entries: &[FrequencyEntry]) -> f64 {
        entries
            .iter()
            .filter_map(|entry| {
                self.get(entry.character())
                    .map(|code| code.len() as f64 * entry.probability())
            })
            .sum()
    }
}

/// Build the code table for the given tree.
pub fn build_code_table(root: &HuffmanNode) -> CodeTable {
    CodeTable::from_tree(root)
}

fn assign_codes(node: &HuffmanNode, prefix: String, codes: &mut [Option<String>]) {
    match node {
        HuffmanNode::Leaf { ch, .. } => {
            if let Some(slot) = codes.get_mut(*ch as usize) {
                *slot = Some(prefix);
            }
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            assign_codes(left, left_prefix, codes);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            assign_codes(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::build_frequency_table;
    use crate::huffman::tree::build_huffman_tree;
    use approx::assert_relative_eq;

    fn table_for(text: &str) -> CodeTable {
        let frequencies = build_frequency_table(text).unwrap();
        let root = build_huffman_tree(&frequencies).unwrap();
        build_code_table(&root)
    }

    #[test]
    fn test_example_codes() {
        let table = table_for("aaabbc");
        assert_eq!(table.get('a'), Some("0"));
        assert_eq!(table.get('c'), Some("10"));
        assert_eq!(table.get('b'), Some("11"));
        assert_eq!(table.get('d'), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = table_for("this is an example for huffman encoding");
        let codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_every_source_character_has_code() {
        let text = "huffman coding in rust is fun!";
        let table = table_for(text);
        for ch in text.chars() {
            assert!(table.get(ch).is_some(), "Missing code for '{}'", ch);
        }
    }

    #[test]
    fn test_single_symbol_code_is_not_empty() {
        let table = table_for("aaaaaaa");
        let code = table.get('a').unwrap();
        assert_eq!(code.len(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_iter_is_ordered_by_character() {
        let table = table_for("cabbage");
        let chars: Vec<char> = table.iter().map(|(ch, _)| ch).collect();
        assert_eq!(chars, vec!['a', 'b', 'c', 'e', 'g']);
    }

    #[test]
    fn test_average_code_length() {
        let frequencies = build_frequency_table("aaabbc").unwrap();
        let root = build_huffman_tree(&frequencies).unwrap();
        let table = build_code_table(&root);
        // 0.5 * 1 + (1/3) * 2 + (1/6) * 2
        assert_relative_eq!(table.average_code_length(&frequencies), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_character() {
        let table = table_for("ab");
        assert_eq!(table.get('\u{e9}'), None);
        assert!(!table.is_empty());
    }
}
