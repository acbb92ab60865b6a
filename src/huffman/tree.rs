//! Huffman tree construction.
//!
//! The tree is built with two FIFO queues instead of a heap. `source` holds
//! one leaf per frequency entry in ascending order and `target` receives the
//! merged nodes. Because `source` is pre-sorted and merged weights only grow,
//! both queue fronts are always the two cheapest candidates, so every merge
//! picks the lowest-probability pair exactly as a priority queue would. Ties
//! prefer `source`, which keeps code assignment reproducible.

use crate::error::Error;
use crate::huffman::frequency::FrequencyEntry;
use crate::huffman::Result;
use log::{debug, trace};
use std::collections::VecDeque;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its probability.
    Leaf { ch: char, probability: f64 },
    /// An internal node owns both children; its probability is their sum.
    Internal {
        probability: f64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Creates a leaf for a frequency entry.
    pub fn leaf(entry: &FrequencyEntry) -> Self {
        HuffmanNode::Leaf {
            ch: entry.character(),
            probability: entry.probability(),
        }
    }

    /// Combine two nodes under a new internal node, `left` taking the 0 branch.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            probability: left.probability() + right.probability(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the probability of the node.
    pub fn probability(&self) -> f64 {
        match self {
            HuffmanNode::Leaf { probability, .. } => *probability,
            HuffmanNode::Internal { probability, .. } => *probability,
        }
    }

    /// Returns true for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The character held by a leaf, `None` for internal nodes.
    pub fn character(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { ch, .. } => Some(*ch),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// The 0 branch of an internal node.
    pub fn left(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, .. } => Some(left),
        }
    }

    /// The 1 branch of an internal node.
    pub fn right(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { right, .. } => Some(right),
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Build the Huffman tree from a frequency list sorted ascending by
/// probability.
///
/// # Errors
///
/// Returns `Error::TooFewEntries` when fewer than two entries are given.
pub fn build_huffman_tree(entries: &[FrequencyEntry]) -> Result<HuffmanNode> {
    if entries.len() < 2 {
        return Err(Error::TooFewEntries(entries.len()));
    }

    let mut source: VecDeque<HuffmanNode> = entries.iter().map(HuffmanNode::leaf).collect();
    let mut target: VecDeque<HuffmanNode> = VecDeque::with_capacity(entries.len());

    let (Some(first), Some(second)) = (source.pop_front(), source.pop_front()) else {
        return Err(Error::TooFewEntries(entries.len()));
    };
    target.push_back(HuffmanNode::merge(first, second));

    while target.len() != 1 || !source.is_empty() {
        let left = take_lowest(&mut source, &mut target);
        let right = take_lowest(&mut source, &mut target);
        let (Some(left), Some(right)) = (left, right) else {
            return Err(Error::TooFewEntries(entries.len()));
        };
        trace!(
            "merging {:.6} + {:.6}",
            left.probability(),
            right.probability()
        );
        target.push_back(HuffmanNode::merge(left, right));
    }

    let root = target
        .pop_front()
        .ok_or(Error::TooFewEntries(entries.len()))?;
    debug!(
        "huffman tree built: {} leaves, depth {}",
        root.leaf_count(),
        root.depth()
    );
    Ok(root)
}

// Dequeue from whichever front is cheaper; `source` wins ties.
fn take_lowest(
    source: &mut VecDeque<HuffmanNode>,
    target: &mut VecDeque<HuffmanNode>,
) -> Option<HuffmanNode> {
    match (source.front(), target.front()) {
        (None, _) => target.pop_front(),
        (Some(_), None) => source.pop_front(),
        (Some(s), Some(t)) if s.probability() <= t.probability() => source.pop_front(),
        _ => target.pop_front(),
    }
}
