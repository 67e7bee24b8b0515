use log::trace;

use crate::error::{HuffmanError, Result};
use crate::frequency::ByteFrequencies;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        count: usize,
    },
    Internal {
        left: Box<HuffNode>,
        right: Box<HuffNode>,
        count: usize,
    },
}

impl HuffNode {
    pub fn count(&self) -> usize {
        match self {
            HuffNode::Leaf { count, .. } => *count,
            HuffNode::Internal { count, .. } => *count,
        }
    }

    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            count: left.count() + right.count(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds the tree bottom-up by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are seeded in ascending byte order. Among nodes of equal count the
    /// one earliest in the working list is taken first, and merged nodes go to
    /// the back of the list. The first node taken becomes the left child.
    pub fn build(frequencies: &ByteFrequencies) -> Result<Self> {
        let mut nodes: Vec<HuffNode> = frequencies
            .iter()
            .map(|(symbol, count)| HuffNode::Leaf { symbol, count })
            .collect();

        loop {
            let Some(left) = take_lightest(&mut nodes) else {
                return Err(HuffmanError::EmptyInput);
            };
            let Some(right) = take_lightest(&mut nodes) else {
                trace!("huffman tree: {left:?}");
                return Ok(left);
            };
            nodes.push(HuffNode::merge(left, right));
        }
    }
}

fn take_lightest(nodes: &mut Vec<HuffNode>) -> Option<HuffNode> {
    // min_by_key keeps the first of several equal minima
    let index = nodes
        .iter()
        .enumerate()
        .min_by_key(|(_, node)| node.count())
        .map(|(index, _)| index)?;
    Some(nodes.remove(index))
}
